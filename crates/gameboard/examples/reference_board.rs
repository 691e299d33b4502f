//! Reference board: 100 m × 50 m, clockwise from (40, -75) at bearing 0.
//!
//! Prints both tables, the edge ranking, and the YAML artifact to stdout.

use gameboard::output::to_yaml_string;
use gameboard::prelude::*;

fn main() {
    let cfg = BuildConfig {
        start: GeoPoint::new(40.0, -75.0),
        bearing: 0.0,
        direction: Direction::Clockwise,
        length: 100.0,
        width: 50.0,
        flag_offset: 5.0,
    };
    let board = build_gameboard(&cfg, &Wgs84).expect("reference board builds");
    let records = board.records();

    println!("{}", render_decimal_degrees_table(&records));
    println!("{}", render_decimal_minutes_table(&records));
    for e in &board.ranked_edges {
        println!("edge {} ({:?}): {:.4} m", e.index, e.side, e.length_m);
    }
    print!("{}", to_yaml_string(&records).expect("8 records"));
}
