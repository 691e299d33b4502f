//! Criterion benchmarks for the gameboard pipeline.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gameboard::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_config(rng: &mut StdRng) -> BuildConfig {
    let width = rng.gen_range(10.0..200.0);
    BuildConfig {
        start: GeoPoint::new(rng.gen_range(-60.0..60.0), rng.gen_range(-180.0..180.0)),
        bearing: rng.gen_range(0.0..360.0),
        direction: if rng.gen::<bool>() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        },
        length: width * rng.gen_range(1.2..3.0),
        width,
        flag_offset: rng.gen_range(0.0..20.0),
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("gameboard");
    let mut rng = StdRng::seed_from_u64(42);

    group.bench_function("build_gameboard", |b| {
        b.iter_batched(
            || random_config(&mut rng),
            |cfg| {
                let _board = build_gameboard(&cfg, &Wgs84).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    let cfg = random_config(&mut StdRng::seed_from_u64(7));
    let board = build_gameboard(&cfg, &Wgs84).unwrap();
    group.bench_function("rank_edges", |b| {
        b.iter(|| rank_edges(&Wgs84, &board.vertices).unwrap())
    });
    group.bench_function("records_and_tables", |b| {
        b.iter(|| {
            let records = board.records();
            let _dd = render_decimal_degrees_table(&records);
            let _dm = render_decimal_minutes_table(&records);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
