//! Vertex walk: A is the anchor, B/C/D are successive direct-geodesic steps.
//!
//! The heading is rotated by `90° × sign` after every vertex, A included, so
//! the legs are walked at `bearing + k·90°·sign` for k = 1, 2, 3. Widths go on
//! A→B and C→D, lengths on B→C and the implicit closing edge D→A.

use crate::config::Direction;
use crate::error::BuildError;
use crate::geodesic::{normalize_bearing, GeoPoint, GeodesicSolver};
use crate::output::Location;

/// Which configured dimension an edge realizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Length,
    Width,
}

impl Side {
    /// Side of edge `i` (vertex i → vertex (i+1) mod 4).
    #[inline]
    pub fn of_edge(i: usize) -> Side {
        if i % 2 == 0 {
            Side::Width
        } else {
            Side::Length
        }
    }

    #[inline]
    pub fn meters(self, length: f64, width: f64) -> f64 {
        match self {
            Side::Length => length,
            Side::Width => width,
        }
    }
}

/// A labeled corner of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub label: Location,
    pub point: GeoPoint,
}

impl Vertex {
    #[inline]
    pub fn new(label: Location, point: GeoPoint) -> Self {
        Self { label, point }
    }
}

/// Walk the four corners A, B, C, D.
///
/// Fails with `InvalidConfig` for non-positive dimensions or a non-finite
/// bearing, before any solver call.
pub fn build_vertices<S: GeodesicSolver + ?Sized>(
    solver: &S,
    start: GeoPoint,
    start_bearing: f64,
    direction: Direction,
    length: f64,
    width: f64,
) -> Result<[Vertex; 4], BuildError> {
    if !(length > 0.0 && length.is_finite()) {
        return Err(BuildError::invalid(format!("length must be > 0, got {length}")));
    }
    if !(width > 0.0 && width.is_finite()) {
        return Err(BuildError::invalid(format!("width must be > 0, got {width}")));
    }
    if !start_bearing.is_finite() {
        return Err(BuildError::invalid("bearing must be finite"));
    }
    if !start.is_finite() {
        return Err(BuildError::invalid("start point must be finite"));
    }

    let turn = direction.turn_degrees();
    // One leg of the walk: next corner plus the heading for the leg after it.
    let step =
        |from: GeoPoint, heading: f64, side: Side| -> Result<(GeoPoint, f64), BuildError> {
            let to = solver.direct(from, heading, side.meters(length, width))?;
            Ok((to, normalize_bearing(heading + turn)))
        };

    let heading = normalize_bearing(start_bearing + turn);
    let (b, heading) = step(start, heading, Side::of_edge(0))?;
    let (c, heading) = step(b, heading, Side::of_edge(1))?;
    let (d, _) = step(c, heading, Side::of_edge(2))?;

    Ok([
        Vertex::new(Location::A, start),
        Vertex::new(Location::B, b),
        Vertex::new(Location::C, c),
        Vertex::new(Location::D, d),
    ])
}
