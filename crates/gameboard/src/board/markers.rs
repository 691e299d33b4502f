//! Midpoints of the long edges and flags off the short edges.
//!
//! Midpoints are the arithmetic mean of the endpoint coordinates (planar
//! approximation, adequate at field scale).
//!
//! Flag bearing rule: start from the configured base bearing and add 180°
//! for the first-ranked short edge on clockwise builds, or for the
//! second-ranked short edge on counter-clockwise builds. The rule is keyed on
//! rank position only; it does not look at the edge geometry.

use crate::config::Direction;
use crate::error::BuildError;
use crate::geodesic::{normalize_bearing, GeoPoint, GeodesicSolver};

use super::edges::Edge;

/// Rank position of a short edge among the two shortest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagSlot {
    First,
    Second,
}

impl FlagSlot {
    pub const BOTH: [FlagSlot; 2] = [FlagSlot::First, FlagSlot::Second];
}

/// A flag marker and the bearing it was pushed along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flag {
    pub point: GeoPoint,
    pub bearing: f64,
}

#[inline]
pub fn midpoint(start: GeoPoint, end: GeoPoint) -> GeoPoint {
    GeoPoint::new((start.lat + end.lat) / 2.0, (start.lon + end.lon) / 2.0)
}

#[inline]
pub fn edge_midpoint(edge: &Edge) -> GeoPoint {
    midpoint(edge.start, edge.end)
}

/// Outward bearing for the flag in `slot`, in [0, 360).
pub fn flag_bearing(direction: Direction, base_bearing: f64, slot: FlagSlot) -> f64 {
    let flipped = matches!(
        (direction, slot),
        (Direction::Clockwise, FlagSlot::First) | (Direction::CounterClockwise, FlagSlot::Second)
    );
    if flipped {
        normalize_bearing(base_bearing + 180.0)
    } else {
        normalize_bearing(base_bearing)
    }
}

/// Push the edge midpoint `offset` meters along the slot's outward bearing.
/// A zero offset leaves the flag on the midpoint.
pub fn flag_position<S: GeodesicSolver + ?Sized>(
    solver: &S,
    edge: &Edge,
    base_bearing: f64,
    slot: FlagSlot,
    direction: Direction,
    offset: f64,
) -> Result<Flag, BuildError> {
    if !(offset >= 0.0 && offset.is_finite()) {
        return Err(BuildError::invalid(format!(
            "flag offset must be >= 0, got {offset}"
        )));
    }
    let mid = edge_midpoint(edge);
    let bearing = flag_bearing(direction, base_bearing, slot);
    let point = if offset == 0.0 {
        mid
    } else {
        solver.direct(mid, bearing, offset)?
    };
    Ok(Flag { point, bearing })
}
