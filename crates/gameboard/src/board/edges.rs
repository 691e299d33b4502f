//! Edge lengths and ranking.
//!
//! Edge `i` runs from vertex `i` to vertex `(i+1) mod 4`. Ranking is a
//! stable descending sort on length: exact ties keep edge-index order.

use crate::error::BuildError;
use crate::geodesic::{GeoPoint, GeodesicSolver};

use super::vertices::{Side, Vertex};

/// One side of the quadrilateral with its own endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub index: usize,
    pub side: Side,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub length_m: f64,
}

/// Measure all four edges (closing edge D→A included).
pub fn measure_edges<S: GeodesicSolver + ?Sized>(
    solver: &S,
    vertices: &[Vertex; 4],
) -> Result<[Edge; 4], BuildError> {
    let edge = |i: usize| -> Result<Edge, BuildError> {
        let start = vertices[i].point;
        let end = vertices[(i + 1) % 4].point;
        Ok(Edge {
            index: i,
            side: Side::of_edge(i),
            start,
            end,
            length_m: solver.inverse(start, end)?,
        })
    };
    Ok([edge(0)?, edge(1)?, edge(2)?, edge(3)?])
}

/// Sort edges longest first; equal lengths keep their original order.
pub fn rank(mut edges: [Edge; 4]) -> [Edge; 4] {
    edges.sort_by(|a, b| b.length_m.total_cmp(&a.length_m));
    edges
}

/// Measure and rank. The first two entries are the longest sides, the last
/// two the shortest.
pub fn rank_edges<S: GeodesicSolver + ?Sized>(
    solver: &S,
    vertices: &[Vertex; 4],
) -> Result<[Edge; 4], BuildError> {
    Ok(rank(measure_edges(solver, vertices)?))
}
