//! Gameboard Builder.
//!
//! Pipeline (single pass, no retries):
//! config → vertex walk → edge lengths → ranking → midpoints/flags → records.
//!
//! - `vertices`: the A→B→C→D direct-geodesic walk.
//! - `edges`: inverse-geodesic edge lengths and the stable ranking.
//! - `markers`: long-edge midpoints and short-edge flags.

mod edges;
mod markers;
mod vertices;

pub use edges::{measure_edges, rank, rank_edges, Edge};
pub use markers::{edge_midpoint, flag_bearing, flag_position, midpoint, Flag, FlagSlot};
pub use vertices::{build_vertices, Side, Vertex};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::geodesic::{GeoPoint, GeodesicSolver};
use crate::output::{Location, OutputRecord};

/// Fully derived board. Every field is computed once by `build_gameboard`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gameboard {
    pub vertices: [Vertex; 4],
    /// Longest first; see `rank`.
    pub ranked_edges: [Edge; 4],
    /// Midpoints of `ranked_edges[0]` and `ranked_edges[1]`.
    pub midpoints: [GeoPoint; 2],
    /// Flags off `ranked_edges[2]` and `ranked_edges[3]`.
    pub flags: [Flag; 2],
}

impl Gameboard {
    #[inline]
    pub fn longest_edges(&self) -> [&Edge; 2] {
        [&self.ranked_edges[0], &self.ranked_edges[1]]
    }

    #[inline]
    pub fn shortest_edges(&self) -> [&Edge; 2] {
        [&self.ranked_edges[2], &self.ranked_edges[3]]
    }

    /// The 8 output records: A, B, C, D, Mid_1, Mid_2, Flag_1, Flag_2.
    pub fn records(&self) -> Vec<OutputRecord> {
        let corners = self
            .vertices
            .iter()
            .map(|v| OutputRecord::new(v.label, v.point));
        let mids = [Location::Mid1, Location::Mid2]
            .into_iter()
            .zip(self.midpoints)
            .map(|(label, p)| OutputRecord::new(label, p));
        let flags = [Location::Flag1, Location::Flag2]
            .into_iter()
            .zip(self.flags)
            .map(|(label, f)| OutputRecord::new(label, f.point));
        corners.chain(mids).chain(flags).collect()
    }
}

/// Run the whole pipeline for a configuration.
pub fn build_gameboard<S: GeodesicSolver + ?Sized>(
    cfg: &BuildConfig,
    solver: &S,
) -> Result<Gameboard, BuildError> {
    let vertices = build_vertices(
        solver,
        cfg.start,
        cfg.bearing,
        cfg.direction,
        cfg.length,
        cfg.width,
    )?;
    for v in &vertices {
        tracing::debug!(label = %v.label, lat = v.point.lat, lon = v.point.lon, "vertex");
    }

    let ranked_edges = rank_edges(solver, &vertices)?;
    tracing::debug!(
        order = ?ranked_edges.iter().map(|e| e.index).collect::<Vec<_>>(),
        lengths_m = ?ranked_edges.iter().map(|e| e.length_m).collect::<Vec<_>>(),
        "ranked edges"
    );

    let midpoints = [
        edge_midpoint(&ranked_edges[0]),
        edge_midpoint(&ranked_edges[1]),
    ];
    let flag = |slot: FlagSlot, edge: &Edge| {
        flag_position(
            solver,
            edge,
            cfg.bearing,
            slot,
            cfg.direction,
            cfg.flag_offset,
        )
    };
    let flags = [
        flag(FlagSlot::First, &ranked_edges[2])?,
        flag(FlagSlot::Second, &ranked_edges[3])?,
    ];
    for (slot, f) in FlagSlot::BOTH.iter().zip(&flags) {
        tracing::debug!(slot = ?slot, bearing = f.bearing, lat = f.point.lat, lon = f.point.lon, "flag");
    }

    Ok(Gameboard {
        vertices,
        ranked_edges,
        midpoints,
        flags,
    })
}
