//! Geodesic gameboard construction.
//!
//! A gameboard is a rectangle-like geodesic quadrilateral on the WGS84
//! ellipsoid, walked out from an anchor point. Besides the four corners the
//! builder derives the midpoints of the two longest edges and two flag
//! markers pushed outward from the two shortest edges.
//!
//! Pipeline
//! - `config`: YAML input model and validation (`BuildConfig`).
//! - `board`: vertex walk, edge ranking, midpoint/flag placement.
//! - `format`: decimal-degree and degree-decimal-minute rendering + tables.
//! - `output`: the 8-record artifact (YAML/JSON).
//!
//! The ellipsoidal math lives behind `geodesic::GeodesicSolver`; `Wgs84` is
//! the production implementation.

pub mod board;
pub mod config;
pub mod error;
pub mod format;
pub mod geodesic;
pub mod output;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use board::{build_gameboard, Gameboard};
pub use config::{BuildConfig, Direction};
pub use error::{BuildError, ConfigError, OutputError};
pub use geodesic::{GeoPoint, GeodesicSolver, Wgs84};
pub use output::{Location, OutputRecord};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::{
        build_gameboard, build_vertices, flag_bearing, flag_position, midpoint, rank_edges, Edge,
        FlagSlot, Gameboard, Side, Vertex,
    };
    pub use crate::config::{BuildConfig, Direction};
    pub use crate::error::{BuildError, ConfigError, OutputError};
    pub use crate::format::{
        render_decimal_degrees_table, render_decimal_minutes_table, DecimalMinutes,
    };
    pub use crate::geodesic::{normalize_bearing, GeoPoint, GeodesicSolver, Wgs84};
    pub use crate::output::{Location, OutputRecord};
}
