//! Geodesic Engine: thin seam over an ellipsoidal (WGS84) solver.
//!
//! - `GeoPoint`: latitude/longitude pair in decimal degrees.
//! - `GeodesicSolver`: direct problem (point + bearing + distance → point),
//!   inverse problem (two points → distance), and initial bearing.
//! - `Wgs84`: implementation backed by `geo::Geodesic` (Karney's algorithm).
//!
//! Coordinates stay in full `f64` precision here; rounding happens only in
//! `format`/`output`.

use geo::{Bearing, Destination, Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// WGS84 point in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

// geo uses x = longitude, y = latitude.
impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lon, p.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        GeoPoint::new(p.y(), p.x())
    }
}

/// Direct/inverse geodesic problems on some Earth model.
pub trait GeodesicSolver {
    /// Destination after travelling `distance_m` from `from` at `bearing_deg`.
    fn direct(&self, from: GeoPoint, bearing_deg: f64, distance_m: f64)
        -> Result<GeoPoint, BuildError>;

    /// Geodesic distance in meters.
    fn inverse(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, BuildError>;

    /// Initial azimuth at `a` of the geodesic towards `b`, in [0, 360).
    fn bearing(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, BuildError>;
}

/// WGS84 ellipsoid solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wgs84;

impl GeodesicSolver for Wgs84 {
    fn direct(
        &self,
        from: GeoPoint,
        bearing_deg: f64,
        distance_m: f64,
    ) -> Result<GeoPoint, BuildError> {
        let origin: Point<f64> = from.into();
        let to: GeoPoint = Geodesic::destination(origin, bearing_deg, distance_m).into();
        if !to.is_finite() {
            return Err(BuildError::compute(format!(
                "direct problem from ({}, {}) at {bearing_deg}° for {distance_m} m did not converge",
                from.lat, from.lon
            )));
        }
        Ok(to)
    }

    fn inverse(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, BuildError> {
        let (pa, pb): (Point<f64>, Point<f64>) = (a.into(), b.into());
        let s12: f64 = Geodesic::distance(pa, pb);
        if !s12.is_finite() {
            return Err(BuildError::compute(format!(
                "inverse problem between ({}, {}) and ({}, {}) did not converge",
                a.lat, a.lon, b.lat, b.lon
            )));
        }
        Ok(s12)
    }

    fn bearing(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, BuildError> {
        let (pa, pb): (Point<f64>, Point<f64>) = (a.into(), b.into());
        let azi: f64 = Geodesic::bearing(pa, pb);
        if !azi.is_finite() {
            return Err(BuildError::compute("initial azimuth is not finite"));
        }
        Ok(normalize_bearing(azi))
    }
}

/// Map any finite bearing into [0, 360).
#[inline]
pub fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_bearing_wraps_both_ways() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(450.0), 90.0);
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert!(normalize_bearing(-1e-20) < 360.0);
    }

    #[test]
    fn direct_then_inverse_recovers_distance() {
        let solver = Wgs84;
        let a = GeoPoint::new(40.0, -75.0);
        let b = solver.direct(a, 37.5, 1234.5).unwrap();
        let d = solver.inverse(a, b).unwrap();
        assert!((d - 1234.5).abs() < 1e-6, "distance {d}");
        let azi = solver.bearing(a, b).unwrap();
        assert!((azi - 37.5).abs() < 1e-6, "azimuth {azi}");
    }

    #[test]
    fn point_conversion_swaps_axes() {
        let p: Point<f64> = GeoPoint::new(-33.0, 151.0).into();
        assert_eq!(p.x(), 151.0);
        assert_eq!(p.y(), -33.0);
        assert_eq!(GeoPoint::from(p), GeoPoint::new(-33.0, 151.0));
    }

    #[test]
    fn one_degree_of_latitude_near_equator() {
        // Meridian arc from 0° to 1° on WGS84 is ~110574.4 m.
        let d = Wgs84
            .inverse(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0))
            .unwrap();
        assert!((d - 110_574.4).abs() < 1.0, "distance {d}");
    }
}
