//! Build configuration: YAML input model and validation.
//!
//! Input shape (`config.yml`):
//!
//! ```yaml
//! start:
//!   lat: 40.0
//!   long: -75.0
//!   brg: 0
//! gameboard:
//!   build_dir: cw
//!   length: 100
//!   width: 50
//!   flag_offset: 5
//! ```
//!
//! Parsing rejects missing fields, non-numeric values and unknown direction
//! tokens; extra keys are ignored. `validate` rejects out-of-range numbers.
//! A `BuildConfig` obtained through `load`/`from_yaml_str` is always valid.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geodesic::{normalize_bearing, GeoPoint};

/// Turn direction at each vertex of the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "cw", alias = "clockwise")]
    Clockwise,
    #[serde(rename = "ccw", alias = "counterclockwise", alias = "counter-clockwise")]
    CounterClockwise,
}

impl Direction {
    /// +1 for clockwise, -1 for counter-clockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    /// Heading change applied after each vertex.
    #[inline]
    pub fn turn_degrees(self) -> f64 {
        90.0 * self.sign()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        };
        write!(f, "{value}")
    }
}

/// Validated build parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BuildConfig {
    pub start: GeoPoint,
    /// Degrees, normalized into [0, 360).
    pub bearing: f64,
    pub direction: Direction,
    /// Meters; walked on B→C and (implicitly) D→A.
    pub length: f64,
    /// Meters; walked on A→B and C→D.
    pub width: f64,
    /// Meters; outward push of each flag from its edge midpoint.
    pub flag_offset: f64,
}

#[derive(Deserialize)]
struct RawConfig {
    start: RawStart,
    gameboard: RawBoard,
}

#[derive(Deserialize)]
struct RawStart {
    lat: f64,
    long: f64,
    brg: f64,
}

#[derive(Deserialize)]
struct RawBoard {
    build_dir: Direction,
    length: f64,
    width: f64,
    flag_offset: f64,
}

impl BuildConfig {
    /// Read and validate a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(text)?;
        let cfg = BuildConfig {
            start: GeoPoint::new(raw.start.lat, raw.start.long),
            bearing: raw.start.brg,
            direction: raw.gameboard.build_dir,
            length: raw.gameboard.length,
            width: raw.gameboard.width,
            flag_offset: raw.gameboard.flag_offset,
        };
        cfg.validate()?;
        Ok(Self {
            bearing: normalize_bearing(cfg.bearing),
            ..cfg
        })
    }

    /// Range checks for all numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.lat.is_finite() || !(-90.0..=90.0).contains(&self.start.lat) {
            return Err(ConfigError::invalid(format!(
                "start latitude must be within [-90, 90], got {}",
                self.start.lat
            )));
        }
        if !self.start.lon.is_finite() {
            return Err(ConfigError::invalid("start longitude must be finite"));
        }
        if !self.bearing.is_finite() {
            return Err(ConfigError::invalid("start bearing must be finite"));
        }
        if !(self.length > 0.0 && self.length.is_finite()) {
            return Err(ConfigError::invalid(format!(
                "length must be > 0 m, got {}",
                self.length
            )));
        }
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(ConfigError::invalid(format!(
                "width must be > 0 m, got {}",
                self.width
            )));
        }
        if !(self.flag_offset >= 0.0 && self.flag_offset.is_finite()) {
            return Err(ConfigError::invalid(format!(
                "flag_offset must be >= 0 m, got {}",
                self.flag_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
start:
  lat: 40.0
  long: -75.0
  brg: 0
gameboard:
  build_dir: cw
  length: 100
  width: 50
  flag_offset: 5
";

    #[test]
    fn parses_sample() {
        let cfg = BuildConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(cfg.start, GeoPoint::new(40.0, -75.0));
        assert_eq!(cfg.bearing, 0.0);
        assert_eq!(cfg.direction, Direction::Clockwise);
        assert_eq!(cfg.length, 100.0);
        assert_eq!(cfg.width, 50.0);
        assert_eq!(cfg.flag_offset, 5.0);
    }

    #[test]
    fn direction_tokens_and_aliases() {
        for (token, expected) in [
            ("cw", Direction::Clockwise),
            ("clockwise", Direction::Clockwise),
            ("ccw", Direction::CounterClockwise),
            ("counterclockwise", Direction::CounterClockwise),
        ] {
            let text = SAMPLE.replace("build_dir: cw", &format!("build_dir: {token}"));
            let cfg = BuildConfig::from_yaml_str(&text).unwrap();
            assert_eq!(cfg.direction, expected, "token {token}");
        }
    }

    #[test]
    fn unknown_direction_is_parse_error() {
        let text = SAMPLE.replace("build_dir: cw", "build_dir: sideways");
        let err = BuildConfig::from_yaml_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn missing_and_non_numeric_fields_are_parse_errors() {
        let missing = SAMPLE.replace("  flag_offset: 5\n", "");
        assert!(matches!(
            BuildConfig::from_yaml_str(&missing),
            Err(ConfigError::Parse(_))
        ));
        let text = SAMPLE.replace("length: 100", "length: long");
        assert!(matches!(
            BuildConfig::from_yaml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn non_positive_dimensions_are_invalid() {
        for (from, to) in [
            ("length: 100", "length: 0"),
            ("width: 50", "width: -1"),
            ("flag_offset: 5", "flag_offset: -0.5"),
            ("lat: 40.0", "lat: 91.0"),
        ] {
            let text = SAMPLE.replace(from, to);
            let err = BuildConfig::from_yaml_str(&text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{to}: {err}");
        }
    }

    #[test]
    fn bearing_is_normalized_and_zero_offset_allowed() {
        let text = SAMPLE
            .replace("brg: 0", "brg: -90")
            .replace("flag_offset: 5", "flag_offset: 0");
        let cfg = BuildConfig::from_yaml_str(&text).unwrap();
        assert_eq!(cfg.bearing, 270.0);
        assert_eq!(cfg.flag_offset, 0.0);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let text = format!("{}notes: north field\n", SAMPLE)
            .replace("  brg: 0\n", "  brg: 0\n  name: gate\n");
        let cfg = BuildConfig::from_yaml_str(&text).unwrap();
        assert_eq!(cfg, BuildConfig::from_yaml_str(SAMPLE).unwrap());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildConfig::load(dir.path().join("config.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
