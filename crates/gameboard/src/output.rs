//! Output artifact: 8 labeled records, persisted as YAML or JSON.
//!
//! Records serialize as `{Location, Latitude, Longitude}` with coordinates
//! written as strings with 6 fractional digits, e.g.
//!
//! ```yaml
//! - Location: A
//!   Latitude: '40.000000'
//!   Longitude: '-75.000000'
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::OutputError;
use crate::format::format_decimal_degrees;
use crate::geodesic::GeoPoint;

/// Fixed labels, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    A,
    B,
    C,
    D,
    #[serde(rename = "Mid_1")]
    Mid1,
    #[serde(rename = "Mid_2")]
    Mid2,
    #[serde(rename = "Flag_1")]
    Flag1,
    #[serde(rename = "Flag_2")]
    Flag2,
}

impl Location {
    pub const ORDER: [Location; 8] = [
        Location::A,
        Location::B,
        Location::C,
        Location::D,
        Location::Mid1,
        Location::Mid2,
        Location::Flag1,
        Location::Flag2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Location::A => "A",
            Location::B => "B",
            Location::C => "C",
            Location::D => "D",
            Location::Mid1 => "Mid_1",
            Location::Mid2 => "Mid_2",
            Location::Flag1 => "Flag_1",
            Location::Flag2 => "Flag_2",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled coordinate of the artifact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Latitude", with = "six_decimals")]
    pub latitude: f64,
    #[serde(rename = "Longitude", with = "six_decimals")]
    pub longitude: f64,
}

impl OutputRecord {
    #[inline]
    pub fn new(location: Location, point: GeoPoint) -> Self {
        Self {
            location,
            latitude: point.lat,
            longitude: point.lon,
        }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

mod six_decimals {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_decimal_degrees(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.trim().parse().map_err(serde::de::Error::custom)
    }
}

/// Check label order and count.
pub fn check_records(records: &[OutputRecord]) -> Result<(), OutputError> {
    if records.len() != Location::ORDER.len() {
        return Err(OutputError::Malformed {
            reason: format!("expected 8 records, found {}", records.len()),
        });
    }
    for (rec, expected) in records.iter().zip(Location::ORDER) {
        if rec.location != expected {
            return Err(OutputError::Malformed {
                reason: format!("expected {expected}, found {}", rec.location),
            });
        }
    }
    Ok(())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_yaml_string(records: &[OutputRecord]) -> Result<String, OutputError> {
    check_records(records)?;
    Ok(serde_yaml::to_string(records)?)
}

pub fn write_yaml<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<(), OutputError> {
    let text = to_yaml_string(records)?;
    write_bytes(path.as_ref(), text.as_bytes())
}

pub fn write_json<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<(), OutputError> {
    check_records(records)?;
    let bytes = serde_json::to_vec_pretty(records)?;
    write_bytes(path.as_ref(), &bytes)
}

/// Read a YAML artifact back; rejects anything that is not the 8 fixed rows.
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<Vec<OutputRecord>, OutputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<OutputRecord> = serde_yaml::from_str(&text)?;
    check_records(&records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<OutputRecord> {
        Location::ORDER
            .iter()
            .enumerate()
            .map(|(i, &loc)| {
                OutputRecord::new(loc, GeoPoint::new(-33.0 - i as f64 * 1e-4, 151.123456789))
            })
            .collect()
    }

    #[test]
    fn yaml_uses_fixed_keys_and_string_coordinates() {
        let text = to_yaml_string(&sample_records()).unwrap();
        assert!(text.contains("Location: Mid_1"), "{text}");
        assert!(text.contains("Location: Flag_2"), "{text}");
        assert!(text.contains("151.123457"), "{text}");
        assert!(!text.contains("151.1234567"), "{text}");
        let a = text.find("Location: A").unwrap();
        let flag = text.find("Location: Flag_1").unwrap();
        assert!(a < flag);
    }

    #[test]
    fn yaml_file_reads_back_to_six_decimals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/output.yml");
        let records = sample_records();
        write_yaml(&path, &records).unwrap();
        let back = read_yaml(&path).unwrap();
        assert_eq!(back.len(), 8);
        for (a, b) in records.iter().zip(&back) {
            assert_eq!(a.location, b.location);
            assert!((a.latitude - b.latitude).abs() <= 5e-7);
            assert!((a.longitude - b.longitude).abs() <= 5e-7);
        }
    }

    #[test]
    fn json_has_same_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_json(&path, &sample_records()).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 8);
        assert_eq!(parsed[4]["Location"], "Mid_1");
        assert_eq!(parsed[0]["Latitude"], "-33.000000");
    }

    #[test]
    fn wrong_order_or_count_is_rejected() {
        let mut records = sample_records();
        records.swap(0, 1);
        assert!(matches!(
            check_records(&records),
            Err(OutputError::Malformed { .. })
        ));
        let short = &sample_records()[..7];
        assert!(matches!(
            to_yaml_string(short),
            Err(OutputError::Malformed { .. })
        ));
    }
}
