//! CSV export through a polars DataFrame.

use anyhow::{Context, Result};
use gameboard::format::format_decimal_degrees;
use gameboard::output::check_records;
use gameboard::OutputRecord;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Columns `Location, Latitude, Longitude`; coordinates as 6-digit strings.
pub fn records_frame(records: &[OutputRecord]) -> Result<DataFrame> {
    check_records(records)?;
    let locations: Vec<&str> = records.iter().map(|r| r.location.as_str()).collect();
    let latitudes: Vec<String> = records
        .iter()
        .map(|r| format_decimal_degrees(r.latitude))
        .collect();
    let longitudes: Vec<String> = records
        .iter()
        .map(|r| format_decimal_degrees(r.longitude))
        .collect();
    let df = df!(
        "Location" => locations,
        "Latitude" => latitudes,
        "Longitude" => longitudes,
    )?;
    Ok(df)
}

pub fn write_csv(out: &Path, records: &[OutputRecord]) -> Result<()> {
    let mut df = records_frame(records)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameboard::{GeoPoint, Location};
    use tempfile::tempdir;

    fn records() -> Vec<OutputRecord> {
        Location::ORDER
            .iter()
            .map(|&loc| OutputRecord::new(loc, GeoPoint::new(-33.456, 151.0)))
            .collect()
    }

    #[test]
    fn csv_has_header_and_eight_rows() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.csv");
        write_csv(&out, &records()).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Location,Latitude,Longitude");
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[5], "Mid_1,-33.456000,151.000000");
    }

    #[test]
    fn csv_reads_back_with_lazy_reader() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.csv");
        write_csv(&out, &records()).unwrap();
        let df = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.shape(), (8, 3));
    }

    #[test]
    fn frame_rejects_partial_output() {
        assert!(records_frame(&records()[..4]).is_err());
    }
}
