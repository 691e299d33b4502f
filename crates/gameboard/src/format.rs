//! Presentation: decimal degrees, degree–decimal-minutes, and plain tables.
//!
//! Degree parts truncate toward zero and carry the sign; minutes are always
//! non-negative, so `-33.456` renders as `-33° 27.360'` and
//! `-0.5` as `-0° 30.000'`.

use std::fmt;

use crate::output::OutputRecord;

/// Fractional digits of the decimal-degree rendering.
pub const DD_DECIMALS: usize = 6;
/// Fractional digits of the arc-minute rendering.
pub const DM_DECIMALS: usize = 3;

#[inline]
pub fn format_decimal_degrees(value: f64) -> String {
    format!("{:.*}", DD_DECIMALS, value)
}

/// Signed degrees plus unsigned decimal minutes, rounded to thousandths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecimalMinutes {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: f64,
}

impl DecimalMinutes {
    pub fn from_degrees(value: f64) -> Self {
        let magnitude = value.abs();
        let mut degrees = magnitude.trunc();
        let scale = 10f64.powi(DM_DECIMALS as i32);
        let mut minutes = ((magnitude - degrees) * 60.0 * scale).round() / scale;
        // 59.9996' rounds to 60.000'; carry into the degree part.
        if minutes >= 60.0 {
            degrees += 1.0;
            minutes -= 60.0;
        }
        let negative = value < 0.0 && (degrees > 0.0 || minutes > 0.0);
        Self {
            negative,
            degrees: degrees as u32,
            minutes,
        }
    }

    /// e.g. "-33"; keeps the sign when the integer part is zero ("-0").
    pub fn degree_part(&self) -> String {
        if self.negative {
            format!("-{}", self.degrees)
        } else {
            self.degrees.to_string()
        }
    }

    /// e.g. "27.360'".
    pub fn minute_part(&self) -> String {
        format!("{:.*}'", DM_DECIMALS, self.minutes)
    }

    /// Reconstruct the signed decimal-degree value.
    pub fn to_degrees(&self) -> f64 {
        let magnitude = self.degrees as f64 + self.minutes / 60.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for DecimalMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}", self.degree_part(), self.minute_part())
    }
}

fn render_table(headers: [&str; 3], rows: &[[String; 3]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let rule = {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };
    let render_row = |cells: [&str; 3]| {
        let mut line = String::from("|");
        for (cell, w) in cells.iter().zip(widths) {
            line.push_str(&format!(" {cell:^w$} |"));
        }
        line
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(rule.clone());
    out.push(render_row(headers));
    out.push(rule.clone());
    for row in rows {
        out.push(render_row([&row[0], &row[1], &row[2]]));
    }
    out.push(rule);
    out.join("\n")
}

/// `Location | Latitude | Longitude` with 6-digit decimal degrees.
pub fn render_decimal_degrees_table(records: &[OutputRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|r| {
            [
                r.location.to_string(),
                format_decimal_degrees(r.latitude),
                format_decimal_degrees(r.longitude),
            ]
        })
        .collect();
    render_table(["Location", "Latitude", "Longitude"], &rows)
}

/// `Location | Latitude (DM) | Longitude (DM)`.
pub fn render_decimal_minutes_table(records: &[OutputRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|r| {
            [
                r.location.to_string(),
                DecimalMinutes::from_degrees(r.latitude).to_string(),
                DecimalMinutes::from_degrees(r.longitude).to_string(),
            ]
        })
        .collect();
    render_table(["Location", "Latitude (DM)", "Longitude (DM)"], &rows)
}
