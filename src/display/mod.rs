// src/display/mod.rs
//! Output of command results

pub mod terminal;

use crate::{
    config::DistanceUnit,
    error::Result,
    geo::{CompassDirection, GeoPoint},
};
use serde::Serialize;
use std::io::Write;

/// Result of one command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Coordinate {
        input: String,
        degrees: f64,
    },
    Point {
        point: GeoPoint,
        has_location: bool,
    },
    Distance {
        from: GeoPoint,
        to: GeoPoint,
        distance: f64,
        unit: DistanceUnit,
    },
    Bearing {
        from: GeoPoint,
        to: GeoPoint,
        bearing: f64,
        exact: f64,
        direction: CompassDirection,
    },
    Center {
        count: usize,
        located: usize,
        center: GeoPoint,
    },
}

/// Trait for the different ways a report can be written out
pub trait ReportDisplay {
    fn render(&self, out: &mut dyn Write, report: &Report) -> Result<()>;
}

/// Machine readable output
pub struct JsonDisplay;

impl ReportDisplay for JsonDisplay {
    fn render(&self, out: &mut dyn Write, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Format a degree value for display
pub fn format_coordinate(value: f64) -> String {
    format!("{:>12.6}°", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(51.20205), "   51.202050°");
        assert_eq!(format_coordinate(-25.591239), "  -25.591239°");
    }

    #[test]
    fn test_json_display() {
        let report = Report::Coordinate {
            input: "N51º 12.123".to_string(),
            degrees: 51.20205,
        };
        let mut out = Vec::new();
        JsonDisplay.render(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["kind"], "coordinate");
        assert_eq!(value["degrees"], 51.20205);
    }

    #[test]
    fn test_json_bearing_direction() {
        let report = Report::Bearing {
            from: GeoPoint::new(51.823358, 4.783979),
            to: GeoPoint::new(51.500920, -0.126765),
            bearing: 263.0,
            exact: 263.96,
            direction: CompassDirection::W,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["direction"], "W");
        assert_eq!(value["from"]["latitude"], 51.823358);
    }
}
