// src/geo/coordinate.rs
//! Degrees-minutes and degrees-minutes-seconds text parsing
//!
//! Both parsers run the same normalisation: the input is lowercased, the
//! hemisphere is taken from the lowercased text, minute/second marks become
//! spaces, decimal commas become periods and everything that is not a digit,
//! space or period is dropped. What is left is split on whitespace into the
//! numeric fields.

use crate::error::{GeoError, Result};
use tracing::trace;

/// Decimal places kept on every parsed coordinate.
pub const COORDINATE_PRECISION: u32 = 6;

/// Numeric fields of a coordinate after normalisation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CoordinateParts {
    degrees: f64,
    minutes: f64,
    seconds: Option<f64>,
    negative: bool,
}

impl CoordinateParts {
    fn to_decimal(self) -> f64 {
        let mut value = self.degrees + self.minutes / 60.0 + self.seconds.unwrap_or(0.0) / 3600.0;
        if self.negative {
            value = -value;
        }
        round_to(value, COORDINATE_PRECISION)
    }
}

/// Parse a `DD MM.MMM` string (e.g. `N51º 12.123`) into decimal degrees.
///
/// Any `s` or `w` in the text makes the result negative.
pub fn parse_degrees_minutes(text: &str) -> Result<f64> {
    let parts = decompose(text, 2)?;
    let value = parts.to_decimal();
    trace!(input = text, value, "parsed degrees-minutes coordinate");
    Ok(value)
}

/// Parse a `DD MM SS.SS` string (e.g. `W25° 35'28.46"`) into decimal degrees.
pub fn parse_degrees_minutes_seconds(text: &str) -> Result<f64> {
    let parts = decompose(text, 3)?;
    let value = parts.to_decimal();
    trace!(input = text, value, "parsed degrees-minutes-seconds coordinate");
    Ok(value)
}

/// Round `value` half away from zero to `precision` decimal places.
///
/// When the scaled value no longer fits in an `f64` it already carries
/// fewer digits than requested and is returned as is.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(f64::MAX_10_EXP as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn decompose(text: &str, fields: usize) -> Result<CoordinateParts> {
    let lowered = text.to_lowercase();

    // Must be read before filtering, the letters do not survive it.
    let negative = lowered.contains('s') || lowered.contains('w');

    let filtered: String = lowered
        .chars()
        .map(|c| match c {
            '\'' | '"' => ' ',
            ',' => '.',
            other => other,
        })
        .filter(|c| c.is_ascii_digit() || *c == ' ' || *c == '.')
        .collect();

    let tokens: Vec<&str> = filtered.split_whitespace().collect();
    if tokens.len() < fields {
        return Err(GeoError::MalformedCoordinate {
            input: text.to_string(),
            expected: fields,
            found: tokens.len(),
        });
    }

    let values = tokens[..fields]
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| GeoError::NonNumericComponent {
                input: text.to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(CoordinateParts {
        degrees: values[0],
        minutes: values[1],
        seconds: values.get(2).copied(),
        negative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("N51º 12.123", 51.20205)]
    #[case("N37° 46.2396", 37.77066)]
    #[case("E004º 14.432", 4.240533)]
    #[case("S33° 52.140", -33.869)]
    #[case("n51º 12,123", 51.20205)]
    fn test_degrees_minutes(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_degrees_minutes(input).unwrap(), expected);
    }

    #[rstest]
    #[case("E4° 14 25.92", 4.240533)]
    #[case("W25° 35 28.46", -25.591239)]
    #[case("N51° 12 7.38", 51.20205)]
    #[case("S0° 30 0", -0.5)]
    fn test_degrees_minutes_seconds(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_degrees_minutes_seconds(input).unwrap(), expected);
    }

    #[test]
    fn test_quote_marks_act_as_separators() {
        let quoted = parse_degrees_minutes_seconds("W25° 35'28.46\"").unwrap();
        let spaced = parse_degrees_minutes_seconds("W25° 35 28.46").unwrap();
        assert_eq!(quoted, spaced);
    }

    #[test]
    fn test_hemisphere_letter_anywhere() {
        // The marker is a plain substring check, so trailing letters count too.
        assert_eq!(parse_degrees_minutes("51° 12.123 S").unwrap(), -51.20205);
        assert_eq!(parse_degrees_minutes("4° 14.432w").unwrap(), -4.240533);
        assert_eq!(parse_degrees_minutes("4° 14.432 E").unwrap(), 4.240533);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        assert_eq!(parse_degrees_minutes("N51 12.123 59").unwrap(), 51.20205);
    }

    #[test]
    fn test_too_few_fields() {
        match parse_degrees_minutes("N51º") {
            Err(GeoError::MalformedCoordinate { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            parse_degrees_minutes_seconds("N51º 12.123"),
            Err(GeoError::MalformedCoordinate { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            parse_degrees_minutes(""),
            Err(GeoError::MalformedCoordinate { found: 0, .. })
        ));
    }

    #[test]
    fn test_non_numeric_field() {
        match parse_degrees_minutes("N51 12.1.23") {
            Err(GeoError::NonNumericComponent { token, .. }) => assert_eq!(token, "12.1.23"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    #[case(603.4999, 0, 603.0)]
    #[case(0.603, 1, 0.6)]
    #[case(2.5, 0, 3.0)]
    #[case(-2.5, 0, -3.0)]
    #[case(51.2020499, 6, 51.20205)]
    #[case(603.2577734711232, 306, 603.2577734711232)]
    #[case(603.2577734711232, 400, 603.2577734711232)]
    #[case(0.603, u32::MAX, 0.603)]
    fn test_round_to(#[case] value: f64, #[case] precision: u32, #[case] expected: f64) {
        assert_eq!(round_to(value, precision), expected);
    }
}
