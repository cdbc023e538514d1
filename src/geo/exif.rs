// src/geo/exif.rs
//! EXIF GPS block as image tools hand it over
//!
//! Latitude and longitude are each three unsigned rationals (degrees,
//! minutes, seconds) next to a single-letter hemisphere reference. The key
//! names follow the EXIF tag names so a JSON dump of the GPS IFD
//! deserialises directly.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An EXIF `RATIONAL`: numerator over denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRational", into = "String")]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Evaluate the fraction. A zero denominator is rejected.
    pub fn value(&self) -> Result<f64> {
        if self.denominator == 0 {
            return Err(GeoError::InvalidRational(format!(
                "{} has a zero denominator",
                self
            )));
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = GeoError;

    /// Accepts `"3937/100"`; a bare integer is read as `n/1`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_part = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| GeoError::InvalidRational(format!("{:?}: {}", s, e)))
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Ok(Self::new(parse_part(numerator)?, parse_part(denominator)?))
            }
            None => Ok(Self::new(parse_part(s)?, 1)),
        }
    }
}

impl From<Rational> for String {
    fn from(rational: Rational) -> Self {
        rational.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRational {
    Text(String),
    Whole(u32),
    Pair(u32, u32),
}

impl TryFrom<RawRational> for Rational {
    type Error = GeoError;

    fn try_from(raw: RawRational) -> Result<Self> {
        match raw {
            RawRational::Text(text) => text.parse(),
            RawRational::Whole(numerator) => Ok(Rational::new(numerator, 1)),
            RawRational::Pair(numerator, denominator) => Ok(Rational::new(numerator, denominator)),
        }
    }
}

/// Degrees, minutes and seconds of one axis.
pub type DmsRationals = [Rational; 3];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExifGps {
    #[serde(rename = "GPSLatitudeRef", default, skip_serializing_if = "Option::is_none")]
    pub latitude_ref: Option<String>,
    #[serde(rename = "GPSLatitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<DmsRationals>,
    #[serde(rename = "GPSLongitudeRef", default, skip_serializing_if = "Option::is_none")]
    pub longitude_ref: Option<String>,
    #[serde(rename = "GPSLongitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<DmsRationals>,
}

impl ExifGps {
    pub fn new(
        latitude_ref: &str,
        latitude: DmsRationals,
        longitude_ref: &str,
        longitude: DmsRationals,
    ) -> Self {
        Self {
            latitude_ref: Some(latitude_ref.to_string()),
            latitude: Some(latitude),
            longitude_ref: Some(longitude_ref.to_string()),
            longitude: Some(longitude),
        }
    }

    /// Render both axes as `"{ref}{deg}° {min} {sec}"` DMS text, or `None`
    /// when no latitude reference is present.
    pub fn to_dms_text(&self) -> Result<Option<(String, String)>> {
        let latitude_ref = match self.latitude_ref {
            Some(ref r) => r,
            None => return Ok(None),
        };

        let latitude = self
            .latitude
            .as_ref()
            .ok_or(GeoError::MissingExifField("GPSLatitude"))?;
        let longitude_ref = self
            .longitude_ref
            .as_ref()
            .ok_or(GeoError::MissingExifField("GPSLongitudeRef"))?;
        let longitude = self
            .longitude
            .as_ref()
            .ok_or(GeoError::MissingExifField("GPSLongitude"))?;

        Ok(Some((
            Self::axis_text(latitude_ref, latitude)?,
            Self::axis_text(longitude_ref, longitude)?,
        )))
    }

    fn axis_text(reference: &str, components: &DmsRationals) -> Result<String> {
        let [degrees, minutes, seconds] = components;
        Ok(format!(
            "{}{}° {} {}",
            reference,
            degrees.value()?,
            minutes.value()?,
            seconds.value()?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample() -> ExifGps {
        ExifGps::new(
            "N",
            [Rational::new(51, 1), Rational::new(7, 1), Rational::new(3937, 100)],
            "E",
            [Rational::new(5, 1), Rational::new(53, 1), Rational::new(2641, 100)],
        )
    }

    #[rstest]
    #[case("3937/100", Rational::new(3937, 100))]
    #[case(" 51 / 1 ", Rational::new(51, 1))]
    #[case("7", Rational::new(7, 1))]
    fn test_rational_from_str(#[case] input: &str, #[case] expected: Rational) {
        assert_eq!(input.parse::<Rational>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a/b")]
    #[case("1/2/3")]
    #[case("-1/2")]
    fn test_rational_from_str_invalid(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Rational>(),
            Err(GeoError::InvalidRational(_))
        ));
    }

    #[test]
    fn test_rational_value() {
        assert_eq!(Rational::new(3937, 100).value().unwrap(), 39.37);
        assert!(matches!(
            Rational::new(1, 0).value(),
            Err(GeoError::InvalidRational(_))
        ));
    }

    #[test]
    fn test_dms_text() {
        let (lat, lon) = sample().to_dms_text().unwrap().unwrap();
        assert_eq!(lat, "N51° 7 39.37");
        assert_eq!(lon, "E5° 53 26.41");
    }

    #[test]
    fn test_no_reference_means_no_position() {
        let exif = ExifGps::default();
        assert_eq!(exif.to_dms_text().unwrap(), None);
    }

    #[test]
    fn test_missing_longitude() {
        let mut exif = sample();
        exif.longitude = None;
        assert!(matches!(
            exif.to_dms_text(),
            Err(GeoError::MissingExifField("GPSLongitude"))
        ));
    }

    #[test]
    fn test_deserialize_string_rationals() {
        let json = r#"{
            "GPSLatitudeRef": "N",
            "GPSLatitude": ["51/1", "7/1", "3937/100"],
            "GPSLongitudeRef": "E",
            "GPSLongitude": ["5/1", "53/1", "2641/100"]
        }"#;
        let exif: ExifGps = serde_json::from_str(json).unwrap();
        assert_eq!(exif, sample());
    }

    #[test]
    fn test_deserialize_pair_rationals() {
        let json = r#"{
            "GPSLatitudeRef": "N",
            "GPSLatitude": [[51, 1], [7, 1], [3937, 100]],
            "GPSLongitudeRef": "E",
            "GPSLongitude": [[5, 1], [53, 1], [2641, 100]]
        }"#;
        let exif: ExifGps = serde_json::from_str(json).unwrap();
        assert_eq!(exif, sample());
    }

    #[test]
    fn test_deserialize_whole_numbers() {
        let json = r#"{
            "GPSLatitudeRef": "S",
            "GPSLatitude": [33, 52, 0],
            "GPSLongitudeRef": "W",
            "GPSLongitude": [70, "30/1", [0, 1]]
        }"#;
        let exif: ExifGps = serde_json::from_str(json).unwrap();
        assert_eq!(exif.latitude, Some([Rational::new(33, 1), Rational::new(52, 1), Rational::new(0, 1)]));
        assert_eq!(exif.longitude, Some([Rational::new(70, 1), Rational::new(30, 1), Rational::new(0, 1)]));
    }

    #[test]
    fn test_deserialize_without_gps() {
        let exif: ExifGps = serde_json::from_str(r#"{"Make": "Canon"}"#).unwrap();
        assert_eq!(exif.latitude_ref, None);
        assert_eq!(exif.to_dms_text().unwrap(), None);
    }

    #[test]
    fn test_serialize_as_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["GPSLatitude"][2], "3937/100");
        assert_eq!(json["GPSLongitudeRef"], "E");
    }
}
