// src/geo/point.rs
//! Geographic point and the geometry between two points

use super::{
    compass::CompassDirection,
    coordinate::{parse_degrees_minutes, parse_degrees_minutes_seconds, round_to},
    exif::ExifGps,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;
use tracing::debug;

/// Mean radius of the Earth in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_372_797.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Points are immutable values. The origin (0.0, 0.0) doubles as the
/// "no location" marker, so a point that really sits there reports
/// [`GeoPoint::has_location`] as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The null location.
    pub fn null() -> Self {
        Self::default()
    }

    /// Build a point where either coordinate may be missing; a missing
    /// coordinate becomes 0.0.
    pub fn of(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self::new(latitude.unwrap_or(0.0), longitude.unwrap_or(0.0))
    }

    /// Build a point from two `DD MM.MMM` strings.
    pub fn from_degrees_minutes(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self::new(
            parse_degrees_minutes(latitude)?,
            parse_degrees_minutes(longitude)?,
        ))
    }

    /// Build a point from two `DD MM SS.SS` strings.
    pub fn from_degrees_minutes_seconds(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self::new(
            parse_degrees_minutes_seconds(latitude)?,
            parse_degrees_minutes_seconds(longitude)?,
        ))
    }

    /// Average of every located point. Points without a location are left
    /// out of the mean; if none remain the null location is returned.
    pub fn center<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let (count, latitude, longitude) = points
            .into_iter()
            .filter(|point| point.has_location())
            .fold((0usize, 0.0, 0.0), |(count, lat, lon), point| {
                (count + 1, lat + point.latitude, lon + point.longitude)
            });

        if count == 0 {
            return Self::null();
        }

        Self::new(latitude / count as f64, longitude / count as f64)
    }

    /// Build a point from an EXIF GPS block.
    ///
    /// The rationals are written out as DMS text and parsed again, so the
    /// result rounds and signs exactly like [`GeoPoint::from_degrees_minutes_seconds`].
    /// A block without a latitude reference yields the null location.
    pub fn from_exif(exif: &ExifGps) -> Result<Self> {
        match exif.to_dms_text()? {
            Some((latitude, longitude)) => {
                debug!(%latitude, %longitude, "reading position from EXIF");
                Self::from_degrees_minutes_seconds(&latitude, &longitude)
            }
            None => {
                debug!("EXIF block has no GPS reference");
                Ok(Self::null())
            }
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn has_location(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// Great-circle distance using the haversine formula, rounded to
    /// `precision` decimals.
    pub fn distance_in_meters(&self, other: &GeoPoint, precision: u32) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = other.longitude.to_radians() - self.longitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        round_to(EARTH_RADIUS_METERS * c, precision)
    }

    /// Distance in kilometers. The meters are rounded to whole meters before
    /// dividing, then the kilometers are rounded to `precision` decimals.
    pub fn distance_in_kilometers(&self, other: &GeoPoint, precision: u32) -> f64 {
        let meters = self.distance_in_meters(other, 0);
        round_to(meters / 1000.0, precision)
    }

    /// Rhumb-line bearing towards `other` in degrees, within [0, 360).
    pub fn initial_bearing_to(&self, other: &GeoPoint) -> f64 {
        let mut d_lon = other.longitude.to_radians() - self.longitude.to_radians();
        let mut d_phi = ((other.latitude.to_radians() / 2.0 + FRAC_PI_4).tan()
            / (self.latitude.to_radians() / 2.0 + FRAC_PI_4).tan())
        .ln();

        // Both ends on the South Pole give 0/0; there is no latitude change.
        if d_phi.is_nan() {
            d_phi = 0.0;
        }

        // Take the short way round the antimeridian.
        if d_lon.abs() > PI {
            d_lon = if d_lon > 0.0 {
                -(2.0 * PI - d_lon)
            } else {
                2.0 * PI + d_lon
            };
        }

        (d_lon.atan2(d_phi).to_degrees() + 360.0).rem_euclid(360.0)
    }

    /// Bearing towards `other` in whole degrees.
    ///
    /// The fraction is truncated before `precision` is applied, so a
    /// bearing of 263.96° comes back as 263 for every precision. Use
    /// [`GeoPoint::initial_bearing_to`] for the unrounded value.
    pub fn bearing_to(&self, other: &GeoPoint, precision: u32) -> f64 {
        round_to(self.initial_bearing_to(other).trunc(), precision)
    }

    pub fn compass_direction_to(&self, other: &GeoPoint) -> CompassDirection {
        CompassDirection::from_bearing(self.bearing_to(other, 0))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
