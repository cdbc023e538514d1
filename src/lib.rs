// src/lib.rs
//! Geospot Library
//!
//! Geographic points in decimal degrees: parsing of degrees-minutes and
//! degrees-minutes-seconds text, EXIF GPS rationals, and the distance,
//! bearing and compass direction between two points on a spherical Earth.

pub mod config;
pub mod display;
pub mod error;
pub mod geo;

// Re-export main types for convenience
pub use error::{GeoError, Result};
pub use geo::{
    parse_degrees_minutes, parse_degrees_minutes_seconds, CompassDirection, ExifGps, GeoPoint,
    Rational,
};
