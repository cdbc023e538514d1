// src/geo/mod.rs
//! Coordinate parsing and point geometry

pub mod compass;
pub mod coordinate;
pub mod exif;
pub mod point;

pub use compass::CompassDirection;
pub use coordinate::{parse_degrees_minutes, parse_degrees_minutes_seconds};
pub use exif::{ExifGps, Rational};
pub use point::GeoPoint;
