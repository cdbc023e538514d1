// src/error.rs
//! Error types for coordinate parsing and point construction

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("malformed coordinate {input:?}: expected {expected} numeric fields, found {found}")]
    MalformedCoordinate {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("non-numeric component {token:?} in coordinate {input:?}")]
    NonNumericComponent { input: String, token: String },

    #[error("invalid rational: {0}")]
    InvalidRational(String),

    #[error("missing EXIF field {0}")]
    MissingExifField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
