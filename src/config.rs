// src/config.rs
//! Configuration for the command line front end, stored as JSON

use crate::{
    error::{GeoError, Result},
    geo::{parse_degrees_minutes, parse_degrees_minutes_seconds, GeoPoint},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
}

impl DistanceUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Text notation expected for coordinate arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Plain signed decimal degrees
    Decimal,
    /// `DD MM.MMM`
    Dm,
    /// `DD MM SS.SS`
    Dms,
}

impl Notation {
    pub fn parse_coordinate(&self, text: &str) -> Result<f64> {
        match self {
            Notation::Decimal => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| GeoError::NonNumericComponent {
                        input: text.to_string(),
                        token: text.trim().to_string(),
                    })
            }
            Notation::Dm => parse_degrees_minutes(text),
            Notation::Dms => parse_degrees_minutes_seconds(text),
        }
    }

    pub fn parse_point(&self, latitude: &str, longitude: &str) -> Result<GeoPoint> {
        Ok(GeoPoint::new(
            self.parse_coordinate(latitude)?,
            self.parse_coordinate(longitude)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub distance_precision: u32,
    pub distance_unit: DistanceUnit,
    pub notation: Notation,
    pub color: bool,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl GeoConfig {
    pub fn platform_default() -> Self {
        Self {
            distance_precision: 0,
            distance_unit: DistanceUnit::Meters,
            notation: Notation::Decimal,
            color: true,
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Load from a config file; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::platform_default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), ?config, "loaded config");

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Get config file path
    #[cfg(not(windows))]
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| GeoError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("geospot").join("config.json"))
    }

    #[cfg(windows)]
    pub fn config_path() -> Result<PathBuf> {
        let app_data = std::env::var("APPDATA")
            .map_err(|_| GeoError::Config("APPDATA environment variable not set".to_string()))?;

        Ok(PathBuf::from(app_data).join("geospot").join("config.json"))
    }
}
