//! Configuration for box plot layout
//!
//! Visual ratios and the parameters of the band width estimate used when
//! the categorical scale cannot report one.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Box plot layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of the band width taken by the box height
    pub box_ratio: f64,
    /// Minimum drawn box width in pixels, so zero-IQR boxes stay visible
    pub min_box_width: f64,
    /// Half the cap length as a share of the box height
    pub cap_ratio: f64,
    /// Surface height assumed when none is reported
    pub fallback_surface_height: f64,
    /// Lower bound of an estimated band width
    pub min_band_width: f64,
    /// Gap subtracted from each estimated lane
    pub band_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            box_ratio: 0.6,
            min_box_width: 2.0,
            cap_ratio: 0.25,
            fallback_surface_height: 400.0,
            min_band_width: 20.0,
            band_padding: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ChartError> {
        for (name, ratio) in [("box_ratio", self.box_ratio), ("cap_ratio", self.cap_ratio)] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, ratio
                )));
            }
        }

        for (name, value) in [
            ("min_box_width", self.min_box_width),
            ("fallback_surface_height", self.fallback_surface_height),
            ("min_band_width", self.min_band_width),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ChartError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(self.band_padding >= 0.0 && self.band_padding.is_finite()) {
            return Err(ChartError::InvalidConfig(format!(
                "band_padding must be non-negative, got {}",
                self.band_padding
            )));
        }

        Ok(())
    }
}
