//! Report configuration
//!
//! One file configures both the box plot layout and the SVG surface:
//!
//! ```toml
//! [layout]
//! box_ratio = 0.5
//!
//! [svg]
//! width = 960.0
//! title = "Cross-validation AUC"
//! ```
//!
//! Every key is optional. Files ending in `.json` are read as JSON, anything
//! else as TOML.

use std::path::Path;

use cdss_chart::{LayoutConfig, SvgConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Report-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Box plot layout parameters
    pub layout: LayoutConfig,
    /// SVG document settings
    pub svg: SvgConfig,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, picking the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        tracing::debug!("Loaded report config from {:?}", path);
        Ok(config)
    }
}
