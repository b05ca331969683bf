//! Error types for report building

use cdss_chart::ChartError;
use cdss_stats::StatsError;
use thiserror::Error;

/// Errors raised while decoding model results or rendering reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Invalid value {value:?} in {field}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
