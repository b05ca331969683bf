//! Error types for cdss-chart
//!
//! Layout itself never fails: missing scales or unmappable categories
//! degrade to drawing less. Errors come from invalid series, configuration
//! and export.

use cdss_stats::StatsError;
use thiserror::Error;

/// Main error type for chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// A sample series could not be summarized
    #[error("Invalid series: {0}")]
    Stats(#[from] StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Export errors
    #[error("Export failed: {message}")]
    Export { message: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
