//! Error types for cdss-stats

use thiserror::Error;

/// Errors raised while computing report statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The sample series cannot be summarized
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The flattened confusion matrix has an unusable shape or contents
    #[error("Invalid confusion matrix: {reason}")]
    InvalidMatrix { reason: String },
}

impl StatsError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        StatsError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_matrix(reason: impl Into<String>) -> Self {
        StatsError::InvalidMatrix {
            reason: reason.into(),
        }
    }
}
