//! Five-number summaries for box plots
//!
//! Provides the min / Q1 / median / Q3 / max summary of a sample series
//! using nearest-rank quantiles.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Five-number summary of a numeric sample series
///
/// Invariant: `min <= q1 <= median <= q3 <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    /// Compute the summary of a sample series
    ///
    /// The series is sorted internally; input order does not matter.
    /// Fails with [`StatsError::InvalidInput`] for an empty series or one
    /// containing a non-finite value.
    pub fn from_values(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::invalid_input("sample series is empty"));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::invalid_input(format!(
                "non-finite value at index {}",
                index
            )));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self::from_sorted(&sorted))
    }

    /// Summary of an already sorted, non-empty, finite series
    fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            min: sorted[0],
            q1: nearest_rank(sorted, 0.25),
            median: nearest_rank(sorted, 0.5),
            q3: nearest_rank(sorted, 0.75),
            max: sorted[sorted.len() - 1],
        }
    }

    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Get the range
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// The five values in drawing order
    pub fn values(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Nearest-rank quantile: the element at index `floor(n * p)`
fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}
