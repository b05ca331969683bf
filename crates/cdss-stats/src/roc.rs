//! ROC curves and area under the curve
//!
//! Points are kept in the order the backend reports them; the AUC is the
//! trapezoidal integral over consecutive points.

use serde::{Deserialize, Serialize};

/// A single point on a ROC curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// False positive rate
    pub fpr: f64,
    /// True positive rate
    pub tpr: f64,
}

/// Receiver operating characteristic curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
}

impl RocCurve {
    /// Build a curve from `[fpr, tpr]` pairs
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        Self {
            points: pairs
                .iter()
                .map(|&[fpr, tpr]| RocPoint { fpr, tpr })
                .collect(),
        }
    }

    /// Area under the curve by the trapezoidal rule
    ///
    /// Returns 0.0 for curves with fewer than two points.
    pub fn auc(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points
            .windows(2)
            .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0)
            .sum()
    }

    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
