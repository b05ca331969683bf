//! Confusion matrix and percentage metrics.
//!
//! The backend ships matrices flattened row-major, rows being the actual
//! class and columns the predicted class. A binary matrix therefore reads
//! `[TP, FN, FP, TN]` with class 0 as the positive class.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// A k x k confusion matrix of sample counts.
///
/// Serializes as the flattened cells; deserializing goes through
/// [`ConfusionMatrix::from_flat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ConfusionMatrix {
    cells: Vec<f64>,
    n_classes: usize,
}

/// The four cells of a binary confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryCells {
    pub tp: f64,
    pub fn_: f64,
    pub fp: f64,
    pub tn: f64,
}

impl ConfusionMatrix {
    /// Build a matrix from its row-major flattened cells.
    ///
    /// The length must be a perfect square of at least 4, and every count
    /// must be finite and non-negative.
    pub fn from_flat(cells: &[f64]) -> Result<Self, StatsError> {
        let n_classes = (cells.len() as f64).sqrt().round() as usize;
        if n_classes < 2 || n_classes * n_classes != cells.len() {
            return Err(StatsError::invalid_matrix(format!(
                "{} cells do not form a square matrix of at least 2 classes",
                cells.len()
            )));
        }
        if let Some(index) = cells.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(StatsError::invalid_matrix(format!(
                "cell {} is not a valid count",
                index
            )));
        }

        Ok(Self {
            cells: cells.to_vec(),
            n_classes,
        })
    }

    /// An all-zero binary matrix.
    pub fn empty_binary() -> Self {
        Self {
            cells: vec![0.0; 4],
            n_classes: 2,
        }
    }

    /// Number of classes (k).
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count of samples with actual class `actual` predicted as `predicted`.
    pub fn get(&self, actual: usize, predicted: usize) -> f64 {
        self.cells[actual * self.n_classes + predicted]
    }

    /// Total number of samples.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    fn row_sum(&self, class: usize) -> f64 {
        (0..self.n_classes).map(|p| self.get(class, p)).sum()
    }

    fn column_sum(&self, class: usize) -> f64 {
        (0..self.n_classes).map(|a| self.get(a, class)).sum()
    }

    /// Share of correct predictions, in percent. 0 for an empty matrix.
    pub fn accuracy_percent(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        let correct: f64 = (0..self.n_classes).map(|c| self.get(c, c)).sum();
        correct / total * 100.0
    }

    /// Precision of `class` in percent. 0 when nothing was predicted as it.
    pub fn precision_percent(&self, class: usize) -> f64 {
        ratio_percent(self.get(class, class), self.column_sum(class))
    }

    /// Recall of `class` in percent. 0 when the class has no samples.
    pub fn recall_percent(&self, class: usize) -> f64 {
        ratio_percent(self.get(class, class), self.row_sum(class))
    }

    /// The binary cells, if this is a 2 x 2 matrix.
    pub fn binary_cells(&self) -> Option<BinaryCells> {
        if self.n_classes != 2 {
            return None;
        }
        Some(BinaryCells {
            tp: self.cells[0],
            fn_: self.cells[1],
            fp: self.cells[2],
            tn: self.cells[3],
        })
    }

    /// Display labels for the classes.
    ///
    /// Uses the first k of `provided` when enough are given, otherwise
    /// `Class 1`..`Class k`.
    pub fn class_labels(&self, provided: &[String]) -> Vec<String> {
        if provided.len() >= self.n_classes {
            provided[..self.n_classes].to_vec()
        } else {
            (1..=self.n_classes).map(|i| format!("Class {}", i)).collect()
        }
    }

    /// Rows of the matrix, actual class first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.n_classes)
    }
}

impl TryFrom<Vec<f64>> for ConfusionMatrix {
    type Error = StatsError;

    fn try_from(cells: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_flat(&cells)
    }
}

impl From<ConfusionMatrix> for Vec<f64> {
    fn from(matrix: ConfusionMatrix) -> Self {
        matrix.cells
    }
}

fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Render a percentage with one decimal place, e.g. `"83.3"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}", "")?;
        for p in 0..self.n_classes {
            write!(f, " pred_{:<3}", p + 1)?;
        }
        writeln!(f)?;

        for (a, row) in self.rows().enumerate() {
            write!(f, "true_{:<3}", a + 1)?;
            for count in row {
                write!(f, " {:>8}", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_metrics() {
        // TP=40, FN=10, FP=5, TN=45
        let cm = ConfusionMatrix::from_flat(&[40.0, 10.0, 5.0, 45.0]).unwrap();

        assert_eq!(format_percent(cm.accuracy_percent()), "85.0");
        assert_eq!(format_percent(cm.precision_percent(0)), "88.9");
        assert_eq!(format_percent(cm.recall_percent(0)), "80.0");

        let cells = cm.binary_cells().unwrap();
        assert_eq!(cells.tp, 40.0);
        assert_eq!(cells.fn_, 10.0);
        assert_eq!(cells.fp, 5.0);
        assert_eq!(cells.tn, 45.0);
    }

    #[test]
    fn test_three_class_metrics() {
        let cm = ConfusionMatrix::from_flat(&[
            5.0, 1.0, 0.0, //
            2.0, 3.0, 1.0, //
            0.0, 0.0, 4.0,
        ])
        .unwrap();

        assert_eq!(cm.n_classes(), 3);
        assert!(cm.binary_cells().is_none());
        // trace 12 of 16
        assert_eq!(cm.accuracy_percent(), 75.0);
        // class 2: 3 / (1 + 3 + 0)
        assert_eq!(cm.precision_percent(1), 75.0);
        // class 2: 3 / (2 + 3 + 1)
        assert_eq!(cm.recall_percent(1), 50.0);
    }

    #[test]
    fn test_zero_denominators() {
        let cm = ConfusionMatrix::empty_binary();
        assert_eq!(cm.accuracy_percent(), 0.0);
        assert_eq!(cm.precision_percent(0), 0.0);
        assert_eq!(cm.recall_percent(1), 0.0);
        assert_eq!(format_percent(cm.accuracy_percent()), "0.0");
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(ConfusionMatrix::from_flat(&[1.0, 2.0, 3.0]).is_err());
        assert!(ConfusionMatrix::from_flat(&[1.0]).is_err());
        assert!(ConfusionMatrix::from_flat(&[]).is_err());
        assert!(ConfusionMatrix::from_flat(&[1.0, -1.0, 0.0, 2.0]).is_err());
    }

    #[test]
    fn test_class_labels() {
        let cm = ConfusionMatrix::from_flat(&[0.0; 9]).unwrap();
        assert_eq!(cm.class_labels(&[]), vec!["Class 1", "Class 2", "Class 3"]);

        let provided: Vec<String> = ["Stable", "Response", "Progression", "Extra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            cm.class_labels(&provided),
            vec!["Stable", "Response", "Progression"]
        );
    }

    #[test]
    fn test_display() {
        let cm = ConfusionMatrix::from_flat(&[1.0, 0.0, 0.0, 1.0]).unwrap();
        let output = cm.to_string();
        assert!(output.contains("pred_1"));
        assert!(output.contains("true_2"));
    }

    #[test]
    fn test_serde_uses_flat_cells() {
        let cm = ConfusionMatrix::from_flat(&[40.0, 10.0, 5.0, 45.0]).unwrap();
        let json = serde_json::to_string(&cm).unwrap();
        assert_eq!(json, "[40.0,10.0,5.0,45.0]");

        let parsed: ConfusionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cm);
    }

    #[test]
    fn test_deserialize_validates_shape() {
        assert!(serde_json::from_str::<ConfusionMatrix>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ConfusionMatrix>("[]").is_err());
        assert!(serde_json::from_str::<ConfusionMatrix>("[1, -2, 3, 4]").is_err());
        let old_shape = r#"{ "cells": [], "n_classes": 0 }"#;
        assert!(serde_json::from_str::<ConfusionMatrix>(old_shape).is_err());
    }
}
