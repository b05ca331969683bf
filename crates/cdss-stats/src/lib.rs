//! cdss-stats - Statistical functions for clinical model reports
//!
//! This crate provides the small statistical primitives behind the model
//! report views:
//!
//! - **BoxSummary**: nearest-rank five-number summary of a sample series
//! - **ConfusionMatrix**: accuracy, precision and recall percentages
//! - **RocCurve**: ROC points and trapezoidal AUC
//!
//! # Quantile Method
//!
//! Box summaries use the nearest-rank method: the quantile is the sorted
//! element at the truncated index `floor(n * p)`. No interpolation happens
//! between adjacent ranks, so every reported value is an actual observation.

pub mod confusion;
pub mod error;
pub mod roc;
pub mod summary;

pub use confusion::*;
pub use error::*;
pub use roc::*;
pub use summary::*;
