//! cdss-report - Model-result reports
//!
//! Decodes the modeling backend's result payload and turns it into the
//! report views: per-model confusion metrics and AUC, the cross-validation
//! AUC box plot as SVG, decision path trees and prediction percentages.
//!
//! The `cli` feature builds the `cdss-report` binary.

pub mod config;
pub mod error;
pub mod prediction;
pub mod report;
pub mod results;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use prediction::completion_percent;
pub use report::{format_summary_table, summarize, AucBoxPlot, ModelSummary};
pub use results::{FeatureImportance, ModelResults, NumberOrString};

pub use cdss_tree::{parse_tree, TreeNode};
