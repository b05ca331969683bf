//! cdss-chart - Box plot layout engine for model reports
//!
//! Turns sample series (for example one model's AUC across folds) into the
//! pixel-space primitives of a horizontal box-and-whisker chart.
//!
//! # Key Components
//!
//! - **Scales**: [`NumericScale`] and [`CategoricalScale`] capabilities, with
//!   continuous, band and point implementations
//! - **BoxPlotLayout**: maps [`BoxSummary`](cdss_stats::BoxSummary) values to
//!   [`BoxGlyph`]s, estimating the band width when the categorical scale has none
//! - **LayoutObserver**: diagnostic hook; the default routes to `tracing`
//! - **SvgExporter**: standalone SVG rendering of laid-out glyphs
//!
//! Layout is pure and re-entrant: a [`BoxPlotLayout`] can be shared across
//! threads and every call recomputes its output from the inputs.

pub mod axis;
pub mod boxplot;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod observe;

pub use axis::*;
pub use boxplot::*;
pub use config::*;
pub use error::*;
pub use export::{SvgConfig, SvgExporter, SvgMargins};
pub use geometry::*;
pub use observe::*;
