//! Diagnostic hook for box plot layout
//!
//! Layout never logs on its own. Degraded-mode decisions and skipped
//! categories are reported to a [`LayoutObserver`]; the default observer
//! forwards them to `tracing`.

use cdss_stats::BoxSummary;

use crate::geometry::BoxGlyph;

/// Why the band width had to be estimated
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FallbackReason {
    /// The categorical scale has no band width
    NoBandWidth,
    /// The categorical scale reported a zero, negative or non-finite width
    NonPositiveBandWidth(f64),
}

/// Why a category produced no glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkipReason {
    /// The categorical scale has no usable position for the category
    NoPosition,
    /// One of the five mapped x-coordinates is not finite
    NonFiniteCoordinate,
}

/// Receives diagnostics from a layout pass
///
/// All methods default to doing nothing.
pub trait LayoutObserver: Send + Sync {
    /// The numeric or categorical scale is missing; nothing will be drawn
    fn scales_missing(&self) {}

    /// The band width was estimated instead of read from the scale
    fn band_width_estimated(&self, _estimate: f64, _reason: FallbackReason) {}

    /// A category was left out of the output
    fn category_skipped(&self, _category: &str, _reason: SkipReason) {}

    /// A glyph was produced
    fn glyph_emitted(&self, _summary: &BoxSummary, _glyph: &BoxGlyph) {}
}

/// Observer that drops every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}

/// Observer that emits `tracing` events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl LayoutObserver for TracingObserver {
    fn scales_missing(&self) {
        tracing::warn!("Box plot scales missing, nothing to draw");
    }

    fn band_width_estimated(&self, estimate: f64, reason: FallbackReason) {
        tracing::warn!(?reason, estimate, "Band width unavailable, using estimate");
    }

    fn category_skipped(&self, category: &str, reason: SkipReason) {
        tracing::warn!(category, ?reason, "Skipping box plot category");
    }

    fn glyph_emitted(&self, summary: &BoxSummary, glyph: &BoxGlyph) {
        tracing::debug!(
            category = %glyph.category,
            min = summary.min,
            q1 = summary.q1,
            median = summary.median,
            q3 = summary.q3,
            max = summary.max,
            box_x = glyph.body.x,
            box_width = glyph.body.width,
            center_y = glyph.center_y(),
            "Laid out box plot"
        );
    }
}
