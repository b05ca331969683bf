//! Box plot statistics-to-pixel layout
//!
//! Categories run along the vertical (categorical) axis and values along
//! the horizontal (numeric) axis. Each category gets a lane of `band` pixels;
//! the box takes `box_ratio` of it, centered in the lane.
//!
//! Layout never fails. Missing scales yield no glyphs, an unusable band
//! width is estimated from the surface height, and a category whose
//! coordinates cannot be mapped is left out without affecting the others.

use std::sync::Arc;

use cdss_stats::BoxSummary;
use serde::{Deserialize, Serialize};

use crate::axis::{CategoricalScale, NumericScale};
use crate::config::LayoutConfig;
use crate::error::ChartError;
use crate::geometry::{BoxGlyph, Rect, Segment};
use crate::observe::{FallbackReason, LayoutObserver, SkipReason, TracingObserver};

/// A named sample series and its box summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub values: Vec<f64>,
    pub summary: BoxSummary,
}

impl Category {
    /// Summarize `values` under `name`
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Result<Self, ChartError> {
        let summary = BoxSummary::from_values(&values)?;
        Ok(Self {
            name: name.into(),
            values,
            summary,
        })
    }
}

/// The scale capabilities of the chart surface
///
/// Either scale may be unavailable; layout then has nothing to draw.
#[derive(Clone, Copy, Default)]
pub struct ChartScales<'a> {
    pub numeric: Option<&'a dyn NumericScale>,
    pub categorical: Option<&'a dyn CategoricalScale>,
}

impl<'a> ChartScales<'a> {
    pub fn new(numeric: &'a dyn NumericScale, categorical: &'a dyn CategoricalScale) -> Self {
        Self {
            numeric: Some(numeric),
            categorical: Some(categorical),
        }
    }
}

/// Lays out box plot glyphs from summaries and scales
#[derive(Clone)]
pub struct BoxPlotLayout {
    config: LayoutConfig,
    observer: Arc<dyn LayoutObserver>,
}

impl Default for BoxPlotLayout {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            observer: Arc::new(TracingObserver),
        }
    }
}

impl BoxPlotLayout {
    /// Create a layout with a validated configuration
    pub fn new(config: LayoutConfig) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Route diagnostics to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn LayoutObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Summarize each series and lay out the result
    ///
    /// Any empty or non-finite series fails the whole call.
    pub fn layout_series(
        &self,
        series: &[(String, Vec<f64>)],
        scales: ChartScales<'_>,
        surface_height: Option<f64>,
    ) -> Result<Vec<BoxGlyph>, ChartError> {
        let categories = series
            .iter()
            .map(|(name, values)| Category::new(name.clone(), values.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.layout(&categories, scales, surface_height))
    }

    /// Lay out one glyph per category, in category order
    ///
    /// `surface_height` is the drawing surface height in pixels, used only
    /// when the band width has to be estimated.
    pub fn layout(
        &self,
        categories: &[Category],
        scales: ChartScales<'_>,
        surface_height: Option<f64>,
    ) -> Vec<BoxGlyph> {
        if categories.is_empty() {
            return Vec::new();
        }
        let (numeric, categorical) = match (scales.numeric, scales.categorical) {
            (Some(numeric), Some(categorical)) => (numeric, categorical),
            _ => {
                self.observer.scales_missing();
                return Vec::new();
            }
        };

        let band = self.resolve_band_width(categorical, categories.len(), surface_height);

        categories
            .iter()
            .filter_map(|category| {
                let glyph = categorical
                    .position(&category.name)
                    .filter(|y| y.is_finite())
                    .ok_or(SkipReason::NoPosition)
                    .and_then(|y| self.glyph(&category.name, &category.summary, numeric, y, band));

                match glyph {
                    Ok(glyph) => {
                        self.observer.glyph_emitted(&category.summary, &glyph);
                        Some(glyph)
                    }
                    Err(reason) => {
                        self.observer.category_skipped(&category.name, reason);
                        None
                    }
                }
            })
            .collect()
    }

    /// Band width from the scale, or the estimate if it has none usable
    pub fn resolve_band_width(
        &self,
        categorical: &dyn CategoricalScale,
        category_count: usize,
        surface_height: Option<f64>,
    ) -> f64 {
        let reason = match categorical.band_width() {
            Some(width) if width > 0.0 && width.is_finite() => return width,
            Some(width) => FallbackReason::NonPositiveBandWidth(width),
            None => FallbackReason::NoBandWidth,
        };

        let estimate = self.estimate_band_width(category_count, surface_height);
        self.observer.band_width_estimated(estimate, reason);
        estimate
    }

    /// `max(min_band_width, floor(height / count) - band_padding)`
    ///
    /// A missing or non-positive height falls back to the configured default.
    pub fn estimate_band_width(&self, category_count: usize, surface_height: Option<f64>) -> f64 {
        let height = surface_height
            .filter(|h| *h > 0.0 && h.is_finite())
            .unwrap_or(self.config.fallback_surface_height);
        if category_count == 0 {
            return self.config.min_band_width;
        }

        let lane = (height / category_count as f64).floor() - self.config.band_padding;
        lane.max(self.config.min_band_width)
    }

    /// Geometry for one summary whose lane starts at `lane_y`
    fn glyph(
        &self,
        category: &str,
        summary: &BoxSummary,
        numeric: &dyn NumericScale,
        lane_y: f64,
        band: f64,
    ) -> Result<BoxGlyph, SkipReason> {
        let [x_min, x_q1, x_median, x_q3, x_max] = summary.values().map(|v| numeric.map(v));
        if ![x_min, x_q1, x_median, x_q3, x_max]
            .iter()
            .all(|x| x.is_finite())
        {
            return Err(SkipReason::NonFiniteCoordinate);
        }

        let box_height = band * self.config.box_ratio;
        let box_y = lane_y + (band - box_height) / 2.0;
        let center_y = lane_y + band / 2.0;
        let cap = box_height * self.config.cap_ratio;

        Ok(BoxGlyph {
            category: category.to_string(),
            whisker_low: Segment::horizontal(x_min, x_q1, center_y),
            whisker_high: Segment::horizontal(x_q3, x_max, center_y),
            cap_low: Segment::vertical(x_min, center_y - cap, center_y + cap),
            cap_high: Segment::vertical(x_max, center_y - cap, center_y + cap),
            body: Rect {
                x: x_q1,
                y: box_y,
                width: (x_q3 - x_q1).max(self.config.min_box_width),
                height: box_height,
            },
            median: Segment::vertical(x_median, box_y, box_y + box_height),
        })
    }
}
