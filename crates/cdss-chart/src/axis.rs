//! Axis scales for box plot charts
//!
//! A chart pairs a numeric axis (data value to pixel) with a categorical
//! axis (category name to pixel, optionally with a band width). The layout
//! engine only sees these as capabilities through [`NumericScale`] and
//! [`CategoricalScale`]; concrete scales live here too, along with tick
//! calculation for the numeric axis.

use serde::{Deserialize, Serialize};

/// Maps a data value to a pixel coordinate
///
/// Values the scale cannot represent (outside a log domain, for instance)
/// map to a non-finite coordinate.
pub trait NumericScale {
    fn map(&self, value: f64) -> f64;
}

impl<F> NumericScale for F
where
    F: Fn(f64) -> f64,
{
    fn map(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Maps a category to the pixel coordinate where its lane starts
pub trait CategoricalScale {
    /// Lane start for `category`, or `None` if the category is not in the domain
    fn position(&self, category: &str) -> Option<f64>;

    /// Pixel span of one lane, if the scale has bands
    fn band_width(&self) -> Option<f64> {
        None
    }
}

/// Scale type for a continuous axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleType {
    Linear,
    Log10,
}

/// Continuous numeric scale from a data domain to a pixel range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    /// Scale type
    pub scale: ScaleType,

    /// Data range (min, max)
    pub domain: (f64, f64),

    /// Pixel range the domain maps onto
    pub range: (f64, f64),

    /// Number format string for tick labels (e.g., ".2f", ".1e")
    pub format: Option<String>,
}

impl ContinuousScale {
    /// Create a linear scale
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            scale: ScaleType::Linear,
            domain,
            range,
            format: None,
        }
    }

    /// Set logarithmic scale
    pub fn with_log_scale(mut self) -> Self {
        self.scale = ScaleType::Log10;
        self
    }

    /// Set number format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Position of `value` within the domain, 0.0 at min and 1.0 at max
    ///
    /// NaN for values a log scale cannot take. A zero-width domain puts
    /// every value in the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let (lo, hi) = self.domain;
        match self.scale {
            ScaleType::Linear => {
                if hi == lo {
                    0.5
                } else {
                    (value - lo) / (hi - lo)
                }
            }
            ScaleType::Log10 => {
                if value <= 0.0 || lo <= 0.0 || hi <= 0.0 {
                    return f64::NAN;
                }
                let (log_lo, log_hi) = (lo.log10(), hi.log10());
                if log_hi == log_lo {
                    0.5
                } else {
                    (value.log10() - log_lo) / (log_hi - log_lo)
                }
            }
        }
    }

    /// Calculate major tick marks for this scale
    pub fn ticks(&self) -> Vec<TickMark> {
        match self.scale {
            ScaleType::Linear => self.linear_ticks(),
            ScaleType::Log10 => self.log_ticks(),
        }
    }

    fn linear_ticks(&self) -> Vec<TickMark> {
        let (min, max) = self.domain;
        let range = max - min;
        if !(range > 0.0) {
            return vec![];
        }

        // Nice tick spacing
        let rough_step = range / 5.0;
        let magnitude = 10.0_f64.powf(rough_step.abs().log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.5 {
            1.0 * magnitude
        } else if residual <= 3.0 {
            2.0 * magnitude
        } else if residual <= 7.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let start = (min / nice_step).ceil() * nice_step;
        let mut ticks = Vec::new();

        let mut step_index = 0.0;
        loop {
            // Multiply instead of accumulating so 0.1 steps stay exact enough to label
            let value = start + nice_step * step_index;
            if value > max + nice_step * 0.001 {
                break;
            }
            let normalized = (value - min) / range;
            if (-0.001..=1.001).contains(&normalized) {
                ticks.push(TickMark {
                    value,
                    normalized: normalized.clamp(0.0, 1.0),
                    label: format_number(value, self.format.as_deref()),
                });
            }
            step_index += 1.0;
        }

        ticks
    }

    fn log_ticks(&self) -> Vec<TickMark> {
        let (min, max) = self.domain;
        if min <= 0.0 || max <= 0.0 || max <= min {
            return vec![];
        }

        let start_decade = min.log10().floor() as i32;
        let end_decade = max.log10().ceil() as i32;

        (start_decade..=end_decade)
            .map(|decade| (decade, 10.0_f64.powi(decade)))
            .filter(|(_, value)| *value >= min && *value <= max)
            .map(|(decade, value)| TickMark {
                value,
                normalized: self.normalize(value),
                label: format!("10{}", superscript(decade)),
            })
            .collect()
    }
}

impl NumericScale for ContinuousScale {
    fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + self.normalize(value) * (r1 - r0)
    }
}

/// Categorical scale that splits its range into equal, padded bands
///
/// Follows the usual band-scale arithmetic: `padding_inner` is the share of
/// each step left empty between bands, `padding_outer` the number of steps
/// of space before the first and after the last band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    /// Create a band scale without padding
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> Self {
        Self {
            categories,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Set inner and outer padding (inner is clamped to [0, 1])
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Distance between the starts of adjacent bands
    pub fn step(&self) -> f64 {
        let n = self.categories.len() as f64;
        let slots = (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        (self.range.1 - self.range.0) / slots
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn start(&self) -> f64 {
        let n = self.categories.len() as f64;
        let span = self.range.1 - self.range.0;
        // Center the bands in the range
        self.range.0 + (span - self.step() * (n - self.padding_inner)) / 2.0
    }
}

impl CategoricalScale for BandScale {
    fn position(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.start() + self.step() * index as f64)
    }

    fn band_width(&self) -> Option<f64> {
        Some(self.step() * (1.0 - self.padding_inner))
    }
}

/// Categorical scale of evenly spaced points, without band width
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl PointScale {
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> Self {
        Self {
            categories,
            range,
            padding: 0.0,
        }
    }

    /// Space before the first and after the last point, in steps
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    fn step(&self) -> f64 {
        let n = self.categories.len() as f64;
        let slots = (n - 1.0 + 2.0 * self.padding).max(1.0);
        (self.range.1 - self.range.0) / slots
    }
}

impl CategoricalScale for PointScale {
    fn position(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        let step = self.step();
        Some(self.range.0 + step * self.padding + step * index as f64)
    }
}

/// A major tick mark on a numeric axis
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Label text
    pub label: String,
}

/// Format a number for display
fn format_number(value: f64, format: Option<&str>) -> String {
    match format {
        Some(fmt) if fmt.ends_with('e') || fmt.ends_with('E') => {
            format!("{:e}", value)
        }
        Some(fmt) if fmt.contains('.') => {
            let precision: usize = fmt
                .chars()
                .skip_while(|c| *c != '.')
                .skip(1)
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap_or(2);
            format!("{:.prec$}", value, prec = precision)
        }
        _ => {
            if value.abs() < 1e-12 {
                "0".to_string()
            } else if value.abs() >= 10000.0 || value.abs() < 0.01 {
                format!("{:.2e}", value)
            } else if value.fract().abs() < 1e-10 {
                format!("{:.0}", value)
            } else {
                let fixed = format!("{:.4}", value);
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            }
        }
    }
}

/// Convert an integer to superscript Unicode characters
fn superscript(n: i32) -> String {
    const SUPERSCRIPTS: &[char] = &['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    if n == 0 {
        return "⁰".to_string();
    }

    let mut result = String::new();
    if n < 0 {
        result.push('⁻');
    }

    let mut num = n.unsigned_abs();
    let mut digits = Vec::new();
    while num > 0 {
        digits.push(SUPERSCRIPTS[(num % 10) as usize]);
        num /= 10;
    }
    result.extend(digits.into_iter().rev());

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("model-{}", i)).collect()
    }

    #[test]
    fn test_linear_map() {
        let scale = ContinuousScale::new((0.0, 1.0), (100.0, 500.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(0.5), 300.0);
        assert_eq!(scale.map(1.0), 500.0);
    }

    #[test]
    fn test_log_map_rejects_non_positive() {
        let scale = ContinuousScale::new((1.0, 1000.0), (0.0, 300.0)).with_log_scale();
        assert!((scale.map(10.0) - 100.0).abs() < 1e-9);
        assert!(scale.map(0.0).is_nan());
        assert!(scale.map(-5.0).is_nan());
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let scale = ContinuousScale::new((0.5, 0.5), (0.0, 200.0));
        assert_eq!(scale.map(0.5), 100.0);
    }

    #[test]
    fn test_closure_is_numeric_scale() {
        let double = |v: f64| v * 2.0;
        assert_eq!(NumericScale::map(&double, 21.0), 42.0);
    }

    #[test]
    fn test_linear_ticks() {
        let scale = ContinuousScale::new((0.0, 1.0), (0.0, 400.0));
        let ticks = scale.ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "0.2", "0.4", "0.6", "0.8", "1"]);
    }

    #[test]
    fn test_log_ticks() {
        let scale = ContinuousScale::new((1.0, 1000.0), (0.0, 300.0)).with_log_scale();
        let labels: Vec<String> = scale.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["10⁰", "10¹", "10²", "10³"]);
    }

    #[test]
    fn test_band_scale_without_padding() {
        let scale = BandScale::new(names(4), (0.0, 400.0));
        assert_eq!(scale.band_width(), Some(100.0));
        assert_eq!(scale.position("model-0"), Some(0.0));
        assert_eq!(scale.position("model-3"), Some(300.0));
        assert_eq!(scale.position("unknown"), None);
    }

    #[test]
    fn test_band_scale_with_padding() {
        // 4 bands, inner 0.2, outer 0.1: step = 400 / (4 - 0.2 + 0.2) = 100
        let scale = BandScale::new(names(4), (0.0, 400.0)).with_padding(0.2, 0.1);
        assert!((scale.step() - 100.0).abs() < 1e-9);
        assert!((scale.band_width().unwrap() - 80.0).abs() < 1e-9);
        // start = (400 - 100 * 3.8) / 2 = 10
        assert!((scale.position("model-0").unwrap() - 10.0).abs() < 1e-9);
        assert!((scale.position("model-1").unwrap() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_scale_has_no_band_width() {
        let scale = PointScale::new(names(3), (0.0, 200.0));
        assert_eq!(scale.band_width(), None);
        assert_eq!(scale.position("model-0"), Some(0.0));
        assert_eq!(scale.position("model-2"), Some(200.0));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, None), "0");
        assert_eq!(format_number(123.0, None), "123");
        assert_eq!(format_number(123.456, Some(".2f")), "123.46");
        assert!(format_number(12345678.0, None).contains('e'));
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(-2), "⁻²");
        assert_eq!(superscript(12), "¹²");
    }
}
