//! SVG export of laid-out box plots
//!
//! Produces a standalone SVG document from [`BoxGlyph`]s, with an optional
//! numeric axis along the bottom of the plot area and category labels in
//! the left margin.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::{ContinuousScale, NumericScale};
use crate::error::ChartError;
use crate::geometry::{BoxGlyph, Segment};

/// Space between the surface edge and the plot area, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for SvgMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 10.0,
            bottom: 40.0,
            left: 180.0,
        }
    }
}

/// SVG document configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
    pub margins: SvgMargins,
    /// Title drawn above the plot area
    pub title: Option<String>,
    /// Label under the numeric axis
    pub axis_label: Option<String>,
    /// Box fill color
    pub fill: String,
    /// Box fill opacity
    pub fill_opacity: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margins: SvgMargins::default(),
            title: None,
            axis_label: None,
            fill: "#888".to_string(),
            fill_opacity: 0.7,
        }
    }
}

impl SvgConfig {
    /// Horizontal pixel range of the plot area
    pub fn plot_x_range(&self) -> (f64, f64) {
        (self.margins.left, self.width - self.margins.right)
    }

    /// Vertical pixel range of the plot area
    pub fn plot_y_range(&self) -> (f64, f64) {
        (self.margins.top, self.height - self.margins.bottom)
    }
}

/// Renders box plot glyphs as SVG
#[derive(Clone, Debug, Default)]
pub struct SvgExporter {
    config: SvgConfig,
}

impl SvgExporter {
    pub fn new(config: SvgConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SvgConfig {
        &self.config
    }

    /// Render the document
    ///
    /// `axis` draws tick marks and labels for the numeric axis when given.
    pub fn render(
        &self,
        glyphs: &[BoxGlyph],
        axis: Option<&ContinuousScale>,
    ) -> Result<String, ChartError> {
        let cfg = &self.config;
        let (x0, x1) = cfg.plot_x_range();
        let (y0, y1) = cfg.plot_y_range();
        if !(x1 > x0 && y1 > y0) {
            return Err(ChartError::Export {
                message: format!(
                    "{}x{} surface leaves no plot area inside the margins",
                    cfg.width, cfg.height
                ),
            });
        }

        let mut svg = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="11">"#,
            w = cfg.width,
            h = cfg.height
        );

        if let Some(title) = &cfg.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" text-anchor="middle" font-size="14">{}</text>"#,
                cfg.width / 2.0,
                cfg.margins.top - 6.0,
                escape_xml(title)
            );
        }

        if let Some(scale) = axis {
            self.write_axis(&mut svg, scale, y1);
        }

        for glyph in glyphs {
            self.write_glyph(&mut svg, glyph);
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Render and write the document to `path`
    pub fn write_to(
        &self,
        path: &Path,
        glyphs: &[BoxGlyph],
        axis: Option<&ContinuousScale>,
    ) -> Result<(), ChartError> {
        let svg = self.render(glyphs, axis)?;
        std::fs::write(path, svg)?;
        tracing::info!("Wrote box plot SVG to {:?}", path);
        Ok(())
    }

    fn write_axis(&self, svg: &mut String, scale: &ContinuousScale, baseline: f64) {
        let (x0, x1) = self.config.plot_x_range();
        let _ = writeln!(svg, "  <g class=\"axis\">");
        write_line(svg, &Segment::horizontal(x0, x1, baseline), 1.0);

        for tick in scale.ticks() {
            let x = scale.map(tick.value);
            if !x.is_finite() {
                continue;
            }
            write_line(svg, &Segment::vertical(x, baseline, baseline + 5.0), 1.0);
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                x,
                baseline + 17.0,
                escape_xml(&tick.label)
            );
        }

        if let Some(label) = &self.config.axis_label {
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                (x0 + x1) / 2.0,
                baseline + 33.0,
                escape_xml(label)
            );
        }
        let _ = writeln!(svg, "  </g>");
    }

    fn write_glyph(&self, svg: &mut String, glyph: &BoxGlyph) {
        let _ = writeln!(svg, "  <g class=\"box\">");
        let _ = writeln!(
            svg,
            r#"    <text x="{}" y="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            self.config.margins.left - 8.0,
            glyph.center_y(),
            escape_xml(&glyph.category)
        );

        for whisker in [&glyph.whisker_low, &glyph.whisker_high, &glyph.cap_low, &glyph.cap_high] {
            write_line(svg, whisker, 1.0);
        }

        let body = &glyph.body;
        let _ = writeln!(
            svg,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="{}" stroke="black" stroke-width="2"/>"#,
            body.x,
            body.y,
            body.width,
            body.height,
            escape_xml(&self.config.fill),
            self.config.fill_opacity
        );
        write_line(svg, &glyph.median, 2.0);
        let _ = writeln!(svg, "  </g>");
    }
}

fn write_line(svg: &mut String, segment: &Segment, stroke_width: f64) {
    let _ = writeln!(
        svg,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
        segment.from.x, segment.from.y, segment.to.x, segment.to.y, stroke_width
    );
}

fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn glyph(name: &str) -> BoxGlyph {
        BoxGlyph {
            category: name.to_string(),
            whisker_low: Segment::horizontal(200.0, 300.0, 50.0),
            whisker_high: Segment::horizontal(400.0, 500.0, 50.0),
            cap_low: Segment::vertical(200.0, 41.0, 59.0),
            cap_high: Segment::vertical(500.0, 41.0, 59.0),
            body: Rect {
                x: 300.0,
                y: 32.0,
                width: 100.0,
                height: 36.0,
            },
            median: Segment::vertical(350.0, 32.0, 68.0),
        }
    }

    #[test]
    fn test_render_glyph() {
        let exporter = SvgExporter::default();
        let svg = exporter.render(&[glyph("GaussianNB")], None).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r##"<rect x="300" y="32" width="100" height="36" fill="#888""##));
        assert_eq!(svg.matches("<line").count(), 5);
        assert!(svg.contains(">GaussianNB</text>"));
    }

    #[test]
    fn test_render_axis() {
        let config = SvgConfig {
            axis_label: Some("AUC".to_string()),
            ..Default::default()
        };
        let exporter = SvgExporter::new(config);
        let scale = ContinuousScale::new((0.0, 1.0), exporter.config().plot_x_range());
        let svg = exporter.render(&[], Some(&scale)).unwrap();

        assert!(svg.contains(">0.4</text>"));
        assert!(svg.contains(">AUC</text>"));
    }

    #[test]
    fn test_labels_escaped() {
        let svg = SvgExporter::default()
            .render(&[glyph("A<B & C>")], None)
            .unwrap();
        assert!(svg.contains("A&lt;B &amp; C&gt;"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auc.svg");

        SvgExporter::default()
            .write_to(&path, &[glyph("GaussianNB")], None)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            SvgExporter::default()
                .render(&[glyph("GaussianNB")], None)
                .unwrap()
        );
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("auc.svg");

        let result = SvgExporter::default().write_to(&path, &[], None);
        assert!(matches!(result, Err(ChartError::Io(_))));
    }

    #[test]
    fn test_no_plot_area() {
        let config = SvgConfig {
            width: 100.0,
            ..Default::default()
        };
        let result = SvgExporter::new(config).render(&[], None);
        assert!(matches!(result, Err(ChartError::Export { .. })));
    }
}
