//! Report building: per-model metric summaries and the AUC box plot

use std::path::Path;
use std::sync::Arc;

use cdss_chart::{
    BandScale, BoxGlyph, BoxPlotLayout, ChartScales, ContinuousScale, LayoutObserver,
    SvgExporter,
};
use cdss_stats::{format_percent, BoxSummary};
use comfy_table::{CellAlignment, Table};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::results::ModelResults;

/// Inner and outer padding of the model band axis
const BAND_PADDING: f64 = 0.1;

/// Tick label format of the AUC axis
const AXIS_FORMAT: &str = ".1f";

/// Metrics of one trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    pub accuracy: f64,
    /// Precision per class, in percent
    pub precision: Vec<f64>,
    /// Recall per class, in percent
    pub recall: Vec<f64>,
    /// Trapezoidal area under the reported ROC curve
    pub roc_auc: f64,
    /// Five-number summary of the cross-validation fold AUCs
    pub fold_auc: Option<BoxSummary>,
}

impl ModelSummary {
    /// Positive-class precision for binary targets, macro average otherwise
    pub fn headline_precision(&self) -> f64 {
        headline(&self.precision)
    }

    /// Positive-class recall for binary targets, macro average otherwise
    pub fn headline_recall(&self) -> f64 {
        headline(&self.recall)
    }
}

fn headline(per_class: &[f64]) -> f64 {
    match per_class {
        [] => 0.0,
        [positive, _] => *positive,
        all => all.iter().sum::<f64>() / all.len() as f64,
    }
}

/// Summarize every model of a result payload, in model order
pub fn summarize(results: &ModelResults) -> Result<Vec<ModelSummary>> {
    results
        .model_names
        .iter()
        .enumerate()
        .map(|(i, name)| -> Result<ModelSummary> {
            let cm = results.confusion_matrix(i)?;
            let classes = 0..cm.n_classes();

            let fold_auc = match results.fold_auc(i) {
                Ok(scores) if !scores.is_empty() => Some(BoxSummary::from_values(&scores)?),
                Ok(_) | Err(ReportError::MissingData(_)) => None,
                Err(e) => return Err(e),
            };

            Ok(ModelSummary {
                name: name.clone(),
                accuracy: cm.accuracy_percent(),
                precision: classes.clone().map(|c| cm.precision_percent(c)).collect(),
                recall: classes.map(|c| cm.recall_percent(c)).collect(),
                roc_auc: results.roc_curve(i).auc(),
                fold_auc,
            })
        })
        .collect()
}

/// Text table of model summaries
pub fn format_summary_table(summaries: &[ModelSummary]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "model",
        "accuracy",
        "precision",
        "recall",
        "roc_auc",
        "fold auc (q1/med/q3)",
    ]);

    for s in summaries {
        let folds = match &s.fold_auc {
            Some(b) => format!("{:.4}/{:.4}/{:.4}", b.q1, b.median, b.q3),
            None => "-".to_string(),
        };
        table.add_row(vec![
            s.name.clone(),
            format_percent(s.accuracy),
            format_percent(s.headline_precision()),
            format_percent(s.headline_recall()),
            format!("{:.4}", s.roc_auc),
            folds,
        ]);
    }

    for index in 1..6 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.to_string()
}

/// Renders the fold-AUC box plot of a result payload as SVG
pub struct AucBoxPlot {
    config: ReportConfig,
    observer: Option<Arc<dyn LayoutObserver>>,
}

impl AucBoxPlot {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Route layout diagnostics to `observer` instead of `tracing`
    pub fn with_observer(mut self, observer: Arc<dyn LayoutObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Lay out one box per model on a linear [0, 1] AUC axis and render it
    pub fn render(&self, results: &ModelResults) -> Result<String> {
        let (exporter, glyphs, axis) = self.prepare(results)?;
        Ok(exporter.render(&glyphs, Some(&axis))?)
    }

    /// Render the box plot and write it to `path`
    pub fn write_to(&self, path: &Path, results: &ModelResults) -> Result<()> {
        let (exporter, glyphs, axis) = self.prepare(results)?;
        exporter.write_to(path, &glyphs, Some(&axis))?;
        Ok(())
    }

    fn prepare(
        &self,
        results: &ModelResults,
    ) -> Result<(SvgExporter, Vec<BoxGlyph>, ContinuousScale)> {
        let series = results.auc_series()?;

        let mut svg = self.config.svg.clone();
        if svg.axis_label.is_none() {
            svg.axis_label = Some("AUC".to_string());
        }

        let x = ContinuousScale::new((0.0, 1.0), svg.plot_x_range()).with_format(AXIS_FORMAT);
        let y = BandScale::new(
            series.iter().map(|(name, _)| name.clone()).collect(),
            svg.plot_y_range(),
        )
        .with_padding(BAND_PADDING, BAND_PADDING);

        let mut layout = BoxPlotLayout::new(self.config.layout.clone())?;
        if let Some(observer) = &self.observer {
            layout = layout.with_observer(observer.clone());
        }

        let glyphs = layout.layout_series(&series, ChartScales::new(&x, &y), Some(svg.height))?;
        tracing::debug!("Laid out {} of {} AUC boxes", glyphs.len(), series.len());

        Ok((SvgExporter::new(svg), glyphs, x))
    }
}
