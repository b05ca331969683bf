//! Decoding of the modeling backend's result payload
//!
//! The backend answers a modeling run with one JSON object holding, per
//! trained model, feature importances, flattened confusion matrices, ROC
//! points and cross-validation AUC scores. Numbers arrive either as JSON
//! numbers or as numeric strings; both are accepted.

use std::fmt;
use std::path::Path;

use cdss_stats::{ConfusionMatrix, RocCurve};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Number of feature selection methods the backend reports (`feat0`..`feat5`)
pub const FEATURE_METHOD_COUNT: usize = 6;

/// Class count assumed when the payload does not state one
pub const DEFAULT_CLASS_COUNT: usize = 2;

/// A JSON scalar that may be a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// The numeric value, if there is one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// `[[names...], [values...]]` table of one feature selection method
pub type FeatureTable = Vec<Vec<NumberOrString>>;

/// Importance of one feature under a selection method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub name: String,
    pub value: f64,
}

/// Results of one modeling run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    #[serde(default)]
    pub model_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat0: Option<FeatureTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat1: Option<FeatureTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat2: Option<FeatureTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat3: Option<FeatureTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat4: Option<FeatureTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat5: Option<FeatureTable>,

    /// Confusion matrices of all models, flattened and concatenated in `CM[0]`
    #[serde(rename = "CM", default, skip_serializing_if = "Option::is_none")]
    pub confusion_matrices: Option<Vec<Vec<f64>>>,

    /// Per model, `[fpr, tpr]` points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roc_curves: Option<Vec<Vec<[f64; 2]>>>,

    /// Per model, AUC score of each cross-validation fold
    #[serde(rename = "AUC", default, skip_serializing_if = "Option::is_none")]
    pub auc: Option<Vec<Vec<NumberOrString>>>,

    #[serde(rename = "NumbClasses", default, skip_serializing_if = "Option::is_none")]
    pub class_count: Option<usize>,

    /// Feature selection method names, in `feat0`..`feat5` order
    #[serde(rename = "FeatueMethod", default, skip_serializing_if = "Option::is_none")]
    pub feature_methods: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

impl ModelResults {
    /// Parse a result payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a result payload from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let results = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded results for {} models from {:?}",
            results.model_names.len(),
            path
        );
        Ok(results)
    }

    /// Number of classes of the target
    pub fn class_count(&self) -> usize {
        self.class_count.unwrap_or(DEFAULT_CLASS_COUNT)
    }

    /// Name of feature selection method `method`
    pub fn feature_method_name(&self, method: usize) -> Option<&str> {
        self.feature_methods
            .as_ref()
            .and_then(|names| names.get(method))
            .map(String::as_str)
    }

    fn feature_table(&self, method: usize) -> Option<&FeatureTable> {
        match method {
            0 => self.feat0.as_ref(),
            1 => self.feat1.as_ref(),
            2 => self.feat2.as_ref(),
            3 => self.feat3.as_ref(),
            4 => self.feat4.as_ref(),
            5 => self.feat5.as_ref(),
            _ => None,
        }
    }

    /// Feature importances of selection method `method`, in column order
    ///
    /// A missing table or one with fewer than two rows gives an empty list.
    /// Values that do not parse count as 0.
    pub fn feature_importance(&self, method: usize) -> Vec<FeatureImportance> {
        let table = match self.feature_table(method) {
            Some(table) if table.len() >= 2 => table,
            _ => return Vec::new(),
        };

        let (names, values) = (&table[0], &table[1]);
        names
            .iter()
            .enumerate()
            .map(|(i, name)| FeatureImportance {
                name: name.to_string(),
                value: values
                    .get(i)
                    .and_then(NumberOrString::as_f64)
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Confusion matrix of model `model`
    ///
    /// Matrices are `k * k` consecutive cells of `CM[0]`, `k` being the
    /// class count. A payload without matrices yields an all-zero binary
    /// matrix.
    pub fn confusion_matrix(&self, model: usize) -> Result<ConfusionMatrix> {
        let cells = match self
            .confusion_matrices
            .as_ref()
            .and_then(|cm| cm.first())
        {
            Some(cells) => cells,
            None => return Ok(ConfusionMatrix::empty_binary()),
        };

        let k = self.class_count();
        let missing = || {
            ReportError::MissingData(format!(
                "confusion matrix of model {} for {} classes ({} cells available)",
                model,
                k,
                cells.len()
            ))
        };

        let size = k.checked_mul(k).ok_or_else(missing)?;
        let start = model.checked_mul(size).ok_or_else(missing)?;
        let end = start.checked_add(size).ok_or_else(missing)?;
        let slice = cells.get(start..end).ok_or_else(missing)?;
        Ok(ConfusionMatrix::from_flat(slice)?)
    }

    /// ROC curve of model `model`, empty when the payload has none
    pub fn roc_curve(&self, model: usize) -> RocCurve {
        self.roc_curves
            .as_ref()
            .and_then(|curves| curves.get(model))
            .map(|pairs| RocCurve::from_pairs(pairs))
            .unwrap_or_default()
    }

    /// Fold AUC scores of model `model`
    pub fn fold_auc(&self, model: usize) -> Result<Vec<f64>> {
        let scores = self
            .auc
            .as_ref()
            .and_then(|auc| auc.get(model))
            .ok_or_else(|| ReportError::MissingData(format!("AUC scores of model {}", model)))?;

        scores
            .iter()
            .map(|score| {
                score.as_f64().ok_or_else(|| ReportError::InvalidValue {
                    field: format!("AUC[{}]", model),
                    value: score.to_string(),
                })
            })
            .collect()
    }

    /// `(model name, fold AUC scores)` for every model, in model order
    ///
    /// This is the input series of the AUC box plot.
    pub fn auc_series(&self) -> Result<Vec<(String, Vec<f64>)>> {
        if self.auc.is_none() {
            return Err(ReportError::MissingData("AUC".to_string()));
        }
        self.model_names
            .iter()
            .enumerate()
            .map(|(i, name)| Ok((name.clone(), self.fold_auc(i)?)))
            .collect()
    }
}
