//! JSON rendering of regression results.
//!
//! Shapes:
//! - single fit: `{"type","a","b","r_squared","equation","valid"}`
//! - per-column batch: array of the same objects, each with a leading `"column"`
//! - comparison: array with exactly one object per model
//! - legacy linear: `{"slope","intercept","r_squared","valid"}` (+ `"column"` in batches)

use serde::Serialize;

use crate::domain::{ColumnFit, RegressionResult};

/// Sentinel for an absent single-fit request.
pub const INVALID_OBJECT: &str = r#"{"valid":false}"#;

/// Sentinel for an absent batch request.
pub const EMPTY_ARRAY: &str = "[]";

/// Slope/intercept view of a linear fit.
#[derive(Debug, Clone, Serialize)]
pub struct LinearSummary {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub valid: bool,
}

impl From<&RegressionResult> for LinearSummary {
    fn from(fit: &RegressionResult) -> Self {
        Self {
            slope: fit.a,
            intercept: fit.b,
            r_squared: fit.r_squared,
            valid: fit.valid,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnLinearSummary {
    pub column: usize,
    #[serde(flatten)]
    pub summary: LinearSummary,
}

pub fn regression_json(fit: &RegressionResult) -> String {
    serde_json::to_string(fit).unwrap_or_else(|_| INVALID_OBJECT.to_string())
}

pub fn column_fits_json(fits: &[ColumnFit]) -> String {
    serde_json::to_string(fits).unwrap_or_else(|_| EMPTY_ARRAY.to_string())
}

pub fn comparison_json(fits: &[RegressionResult]) -> String {
    serde_json::to_string(fits).unwrap_or_else(|_| EMPTY_ARRAY.to_string())
}

pub fn linear_summary_json(fit: &RegressionResult) -> String {
    serde_json::to_string(&LinearSummary::from(fit)).unwrap_or_else(|_| INVALID_OBJECT.to_string())
}

pub fn column_linear_summaries_json(fits: &[ColumnFit]) -> String {
    let rows: Vec<ColumnLinearSummary> = fits
        .iter()
        .map(|f| ColumnLinearSummary {
            column: f.column,
            summary: LinearSummary::from(&f.result),
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_else(|_| EMPTY_ARRAY.to_string())
}
