//! Model selection (linear vs exponential vs logarithmic vs power) by R².
//!
//! The engine fits each model on identical samples and:
//! 1. ignores invalid fits
//! 2. keeps the fit with the strictly greatest R²
//! 3. resolves exact ties in favor of the earlier model in `ModelKind::ALL`

use crate::domain::{ColumnFit, ModelKind, ModelSpec, RegressionResult, Table};
use crate::fit::fitter::fit_model;
use crate::io::ingest::extract_xy;

/// R² reported by an auto-selection that found no valid fit.
pub const NO_FIT_R_SQUARED: f64 = -1.0;

/// Fit every model, in `ModelKind::ALL` order.
///
/// Always returns exactly one entry per model, valid or not.
pub fn compare_models(x: &[f64], y: &[f64]) -> Vec<RegressionResult> {
    ModelKind::ALL
        .iter()
        .map(|&kind| fit_model(kind, x, y))
        .collect()
}

/// Pick the valid fit with the greatest R² (earlier entries win ties).
///
/// With no valid candidate, returns an invalid linear result carrying the
/// `NO_FIT_R_SQUARED` sentinel.
pub fn select_best(fits: &[RegressionResult]) -> RegressionResult {
    let mut best: Option<&RegressionResult> = None;
    for fit in fits.iter().filter(|f| f.valid) {
        let current = best.map_or(NO_FIT_R_SQUARED, |b| b.r_squared);
        if fit.r_squared > current {
            best = Some(fit);
        }
    }

    best.cloned().unwrap_or_else(|| RegressionResult {
        r_squared: NO_FIT_R_SQUARED,
        ..RegressionResult::invalid(ModelKind::Linear)
    })
}

/// Fit all four models and keep the best.
pub fn fit_auto(x: &[f64], y: &[f64]) -> RegressionResult {
    select_best(&compare_models(x, y))
}

/// Fit according to a caller's model choice.
pub fn fit_with_spec(spec: ModelSpec, x: &[f64], y: &[f64]) -> RegressionResult {
    match spec.to_kind() {
        Some(kind) => fit_model(kind, x, y),
        None => fit_auto(x, y),
    }
}

/// Extract two columns from a table and fit them.
pub fn fit_columns(table: &Table, x_col: usize, y_col: usize, spec: ModelSpec) -> RegressionResult {
    let (x, y) = extract_xy(table, x_col, y_col);
    fit_with_spec(spec, &x, &y)
}

/// Fit every series column (1..N) against column 0.
///
/// Empty when the table has no rows or fewer than two columns.
pub fn fit_all_columns(table: &Table, spec: ModelSpec) -> Vec<ColumnFit> {
    if table.is_empty() || table.num_cols() < 2 {
        return Vec::new();
    }
    (1..table.num_cols())
        .map(|column| ColumnFit {
            column,
            result: fit_columns(table, 0, column, spec),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::parse_table;

    fn result(kind: ModelKind, r_squared: f64, valid: bool) -> RegressionResult {
        RegressionResult {
            kind,
            a: 1.0,
            b: 1.0,
            r_squared,
            equation: String::new(),
            valid,
            points: 3,
        }
    }

    #[test]
    fn auto_prefers_linear_on_linear_data() {
        let fit = fit_auto(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!(fit.valid);
        assert_eq!(fit.kind, ModelKind::Linear);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exact_ties_keep_the_earlier_model() {
        let fits = vec![
            result(ModelKind::Linear, 0.9, true),
            result(ModelKind::Exponential, 0.95, true),
            result(ModelKind::Logarithmic, 0.95, true),
            result(ModelKind::Power, 0.5, true),
        ];
        assert_eq!(select_best(&fits).kind, ModelKind::Exponential);
    }

    #[test]
    fn invalid_fits_are_never_selected() {
        let fits = vec![
            result(ModelKind::Linear, 0.2, true),
            result(ModelKind::Exponential, 0.99, false),
        ];
        assert_eq!(select_best(&fits).kind, ModelKind::Linear);
    }

    #[test]
    fn auto_with_no_valid_fit_uses_sentinel() {
        let fit = fit_auto(&[1.0], &[1.0]);
        assert!(!fit.valid);
        assert_eq!(fit.kind, ModelKind::Linear);
        assert_eq!(fit.r_squared, NO_FIT_R_SQUARED);
    }

    #[test]
    fn auto_picks_exponential_on_exponential_data() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|&xi: &f64| 0.5 * (0.9 * xi).exp()).collect();
        let fit = fit_auto(&x, &y);
        assert_eq!(fit.kind, ModelKind::Exponential);
    }

    #[test]
    fn comparison_always_has_four_entries() {
        let fits = compare_models(&[-1.0, -2.0], &[-3.0, -4.0]);
        let kinds: Vec<ModelKind> = fits.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, ModelKind::ALL.to_vec());
        assert!(fits[0].valid);
        assert!(fits[1..].iter().all(|f| !f.valid));
    }

    #[test]
    fn fit_with_spec_honors_single_model() {
        let fit = fit_with_spec(ModelSpec::Power, &[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_eq!(fit.kind, ModelKind::Power);
        assert!((fit.b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_all_columns_tags_each_series() {
        let table = parse_table("x\ty1\ty2\n1\t2\t1\n2\t4\t4\n3\t6\t9");
        let fits = fit_all_columns(&table, ModelSpec::Linear);
        assert_eq!(fits.len(), 2);
        assert_eq!(fits[0].column, 1);
        assert!((fits[0].result.a - 2.0).abs() < 1e-9);
        assert_eq!(fits[1].column, 2);
        assert!((fits[1].result.a - 4.0).abs() < 1e-9);
    }

    #[test]
    fn fit_all_columns_needs_two_columns() {
        assert!(fit_all_columns(&parse_table("1\n2\n3"), ModelSpec::Auto).is_empty());
        assert!(fit_all_columns(&parse_table(""), ModelSpec::Auto).is_empty());
    }
}
