//! Ordinary least squares for a single regressor.
//!
//! Every model in this crate reduces to fitting a straight line
//! `v = slope * u + intercept` on transformed samples, so one closed-form
//! solver is enough:
//!
//! ```text
//! D         = n Σu² - (Σu)²
//! slope     = (n Σuv - Σu Σv) / D
//! intercept = (Σv Σu² - Σu Σuv) / D
//! ```
//!
//! A near-zero `D` means every `u` is (almost) the same value, and the fit is
//! reported as invalid rather than dividing by it.

use nalgebra::DVector;

/// Below this magnitude the normal-equation determinant is treated as singular.
pub const DEGENERATE_DENOMINATOR: f64 = 1e-10;

/// Below this total sum of squares R² is reported as 0.
pub const FLAT_SS_TOT: f64 = 1e-10;

/// Result of a straight-line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub valid: bool,
}

impl LinearFit {
    const INVALID: LinearFit = LinearFit {
        slope: 0.0,
        intercept: 0.0,
        r_squared: 0.0,
        valid: false,
    };
}

/// Fit `v = slope * u + intercept`.
///
/// Requires at least two samples of equal length.
pub fn simple_linear_fit(u: &DVector<f64>, v: &DVector<f64>) -> LinearFit {
    let len = u.len();
    if len < 2 || len != v.len() {
        return LinearFit::INVALID;
    }

    let n = len as f64;
    let sum_u = u.sum();
    let sum_v = v.sum();
    let sum_uv = u.dot(v);
    let sum_u2 = u.dot(u);

    let denominator = n * sum_u2 - sum_u * sum_u;
    if denominator.abs() < DEGENERATE_DENOMINATOR {
        return LinearFit::INVALID;
    }

    let slope = (n * sum_uv - sum_u * sum_v) / denominator;
    let intercept = (sum_v * sum_u2 - sum_u * sum_uv) / denominator;

    let predicted = u.map(|x| slope * x + intercept);

    LinearFit {
        slope,
        intercept,
        r_squared: r_squared(v, &predicted),
        valid: true,
    }
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// Returns 0 when the observations are (numerically) constant.
pub fn r_squared(observed: &DVector<f64>, predicted: &DVector<f64>) -> f64 {
    if observed.is_empty() || observed.len() != predicted.len() {
        return 0.0;
    }
    let mean = observed.mean();
    let ss_tot = observed.map(|y| y - mean).norm_squared();
    let ss_res = (observed - predicted).norm_squared();

    if ss_tot > FLAT_SS_TOT {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec(values: &[f64]) -> DVector<f64> {
        DVector::from_row_slice(values)
    }

    #[test]
    fn fits_exact_line() {
        let fit = simple_linear_fit(&vec(&[1.0, 2.0, 3.0]), &vec(&[2.0, 4.0, 6.0]));
        assert!(fit.valid);
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!(fit.intercept.abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fits_noisy_line() {
        // y = 1 + 0.5x with symmetric noise keeps the same slope.
        let fit = simple_linear_fit(&vec(&[0.0, 1.0, 2.0, 3.0]), &vec(&[1.1, 1.4, 2.1, 2.4]));
        assert!(fit.valid);
        assert!((fit.slope - 0.46).abs() < 1e-9);
        assert!(fit.r_squared > 0.9 && fit.r_squared < 1.0);
    }

    #[test]
    fn rejects_vertical_design() {
        let fit = simple_linear_fit(&vec(&[3.0, 3.0, 3.0]), &vec(&[1.0, 2.0, 3.0]));
        assert!(!fit.valid);
    }

    #[test]
    fn rejects_too_few_points() {
        let fit = simple_linear_fit(&vec(&[1.0]), &vec(&[1.0]));
        assert!(!fit.valid);
        let fit = simple_linear_fit(&vec(&[1.0, 2.0]), &vec(&[1.0]));
        assert!(!fit.valid);
    }

    #[test]
    fn flat_response_has_zero_r_squared() {
        let fit = simple_linear_fit(&vec(&[1.0, 2.0, 3.0]), &vec(&[5.0, 5.0, 5.0]));
        assert!(fit.valid);
        assert!(fit.slope.abs() < 1e-12);
        assert_eq!(fit.r_squared, 0.0);
    }
}
