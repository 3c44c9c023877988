//! Low-level fitting routine for a single model kind.
//!
//! Given raw samples `(x_i, y_i)` we:
//! - drop samples outside the model's domain (logs need positive inputs)
//! - linearize the survivors and solve one OLS problem
//! - back-map slope/intercept to the model's `(a, b)`
//! - recompute R² in the original y units where the transform touched `y`

use nalgebra::DVector;

use crate::domain::{ModelKind, RegressionResult};
use crate::math::{r_squared, simple_linear_fit};
use crate::models::{coefficients, equation, in_domain, linearize, predict, refit_r_squared};

/// Minimum number of domain-valid samples for any fit.
const MIN_POINTS: usize = 2;

/// Fit one model to paired samples.
///
/// Never fails: too few usable points or a degenerate design produce a result
/// with `valid == false`.
pub fn fit_model(model: ModelKind, x: &[f64], y: &[f64]) -> RegressionResult {
    let mut kept_x = Vec::with_capacity(x.len());
    let mut kept_y = Vec::with_capacity(y.len());
    let mut u = Vec::with_capacity(x.len());
    let mut v = Vec::with_capacity(y.len());

    for (&xi, &yi) in x.iter().zip(y) {
        if !in_domain(model, xi, yi) {
            continue;
        }
        let (ui, vi) = linearize(model, xi, yi);
        kept_x.push(xi);
        kept_y.push(yi);
        u.push(ui);
        v.push(vi);
    }

    let n = u.len();
    if n < MIN_POINTS {
        return RegressionResult::invalid(model);
    }

    let line = simple_linear_fit(&DVector::from_vec(u), &DVector::from_vec(v));
    if !line.valid {
        return RegressionResult::invalid(model);
    }

    let (a, b) = coefficients(model, line.slope, line.intercept);

    let r2 = if refit_r_squared(model) {
        let observed = DVector::from_vec(kept_y);
        let predicted =
            DVector::from_iterator(n, kept_x.iter().map(|&xi| predict(model, xi, a, b)));
        r_squared(&observed, &predicted)
    } else {
        line.r_squared
    };
    if !(a.is_finite() && b.is_finite() && r2.is_finite()) {
        return RegressionResult::invalid(model);
    }

    RegressionResult {
        kind: model,
        a,
        b,
        r_squared: r2,
        equation: equation(model, a, b),
        valid: true,
        points: n,
    }
}
