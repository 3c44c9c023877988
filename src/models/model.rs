//! Model evaluation for the four linearizable regression forms.
//!
//! The fitter relies on a handful of primitive operations per model:
//! - decide whether a raw sample lies in the model's domain
//! - map a raw sample to the straight-line space the OLS solver works in
//! - map the solver's slope/intercept back to the model's `(a, b)`
//! - predict `y(x)` for R² recomputation and plotting
//!
//! Rendering helpers (equation text, pgfplots expressions) live here too so that
//! every place that spells out a model agrees on its form.

use crate::domain::ModelKind;

/// Whether `(x, y)` can be linearized for `model` (logs need positive inputs).
pub fn in_domain(model: ModelKind, x: f64, y: f64) -> bool {
    match model {
        ModelKind::Linear => true,
        ModelKind::Exponential => y > 0.0,
        ModelKind::Logarithmic => x > 0.0,
        ModelKind::Power => x > 0.0 && y > 0.0,
    }
}

/// Map a domain-valid sample to `(u, v)` with `v = slope * u + intercept`.
pub fn linearize(model: ModelKind, x: f64, y: f64) -> (f64, f64) {
    match model {
        ModelKind::Linear => (x, y),
        ModelKind::Exponential => (x, y.ln()),
        ModelKind::Logarithmic => (x.ln(), y),
        ModelKind::Power => (x.ln(), y.ln()),
    }
}

/// Convert the straight-line fit back to the model's `(a, b)`.
pub fn coefficients(model: ModelKind, slope: f64, intercept: f64) -> (f64, f64) {
    match model {
        ModelKind::Linear | ModelKind::Logarithmic => (slope, intercept),
        ModelKind::Exponential | ModelKind::Power => (intercept.exp(), slope),
    }
}

/// Whether the straight-line R² must be recomputed in the original y units.
///
/// Models that transform `y` produce an R² for `ln y`, which is not comparable
/// with the other models; the logarithmic model only transforms `x`.
pub fn refit_r_squared(model: ModelKind) -> bool {
    matches!(model, ModelKind::Exponential | ModelKind::Power)
}

/// Predict `y(x)` for the given model kind.
pub fn predict(model: ModelKind, x: f64, a: f64, b: f64) -> f64 {
    match model {
        ModelKind::Linear => a * x + b,
        ModelKind::Exponential => a * (b * x).exp(),
        ModelKind::Logarithmic => a * x.ln() + b,
        ModelKind::Power => a * x.powf(b),
    }
}

/// Equation text with coefficients at 6 fractional digits, e.g. `2.000000*x+1.000000`.
pub fn equation(model: ModelKind, a: f64, b: f64) -> String {
    match model {
        ModelKind::Linear => format!("{a:.6}*x{}", signed_term(b)),
        ModelKind::Exponential => format!("{a:.6}*exp({b:.6}*x)"),
        ModelKind::Logarithmic => format!("{a:.6}*ln(x){}", signed_term(b)),
        ModelKind::Power => format!("{a:.6}*x^{b:.6}"),
    }
}

/// pgfplots math expression in `x` for plotting the fitted curve.
pub fn pgf_expression(model: ModelKind, a: f64, b: f64) -> String {
    match model {
        ModelKind::Linear => format!("{a:.6}*x {}", spaced_term(b)),
        ModelKind::Exponential => format!("{a:.6}*exp({b:.6}*x)"),
        ModelKind::Logarithmic => format!("{a:.6}*ln(x) {}", spaced_term(b)),
        ModelKind::Power => format!("{a:.6}*x^({b:.6})"),
    }
}

fn signed_term(v: f64) -> String {
    if v >= 0.0 {
        format!("+{v:.6}")
    } else {
        format!("{v:.6}")
    }
}

fn spaced_term(v: f64) -> String {
    if v >= 0.0 {
        format!("+ {v:.6}")
    } else {
        format!("- {:.6}", -v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_then_back_map_round_trips_power() {
        let (a, b) = (3.0, 1.5);
        let x = 4.0;
        let y = predict(ModelKind::Power, x, a, b);
        let (u, v) = linearize(ModelKind::Power, x, y);
        // ln y = ln a + b ln x
        assert!((v - (a.ln() + b * u)).abs() < 1e-12);
        let (a2, b2) = coefficients(ModelKind::Power, b, a.ln());
        assert!((a2 - a).abs() < 1e-12);
        assert!((b2 - b).abs() < 1e-12);
    }

    #[test]
    fn domain_filters() {
        assert!(in_domain(ModelKind::Linear, -1.0, -1.0));
        assert!(!in_domain(ModelKind::Exponential, 1.0, 0.0));
        assert!(!in_domain(ModelKind::Logarithmic, 0.0, 1.0));
        assert!(in_domain(ModelKind::Logarithmic, 0.5, -3.0));
        assert!(!in_domain(ModelKind::Power, 1.0, -1.0));
    }

    #[test]
    fn equation_signs() {
        assert_eq!(equation(ModelKind::Linear, 2.0, 1.0), "2.000000*x+1.000000");
        assert_eq!(equation(ModelKind::Linear, 2.0, -1.5), "2.000000*x-1.500000");
        assert_eq!(equation(ModelKind::Logarithmic, 1.0, 0.0), "1.000000*ln(x)+0.000000");
        assert_eq!(equation(ModelKind::Exponential, 1.0, -0.5), "1.000000*exp(-0.500000*x)");
        assert_eq!(equation(ModelKind::Power, 2.0, 0.5), "2.000000*x^0.500000");
    }

    #[test]
    fn pgf_expression_forms() {
        assert_eq!(pgf_expression(ModelKind::Linear, 2.0, -1.0), "2.000000*x - 1.000000");
        assert_eq!(pgf_expression(ModelKind::Power, 2.0, -0.5), "2.000000*x^(-0.500000)");
    }
}
