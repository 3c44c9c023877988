//! Numeric cell recognition and rounding.
//!
//! Cells are plain decimal literals: optional sign, digits, at most one `.`.
//! Exponent notation, thousands separators and surrounding whitespace are not
//! numeric; such cells pass through the formatters untouched.
//!
//! Rounding works on the parsed `f64`, so results inherit binary floating-point
//! representation (e.g. `2.675` rounds to `2.67` at two decimals).

/// True iff `s` is an optionally signed decimal literal with at least one digit
/// whose value fits in a finite `f64`.
pub fn is_number(s: &str) -> bool {
    parse_number(s).is_some()
}

/// Parse a numeric cell; `None` exactly when `is_number` is false.
///
/// Literals too large for `f64` are not numbers.
pub fn parse_number(s: &str) -> Option<f64> {
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Round to a fixed number of fractional digits (half away from zero).
///
/// Non-numeric input is returned unchanged; negative `decimals` act as 0.
pub fn round_number(s: &str, decimals: i32) -> String {
    let Some(value) = parse_number(s) else {
        return s.to_string();
    };
    let decimals = decimals.max(0);

    let multiplier = 10f64.powi(decimals);
    let scaled = value * multiplier;
    let rounded = if scaled.is_finite() && multiplier.is_finite() {
        scaled.round() / multiplier
    } else {
        value
    };

    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Round to `sig_figs` significant figures.
///
/// Non-numeric input is returned unchanged; `sig_figs` below 1 acts as 1.
/// Results with no fractional digits are rendered without a decimal point.
pub fn round_significant_figures(s: &str, sig_figs: i32) -> String {
    let Some(value) = parse_number(s) else {
        return s.to_string();
    };
    let sig_figs = sig_figs.max(1);

    if value == 0.0 {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    let shift = sig_figs.saturating_sub(1).saturating_sub(exponent);

    let rounded = if shift >= 0 {
        let m = 10f64.powi(shift);
        let scaled = value * m;
        if scaled.is_finite() && m.is_finite() {
            scaled.round() / m
        } else {
            value
        }
    } else {
        // Dividing by 10^k keeps large integers exact where multiplying by
        // 10^-k would not.
        let m = 10f64.powi(-shift);
        (value / m).round() * m
    };

    let decimal_places = shift.max(0) as usize;
    if decimal_places > 0 {
        format!("{rounded:.decimal_places$}")
    } else {
        format!("{rounded:.0}")
    }
}
