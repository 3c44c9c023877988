//! Formatted terminal output for fits.
//!
//! We keep formatting code in one place so the fitting code stays free of
//! presentation concerns.

use crate::domain::{ColumnFit, RegressionResult};

/// Format a four-model comparison, marking the selected model with `*`.
pub fn format_comparison(fits: &[RegressionResult], best: &RegressionResult) -> String {
    let mut out = String::new();

    out.push_str("Model diagnostics:\n");
    for fit in fits {
        let chosen = if best.valid && fit.kind == best.kind { "*" } else { " " };
        out.push_str(&format!("{chosen} {:<12} {}\n", fit.kind.display_name(), describe(fit)));
    }

    out.push('\n');
    if best.valid {
        out.push_str(&format!(
            "Chosen model: {} ({})\n",
            best.kind.display_name(),
            best.kind.formula()
        ));
    } else {
        out.push_str("Chosen model: none (no model could be fitted)\n");
    }

    out
}

/// Format one fit per series column.
pub fn format_column_fits(fits: &[ColumnFit]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<8} {:<12} {:>10} {:>4}  {}",
            "column", "model", "r_squared", "n", "equation"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<8} {:-<12} {:-<10} {:-<4}  {:-<8}", "", "", "", "", "").trim_end());
    out.push('\n');

    for f in fits {
        let r = &f.result;
        let line = if r.valid {
            format!(
                "{:<8} {:<12} {:>10.6} {:>4}  {}",
                f.column,
                r.kind.name(),
                r.r_squared,
                r.points,
                r.equation
            )
        } else {
            format!("{:<8} {:<12} {:>10} {:>4}  (no fit)", f.column, r.kind.name(), "-", r.points)
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn describe(fit: &RegressionResult) -> String {
    if fit.valid {
        format!("R2={:.6} n={} y={}", fit.r_squared, fit.points, fit.equation)
    } else {
        "invalid (fewer than 2 usable points or constant x)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelSpec;
    use crate::fit::{compare_models, fit_all_columns, select_best};
    use crate::io::ingest::parse_table;

    #[test]
    fn comparison_marks_best_model() {
        let fits = compare_models(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        let best = select_best(&fits);
        let txt = format_comparison(&fits, &best);

        assert!(txt.starts_with("Model diagnostics:\n* Linear       R2=1.000000 n=3"));
        assert!(txt.contains("  Exponential  R2="));
        assert!(txt.ends_with("Chosen model: Linear (y = a*x + b)\n"));
    }

    #[test]
    fn comparison_without_valid_fit() {
        let fits = compare_models(&[1.0], &[1.0]);
        let best = select_best(&fits);
        let txt = format_comparison(&fits, &best);
        assert!(!txt.contains('*'));
        assert!(txt.contains("Chosen model: none"));
    }

    #[test]
    fn column_table_golden() {
        let table = parse_table("x,a,b\n1,2,q\n2,4,r\n3,6,s");
        let txt = format_column_fits(&fit_all_columns(&table, ModelSpec::Linear));
        let expected = concat!(
            "column   model         r_squared    n  equation\n",
            "-------- ------------ ---------- ----  --------\n",
            "1        linear         1.000000    3  2.000000*x+0.000000\n",
            "2        linear                -    0  (no fit)\n",
        );
        assert_eq!(txt, expected);
    }
}
