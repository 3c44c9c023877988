//! Shared text-in/text-out operations used by both the CLI and the C ABI.
//!
//! Keeping these in one place avoids duplicating the core workflow:
//! parse -> (fit) -> render
//!
//! Each operation takes the pasted text as `Option<&str>` (`None` means the
//! caller supplied nothing) plus scalar options, and returns a freshly
//! allocated `String`. Absent text yields `""` for markup and a JSON sentinel
//! for regressions. Option strings are mapped onto the closed enums here, once.

use crate::domain::{LegendPos, ModelKind, ModelSpec, PlotOptions, PlotTarget, ScaleMode};
use crate::fit::{compare_models, fit_all_columns, fit_columns, fit_model};
use crate::io::{extract_xy, parse_table, to_csv};
use crate::plot::render_tikz;
use crate::report::{
    CellFormat, EMPTY_ARRAY, INVALID_OBJECT, column_fits_json, column_linear_summaries_json,
    comparison_json, linear_summary_json, regression_json, to_latex,
};

/// Column index from a caller integer; negative indices select no cells.
fn column(index: i32) -> usize {
    usize::try_from(index).unwrap_or(usize::MAX)
}

pub fn latex(input: Option<&str>) -> String {
    latex_with(input, CellFormat::Raw)
}

pub fn latex_rounded(input: Option<&str>, decimals: i32) -> String {
    latex_with(input, CellFormat::Decimals(decimals))
}

pub fn latex_sig_figs(input: Option<&str>, sig_figs: i32) -> String {
    latex_with(input, CellFormat::SigFigs(sig_figs))
}

pub fn latex_with(input: Option<&str>, format: CellFormat) -> String {
    input.map_or_else(String::new, |text| to_latex(&parse_table(text), format))
}

pub fn csv(input: Option<&str>) -> String {
    input.map_or_else(String::new, |text| to_csv(&parse_table(text)))
}

/// Figure reading `<filename>.csv`; empty when either text or filename is absent.
pub fn tikz(
    input: Option<&str>,
    filename: Option<&str>,
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
) -> String {
    let Some(filename) = filename else {
        return String::new();
    };
    plot(input, file_options(filename, sig_figs, legend_pos, scale, None))
}

/// Self-contained picture with embedded coordinates.
pub fn tikz_preview(
    input: Option<&str>,
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
) -> String {
    plot(input, inline_options(sig_figs, legend_pos, scale, None))
}

pub fn tikz_with_regression(
    input: Option<&str>,
    filename: Option<&str>,
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
    model: Option<&str>,
) -> String {
    let Some(filename) = filename else {
        return String::new();
    };
    let spec = ModelSpec::from_name(model);
    plot(input, file_options(filename, sig_figs, legend_pos, scale, Some(spec)))
}

pub fn tikz_with_regression_preview(
    input: Option<&str>,
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
    model: Option<&str>,
) -> String {
    let spec = ModelSpec::from_name(model);
    plot(input, inline_options(sig_figs, legend_pos, scale, Some(spec)))
}

fn plot(input: Option<&str>, options: PlotOptions) -> String {
    input.map_or_else(String::new, |text| render_tikz(&parse_table(text), &options))
}

fn file_options(
    filename: &str,
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
    regression: Option<ModelSpec>,
) -> PlotOptions {
    PlotOptions {
        target: PlotTarget::File(filename.to_string()),
        ..inline_options(sig_figs, legend_pos, scale, regression)
    }
}

fn inline_options(
    sig_figs: i32,
    legend_pos: Option<&str>,
    scale: Option<&str>,
    regression: Option<ModelSpec>,
) -> PlotOptions {
    PlotOptions {
        target: PlotTarget::Inline,
        sig_figs,
        legend_pos: LegendPos::from_name(legend_pos),
        scale: ScaleMode::from_name(scale),
        regression,
        ..PlotOptions::default()
    }
}

/// Single fit of `y_col` against `x_col` as a JSON object.
pub fn regression(input: Option<&str>, x_col: i32, y_col: i32, model: Option<&str>) -> String {
    let Some(text) = input else {
        return INVALID_OBJECT.to_string();
    };
    let table = parse_table(text);
    let fit = fit_columns(&table, column(x_col), column(y_col), ModelSpec::from_name(model));
    regression_json(&fit)
}

/// Every series column fitted against column 0, as a JSON array.
pub fn all_regressions(input: Option<&str>, model: Option<&str>) -> String {
    let Some(text) = input else {
        return EMPTY_ARRAY.to_string();
    };
    let fits = fit_all_columns(&parse_table(text), ModelSpec::from_name(model));
    column_fits_json(&fits)
}

/// All four models on one column pair, always four entries.
pub fn regression_comparison(input: Option<&str>, x_col: i32, y_col: i32) -> String {
    let Some(text) = input else {
        return EMPTY_ARRAY.to_string();
    };
    let (x, y) = extract_xy(&parse_table(text), column(x_col), column(y_col));
    comparison_json(&compare_models(&x, &y))
}

/// Linear fit in the `{"slope","intercept","r_squared","valid"}` shape.
pub fn linear_regression(input: Option<&str>, x_col: i32, y_col: i32) -> String {
    let Some(text) = input else {
        return INVALID_OBJECT.to_string();
    };
    let (x, y) = extract_xy(&parse_table(text), column(x_col), column(y_col));
    linear_summary_json(&fit_model(ModelKind::Linear, &x, &y))
}

/// Linear fits of every series column in the slope/intercept shape.
pub fn all_linear_regressions(input: Option<&str>) -> String {
    let Some(text) = input else {
        return EMPTY_ARRAY.to_string();
    };
    let fits = fit_all_columns(&parse_table(text), ModelSpec::Linear);
    column_linear_summaries_json(&fits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const DATA: &str = "x\ty\n1\t2\n2\t4\n3\t6\n";

    fn json(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn absent_input_sentinels() {
        assert_eq!(latex(None), "");
        assert_eq!(latex_rounded(None, 2), "");
        assert_eq!(latex_sig_figs(None, 2), "");
        assert_eq!(csv(None), "");
        assert_eq!(tikz(None, Some("data"), 3, None, None), "");
        assert_eq!(tikz(Some(DATA), None, 3, None, None), "");
        assert_eq!(tikz_preview(None, 3, None, None), "");
        assert_eq!(tikz_with_regression(Some(DATA), None, 3, None, None, None), "");
        assert_eq!(tikz_with_regression_preview(None, 3, None, None, None), "");
        assert_eq!(regression(None, 0, 1, None), r#"{"valid":false}"#);
        assert_eq!(all_regressions(None, None), "[]");
        assert_eq!(regression_comparison(None, 0, 1), "[]");
        assert_eq!(linear_regression(None, 0, 1), r#"{"valid":false}"#);
        assert_eq!(all_linear_regressions(None), "[]");
    }

    #[test]
    fn csv_and_latex_from_text() {
        assert_eq!(csv(Some(DATA)), "x,y\n1,2\n2,4\n3,6");
        assert!(latex_rounded(Some("1.005\t2.5"), 1).contains("1.0 & 2.5 \\\\"));
    }

    #[test]
    fn regression_defaults_to_auto() {
        let value = json(&regression(Some(DATA), 0, 1, None));
        assert_eq!(value["type"], "linear");
        assert_eq!(value["valid"], true);
        assert!((value["a"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_model_name_means_linear() {
        let value = json(&regression(Some(DATA), 0, 1, Some("spline")));
        assert_eq!(value["type"], "linear");
    }

    #[test]
    fn negative_columns_select_nothing() {
        let value = json(&regression(Some(DATA), -1, 1, Some("linear")));
        assert_eq!(value["valid"], false);
    }

    #[test]
    fn comparison_lists_every_model() {
        let value = json(&regression_comparison(Some("1,-1\n2,-2"), 0, 1));
        let kinds: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["linear", "exponential", "logarithmic", "power"]);
        assert_eq!(value[0]["valid"], true);
        assert_eq!(value[3]["valid"], false);
    }

    #[test]
    fn batch_regressions_tag_columns() {
        let input = "x,a,b\n1,1,3\n2,2,2\n3,3,1";
        let value = json(&all_regressions(Some(input), Some("linear")));
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["column"], 2);
        assert!((value[1]["a"].as_f64().unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn legacy_linear_shapes() {
        let value = json(&linear_regression(Some(DATA), 0, 1));
        assert!((value["slope"].as_f64().unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(value["valid"], true);

        let value = json(&all_linear_regressions(Some(DATA)));
        assert_eq!(value[0]["column"], 1);
        assert!(value[0].get("type").is_none());
    }

    #[test]
    fn tikz_variants_pick_target() {
        let file = tikz(Some(DATA), Some("measurements"), 3, Some("north east"), Some("linear"));
        assert!(file.contains("{measurements.csv};"));
        assert!(file.contains("legend pos=north east,"));

        let preview =
            tikz_with_regression_preview(Some(DATA), 2, None, Some("semilog"), Some("pow"));
        assert!(preview.contains("coordinates {"));
        assert!(preview.contains("ymode=log,"));
        assert!(preview.contains("\\addlegendentry{power ("));

        let overlay = tikz_with_regression(Some(DATA), Some("fits"), 3, None, None, Some("linear"));
        assert!(overlay.starts_with("\\begin{figure}[H]\n"));
        assert!(overlay.contains("[only marks, mark=*, draw] table [col sep=comma, x index=0, y index=1] {fits.csv};"));
        assert!(overlay.contains("\\addlegendentry{Data 1}"));
        assert!(overlay.contains("[no markers, domain=1:4, samples=100, dashed]"));
        assert!(overlay.contains("\\caption{Caption}"));
    }

    #[test]
    fn overflowing_cells_are_not_numeric() {
        let huge = "9".repeat(400);
        let input = format!("x,y\n{huge},1\n1,{huge}\n2,3");
        let value = json(&regression(Some(&input), 0, 1, Some("auto")));
        assert_eq!(value["valid"], false);
        assert!(!value.to_string().contains("NaN"));

        let table = latex_sig_figs(Some(&huge), 2);
        assert!(table.contains(&huge));
        assert!(!table.contains("NaN"));

        let preview = tikz_preview(Some(&input), 3, None, None);
        assert!(!preview.contains(&format!("({huge},")));
        assert!(preview.contains("(2,3)"));
    }
}
