//! TikZ/pgfplots figure rendering.
//!
//! Column 0 of the table is the independent variable; every other column is a
//! series. Two flavors share one writer:
//! - `PlotTarget::File`: a `figure` environment whose series read
//!   `<filename>.csv`, for pasting into a document next to the exported CSV
//! - `PlotTarget::Inline`: a bare `tikzpicture` with the coordinates embedded,
//!   compilable on its own (used for previews)
//!
//! With `PlotOptions::regression` set, each series is drawn as markers only and
//! followed by its fitted curve when the fit is valid.

use crate::domain::{ModelSpec, PlotOptions, PlotTarget, RegressionResult, Table};
use crate::fit::fit_columns;
use crate::math::is_number;
use crate::models::pgf_expression;
use crate::plot::axis::PlotBounds;

/// Tick-label precision used when the caller passes less than 1.
pub const DEFAULT_SIG_FIGS: i32 = 3;

/// Left edge of the fitted-curve domain; keeps `ln(x)` and `x^b` defined.
const MIN_CURVE_X: f64 = 0.01;

/// Samples pgfplots evaluates along a fitted curve.
const CURVE_SAMPLES: usize = 100;

/// Render a pgfplots figure for `table`.
///
/// Returns an empty string when there is no x column plus at least one series.
pub fn render_tikz(table: &Table, options: &PlotOptions) -> String {
    if table.is_empty() || table.num_cols() < 2 {
        return String::new();
    }

    let sig_figs = if options.sig_figs < 1 {
        DEFAULT_SIG_FIGS
    } else {
        options.sig_figs
    };
    let bounds = PlotBounds::from_table(table);

    let mut m = match options.target {
        PlotTarget::File(_) => Markup::new("    ", 1),
        PlotTarget::Inline => Markup::new("  ", 0),
    };

    if matches!(options.target, PlotTarget::File(_)) {
        m.raw("\\begin{figure}[H]");
        m.line(0, "\\centering");
    }

    m.line(0, "\\begin{tikzpicture}");
    m.line(1, "\\begin{axis}[");
    for opt in axis_options(options, sig_figs, &bounds) {
        m.line(2, &opt);
    }
    m.line(1, "]");

    for col in 1..table.num_cols() {
        match options.regression {
            None => {
                write_series(&mut m, table, col, &options.target, "smooth, mark=*, draw");
                m.line(2, &format!("\\addlegendentry{{Series {col}}}"));
            }
            Some(spec) => write_fitted_series(&mut m, table, col, options, spec, sig_figs, &bounds),
        }
    }

    m.line(1, "\\end{axis}");
    m.line(0, "\\end{tikzpicture}");

    if matches!(options.target, PlotTarget::File(_)) {
        m.line(0, "\\caption{Caption}");
        m.line(0, "\\label{fig:label}");
        m.raw("\\end{figure}");
    }

    m.finish()
}

fn axis_options(options: &PlotOptions, sig_figs: i32, bounds: &PlotBounds) -> Vec<String> {
    let mut opts = vec![
        "width=0.8\\textwidth,".to_string(),
        "height=0.6\\textwidth,".to_string(),
        "minor tick num=1,".to_string(),
        "tick style={major tick length=5pt, minor tick length=3pt, tick pos=both, color=black, line width=0.5pt},"
            .to_string(),
        "tick align=inside,".to_string(),
        "xmajorgrids=false,".to_string(),
        "ymajorgrids=false,".to_string(),
        "xminorgrids=false,".to_string(),
        "yminorgrids=false,".to_string(),
        "axis line style={-},".to_string(),
        "scaled ticks=false,".to_string(),
        format!("xticklabel style={{/pgf/number format/fixed, /pgf/number format/precision={sig_figs}}},"),
        format!("yticklabel style={{/pgf/number format/fixed, /pgf/number format/precision={sig_figs}}},"),
        "legend cell align={left},".to_string(),
        format!("legend pos={},", options.legend_pos.pgf_name()),
    ];

    if options.scale.log_x() {
        opts.push("xmode=log,".to_string());
    }
    if options.scale.log_y() {
        opts.push("ymode=log,".to_string());
    }

    opts.push(format!("xlabel={{{}}},", options.x_label));
    opts.push(format!("ylabel={{{}}},", options.y_label));
    opts.push(format!("xmin={}, xmax={},", bounds.x.min, bounds.x.max));
    opts.push(format!("ymin={}, ymax={},", bounds.y.min, bounds.y.max));
    opts.push(format!("xtick={{{}}},", bounds.x.tick_list()));
    opts.push(format!("ytick={{{}}}", bounds.y.tick_list()));

    opts
}

/// One `\addplot` for the raw data of column `col`.
fn write_series(m: &mut Markup, table: &Table, col: usize, target: &PlotTarget, style: &str) {
    match target {
        PlotTarget::File(filename) => {
            m.line(
                2,
                &format!(
                    "\\addplot [{style}] table [col sep=comma, x index=0, y index={col}] {{{filename}.csv}};"
                ),
            );
        }
        PlotTarget::Inline => {
            m.line(2, &format!("\\addplot [{style}] coordinates {{"));
            for (x, y) in coordinates(table, col) {
                m.line(3, &format!("({x},{y})"));
            }
            m.line(2, "};");
        }
    }
}

fn write_fitted_series(
    m: &mut Markup,
    table: &Table,
    col: usize,
    options: &PlotOptions,
    spec: ModelSpec,
    sig_figs: i32,
    bounds: &PlotBounds,
) {
    write_series(m, table, col, &options.target, "only marks, mark=*, draw");
    m.line(2, &format!("\\addlegendentry{{Data {col}}}"));

    let fit = fit_columns(table, 0, col, spec);
    if !fit.valid {
        return;
    }

    let lo = MIN_CURVE_X.max(bounds.x.min as f64);
    let hi = bounds.x.max;
    m.line(
        2,
        &format!(
            "\\addplot [no markers, domain={lo}:{hi}, samples={CURVE_SAMPLES}, dashed] {{{}}};",
            pgf_expression(fit.kind, fit.a, fit.b)
        ),
    );
    m.line(2, &format!("\\addlegendentry{{{}}}", fit_legend(&fit, sig_figs)));
}

/// Legend text: model name, equation and R².
fn fit_legend(fit: &RegressionResult, sig_figs: i32) -> String {
    format!(
        "{} (${}$, $R^2={:.prec$}$)",
        fit.name(),
        fit.equation,
        fit.r_squared,
        prec = sig_figs.max(0) as usize
    )
}

/// Raw cell text of rows where both the x cell and the series cell are numeric.
fn coordinates(table: &Table, col: usize) -> Vec<(&str, &str)> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let x = row.first()?;
            let y = row.get(col)?;
            (is_number(x) && is_number(y)).then_some((x.as_str(), y.as_str()))
        })
        .collect()
}

/// Indented line writer.
struct Markup {
    out: String,
    indent: &'static str,
    base: usize,
}

impl Markup {
    fn new(indent: &'static str, base: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            base,
        }
    }

    /// Write a line at `depth` levels below the picture's own level.
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..self.base + depth {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Write a line with no indentation.
    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}
