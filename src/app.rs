//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - reads the table from a file or stdin
//! - dispatches to the conversion/fit operations
//! - writes the result to a file or stdout

use std::io::{Read, Write};
use std::path::Path;

use clap::Parser;

use crate::cli::{Cli, Command, CompareArgs, FitArgs, LatexArgs, TikzArgs};
use crate::domain::{ColumnFit, PlotOptions, PlotTarget, Table};
use crate::error::AppError;
use crate::io::{parse_table, to_csv};
use crate::report::CellFormat;

pub mod pipeline;

/// Entry point for the `tabtex` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_deref())?;
    let table = parse_table(&text);

    let out = match cli.command {
        Command::Latex(args) => handle_latex(&table, &args),
        Command::Csv => to_csv(&table),
        Command::Tikz(args) => handle_tikz(&table, args),
        Command::Fit(args) => handle_fit(&table, &args),
        Command::Compare(args) => handle_compare(&table, &args),
    };

    write_output(cli.output.as_deref(), &out)
}

fn handle_latex(table: &Table, args: &LatexArgs) -> String {
    let format = match (args.decimals, args.sig_figs) {
        (Some(d), _) => CellFormat::Decimals(d),
        (None, Some(s)) => CellFormat::SigFigs(s),
        (None, None) => CellFormat::Raw,
    };
    crate::report::to_latex(table, format)
}

fn handle_tikz(table: &Table, args: TikzArgs) -> String {
    let target = match args.filename {
        Some(name) if !args.inline => PlotTarget::File(name),
        _ => PlotTarget::Inline,
    };
    let options = PlotOptions {
        target,
        sig_figs: args.sig_figs,
        legend_pos: args.legend_pos,
        scale: args.scale,
        x_label: args.x_label,
        y_label: args.y_label,
        regression: args.fit,
    };

    if let Some(spec) = options.regression {
        warn_invalid(&crate::fit::fit_all_columns(table, spec));
    }
    crate::plot::render_tikz(table, &options)
}

fn handle_fit(table: &Table, args: &FitArgs) -> String {
    let fits = match args.y_col {
        Some(y_col) => vec![ColumnFit {
            column: y_col,
            result: crate::fit::fit_columns(table, args.x_col, y_col, args.model),
        }],
        None => crate::fit::fit_all_columns(table, args.model),
    };
    warn_invalid(&fits);

    if args.json {
        match (args.y_col, fits.first()) {
            (Some(_), Some(fit)) => crate::report::regression_json(&fit.result),
            _ => crate::report::column_fits_json(&fits),
        }
    } else {
        crate::report::format_column_fits(&fits)
    }
}

fn handle_compare(table: &Table, args: &CompareArgs) -> String {
    let (x, y) = crate::io::extract_xy(table, args.x_col, args.y_col);
    let fits = crate::fit::compare_models(&x, &y);

    if args.json {
        crate::report::comparison_json(&fits)
    } else {
        let best = crate::fit::select_best(&fits);
        crate::report::format_comparison(&fits, &best)
    }
}

/// Columns that produced no usable fit go to stderr; the output still lists them.
fn warn_invalid(fits: &[ColumnFit]) {
    for f in fits.iter().filter(|f| !f.result.valid) {
        eprintln!(
            "warning: column {}: no valid {} fit (needs at least 2 points in the model's domain)",
            f.column,
            f.result.name()
        );
    }
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::io(format!("failed to read {}", path.display()), e)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| AppError::io("failed to read stdin", e))?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, out: &str) -> Result<(), AppError> {
    let mut body = out.to_string();
    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }

    match path {
        Some(path) => std::fs::write(path, body)
            .map_err(|e| AppError::io(format!("failed to write {}", path.display()), e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(body.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| AppError::io("failed to write stdout", e))
        }
    }
}
