//! Command-line parsing for the `tabtex` converter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! conversion code. Presentation defaults may come from the environment (or a
//! `.env` file loaded before parsing) via the `TABTEX_*` variables.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{LegendPos, ModelSpec, ScaleMode};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "tabtex",
    version,
    about = "Convert pasted tabular text to LaTeX tables, CSV and pgfplots figures"
)]
pub struct Cli {
    /// Read the table from FILE instead of stdin.
    #[arg(short = 'i', long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result to FILE instead of stdout.
    #[arg(short = 'o', long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a LaTeX `tabular`.
    Latex(LatexArgs),
    /// Normalize the table to comma-separated values.
    Csv,
    /// Render a TikZ/pgfplots figure, optionally with fitted curves.
    Tikz(TikzArgs),
    /// Fit one model (or auto-select) to a column pair or to every series.
    Fit(FitArgs),
    /// Fit all four models to one column pair and show which one wins.
    Compare(CompareArgs),
}

#[derive(Debug, Args, Clone)]
pub struct LatexArgs {
    /// Round numeric cells to N decimal places.
    #[arg(long, value_name = "N", conflicts_with = "sig_figs", allow_negative_numbers = true)]
    pub decimals: Option<i32>,

    /// Round numeric cells to N significant figures.
    #[arg(long, value_name = "N")]
    pub sig_figs: Option<i32>,
}

#[derive(Debug, Args, Clone)]
pub struct TikzArgs {
    /// Base name of the CSV file the figure reads (`NAME.csv`).
    ///
    /// Without it the coordinates are embedded in a standalone picture.
    #[arg(long, value_name = "NAME", env = "TABTEX_FILENAME")]
    pub filename: Option<String>,

    /// Embed the coordinates even when a filename is configured.
    #[arg(long)]
    pub inline: bool,

    /// Tick-label precision.
    #[arg(long, default_value_t = 3, env = "TABTEX_SIG_FIGS")]
    pub sig_figs: i32,

    #[arg(long, value_enum, default_value_t = LegendPos::NorthWest, env = "TABTEX_LEGEND_POS")]
    pub legend_pos: LegendPos,

    #[arg(long, value_enum, default_value_t = ScaleMode::Linear, env = "TABTEX_SCALE")]
    pub scale: ScaleMode,

    #[arg(long, default_value = "x", env = "TABTEX_X_LABEL")]
    pub x_label: String,

    #[arg(long, default_value = "y", env = "TABTEX_Y_LABEL")]
    pub y_label: String,

    /// Overlay a fitted curve per series.
    #[arg(long, value_enum, value_name = "MODEL")]
    pub fit: Option<ModelSpec>,
}

#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Column holding the independent variable (0-based).
    #[arg(long, default_value_t = 0)]
    pub x_col: usize,

    /// Column to fit; omit to fit every series column against column 0.
    #[arg(long)]
    pub y_col: Option<usize>,

    #[arg(long, value_enum, default_value_t = ModelSpec::Auto, env = "TABTEX_MODEL")]
    pub model: ModelSpec,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[arg(long, default_value_t = 0)]
    pub x_col: usize,

    #[arg(long, default_value_t = 1)]
    pub y_col: usize,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
