//! Shared domain types.
//!
//! Everything here is created fresh per request and never mutated after
//! construction. Option enums are closed: caller-supplied strings are mapped
//! onto them once (`from_name`) and unknown values fall back to a default
//! instead of failing.

use clap::ValueEnum;
use serde::Serialize;

/// Rectangular grid of trimmed text cells.
///
/// Rows are padded with empty cells to the widest row, so every row has
/// exactly `num_cols()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw rows, right-padding ragged rows with `""`.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Concrete regression model.
///
/// `ALL` fixes the evaluation order used by auto-selection and comparisons;
/// the order also breaks exact R² ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Exponential,
    Logarithmic,
    Power,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Linear,
        ModelKind::Exponential,
        ModelKind::Logarithmic,
        ModelKind::Power,
    ];

    /// Wire name, as used in JSON and legend text.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Exponential => "exponential",
            ModelKind::Logarithmic => "logarithmic",
            ModelKind::Power => "power",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Exponential => "Exponential",
            ModelKind::Logarithmic => "Logarithmic",
            ModelKind::Power => "Power",
        }
    }

    /// Model form, for help text and summaries.
    pub fn formula(self) -> &'static str {
        match self {
            ModelKind::Linear => "y = a*x + b",
            ModelKind::Exponential => "y = a*exp(b*x)",
            ModelKind::Logarithmic => "y = a*ln(x) + b",
            ModelKind::Power => "y = a*x^b",
        }
    }
}

/// Which model(s) to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModelSpec {
    Linear,
    #[value(alias = "exp")]
    Exponential,
    #[value(alias = "log")]
    Logarithmic,
    #[value(alias = "pow")]
    Power,
    /// Fit every model and keep the one with the highest R².
    #[default]
    Auto,
}

impl ModelSpec {
    /// Map a caller string onto a spec.
    ///
    /// Unrecognized names select `Linear`; callers pass `None` for "absent",
    /// which selects `Auto`.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return ModelSpec::Auto;
        };
        match name.trim() {
            "linear" => ModelSpec::Linear,
            "exponential" | "exp" => ModelSpec::Exponential,
            "logarithmic" | "log" => ModelSpec::Logarithmic,
            "power" | "pow" => ModelSpec::Power,
            "auto" => ModelSpec::Auto,
            _ => ModelSpec::Linear,
        }
    }

    /// The single model requested, or `None` for `Auto`.
    pub fn to_kind(self) -> Option<ModelKind> {
        match self {
            ModelSpec::Linear => Some(ModelKind::Linear),
            ModelSpec::Exponential => Some(ModelKind::Exponential),
            ModelSpec::Logarithmic => Some(ModelKind::Logarithmic),
            ModelSpec::Power => Some(ModelKind::Power),
            ModelSpec::Auto => None,
        }
    }
}

/// Axis scaling of the rendered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScaleMode {
    #[default]
    Linear,
    /// Logarithmic y axis only.
    Semilog,
    /// Logarithmic x and y axes.
    Loglog,
}

impl ScaleMode {
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("semilog") => ScaleMode::Semilog,
            Some("loglog") => ScaleMode::Loglog,
            _ => ScaleMode::Linear,
        }
    }

    pub fn log_x(self) -> bool {
        matches!(self, ScaleMode::Loglog)
    }

    pub fn log_y(self) -> bool {
        matches!(self, ScaleMode::Semilog | ScaleMode::Loglog)
    }
}

/// Legend placement inside the axis box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LegendPos {
    #[default]
    #[value(alias = "north west")]
    NorthWest,
    #[value(alias = "north east")]
    NorthEast,
    #[value(alias = "south west")]
    SouthWest,
    #[value(alias = "south east")]
    SouthEast,
}

impl LegendPos {
    /// Accepts `north west`, `north-west` and `northwest` in any case.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return LegendPos::NorthWest;
        };
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "northeast" => LegendPos::NorthEast,
            "southwest" => LegendPos::SouthWest,
            "southeast" => LegendPos::SouthEast,
            _ => LegendPos::NorthWest,
        }
    }

    /// pgfplots `legend pos` value.
    pub fn pgf_name(self) -> &'static str {
        match self {
            LegendPos::NorthWest => "north west",
            LegendPos::NorthEast => "north east",
            LegendPos::SouthWest => "south west",
            LegendPos::SouthEast => "south east",
        }
    }
}

/// Outcome of fitting one model to one pair of columns.
///
/// When `valid` is false the coefficients are zero and `r_squared` is either
/// zero or the auto-selection sentinel `-1`; none of them may be plotted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    #[serde(rename = "type")]
    pub kind: ModelKind,
    pub a: f64,
    pub b: f64,
    pub r_squared: f64,
    pub equation: String,
    pub valid: bool,
    /// Domain-valid samples that went into the fit.
    #[serde(skip)]
    pub points: usize,
}

impl RegressionResult {
    /// Structurally complete result for a fit that could not be computed.
    pub fn invalid(kind: ModelKind) -> Self {
        Self {
            kind,
            a: 0.0,
            b: 0.0,
            r_squared: 0.0,
            equation: String::new(),
            valid: false,
            points: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// A regression result tagged with the series column it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFit {
    pub column: usize,
    #[serde(flatten)]
    pub result: RegressionResult,
}

/// Where the plotted series data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotTarget {
    /// Reference `<filename>.csv` (written separately by the CSV renderer).
    File(String),
    /// Embed the coordinates directly (self-contained preview).
    Inline,
}

/// Presentation options for the TikZ/pgfplots renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub target: PlotTarget,
    /// Tick-label precision; values below 1 fall back to 3.
    pub sig_figs: i32,
    pub legend_pos: LegendPos,
    pub scale: ScaleMode,
    pub x_label: String,
    pub y_label: String,
    /// Overlay a fitted curve per series.
    pub regression: Option<ModelSpec>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            target: PlotTarget::Inline,
            sig_figs: 3,
            legend_pos: LegendPos::default(),
            scale: ScaleMode::default(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            regression: None,
        }
    }
}
