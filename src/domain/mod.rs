//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed `Table`
//! - option enums (`ModelKind`, `ModelSpec`, `ScaleMode`, `LegendPos`)
//! - fit outputs (`RegressionResult`, `ColumnFit`)
//! - plot presentation options (`PlotOptions`, `PlotTarget`)

pub mod types;

pub use types::*;
