//! Rendering of tables and fits as text artifacts.
//!
//! - LaTeX `tabular` blocks (`latex`)
//! - JSON fit results for programmatic callers (`json`)
//! - aligned terminal summaries for the CLI (`format`)

pub mod format;
pub mod json;
pub mod latex;

pub use format::*;
pub use json::*;
pub use latex::*;
