//! Regression orchestration.
//!
//! Responsibilities:
//!
//! - fit a single model on domain-filtered, linearized samples
//! - compare all four models and auto-select by R²
//! - fit table columns (single pair or every series against column 0)

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
