//! Mathematical utilities: numeric cell handling and least squares.

pub mod numeric;
pub mod ols;

pub use numeric::*;
pub use ols::*;
