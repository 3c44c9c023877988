//! TikZ/pgfplots graph rendering.

pub mod axis;
pub mod tikz;

pub use axis::*;
pub use tikz::*;
