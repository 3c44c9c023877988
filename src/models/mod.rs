//! Regression model definitions.
//!
//! Models are implemented as small, pure functions so that fitting and
//! rendering code can stay generic over `ModelKind`.

pub mod model;

pub use model::*;
