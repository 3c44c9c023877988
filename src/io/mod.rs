//! Input/output helpers.
//!
//! - pasted-text ingest + column extraction (`ingest`)
//! - CSV export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
