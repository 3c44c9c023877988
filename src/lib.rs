//! `tabtex` library crate.
//!
//! Converts pasted tabular text into a LaTeX `tabular`, CSV, and TikZ/pgfplots
//! figures with optional regression overlays. The binary (`tabtex`) and the C
//! ABI (`ffi`) are thin wrappers around this library so that:
//!
//! - core logic is testable without spawning processes
//! - every front end shares one text-in/text-out surface (`app::pipeline`)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ffi;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
