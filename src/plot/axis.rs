//! Axis bounds and tick derivation for pgfplots output.
//!
//! Bounds are always integers and always expand outward from the data:
//! `min = floor(lo)`, `max = floor(hi) + 1`. Ticks step by a fifth of the span
//! (integer division, at least 1), so an axis carries at most about ten labels.

use crate::domain::Table;
use crate::io::ingest::numeric_values;

/// Number of intervals the tick step aims for.
const TICK_INTERVALS: i64 = 5;

/// Integral axis range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i64,
    pub max: i64,
}

impl AxisRange {
    /// Range enclosing `values`; `[0, 1]` when there are none.
    pub fn enclosing(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::from_extent(0.0, 0.0);
        }
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::from_extent(lo, hi)
    }

    /// Range for a known data extent.
    pub fn from_extent(lo: f64, hi: f64) -> Self {
        Self {
            min: lo.floor() as i64,
            max: (hi.floor() as i64).saturating_add(1),
        }
    }

    pub fn tick_step(&self) -> i64 {
        (self.max.saturating_sub(self.min) / TICK_INTERVALS).max(1)
    }

    /// Tick positions from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<i64> {
        let step = self.tick_step();
        let mut ticks = Vec::new();
        let mut t = self.min;
        while t <= self.max {
            ticks.push(t);
            match t.checked_add(step) {
                Some(next) => t = next,
                None => break,
            }
        }
        ticks
    }

    /// Comma-separated tick list for `xtick={...}`.
    pub fn tick_list(&self) -> String {
        self.ticks()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Axis ranges derived from a table: column 0 is x, all other columns are y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotBounds {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotBounds {
    pub fn from_table(table: &Table) -> Self {
        let width = table.num_cols();
        Self {
            x: AxisRange::enclosing(&numeric_values(table, 0..width.min(1))),
            y: AxisRange::enclosing(&numeric_values(table, width.min(1)..width)),
        }
    }
}
