//! Pasted-text ingest.
//!
//! This module turns text copied out of a spreadsheet, instrument log or CSV
//! file into a rectangular `Table`, and pulls numeric column pairs out of it.
//!
//! Design goals:
//! - **Per-line delimiter detection** (tab, else comma, else whitespace), so a
//!   paste that mixes sources still parses line by line
//! - **Never fail**: blank lines vanish, short rows are padded, non-numeric
//!   cells are simply skipped by the numeric extractors
//! - **Deterministic behavior**: identical text always yields an identical table

use crate::domain::Table;
use crate::math::parse_number;

/// Parse pasted text into a padded table of trimmed cells.
pub fn parse_table(input: &str) -> Table {
    let rows = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(split_line)
        .collect();

    Table::from_rows(rows)
}

/// Split one trimmed, non-empty line on its detected delimiter.
fn split_line(line: &str) -> Vec<String> {
    let cells: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Gather parallel `(x, y)` samples from two columns.
///
/// Rows where either cell is missing or non-numeric are skipped.
pub fn extract_xy(table: &Table, x_col: usize, y_col: usize) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(table.num_rows());
    let mut ys = Vec::with_capacity(table.num_rows());

    for row in table.rows() {
        let (Some(x), Some(y)) = (row.get(x_col), row.get(y_col)) else {
            continue;
        };
        if let (Some(x), Some(y)) = (parse_number(x), parse_number(y)) {
            xs.push(x);
            ys.push(y);
        }
    }

    (xs, ys)
}

/// Numeric values found in the given columns, in row-major order.
pub fn numeric_values(table: &Table, cols: std::ops::Range<usize>) -> Vec<f64> {
    table
        .rows()
        .iter()
        .flat_map(|row| row.get(cols.clone()).unwrap_or(&[]))
        .filter_map(|cell| parse_number(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_delimiter_per_line() {
        let table = parse_table("x\ty\n1,2\n3   4\n");
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.rows()[0], vec!["x", "y"]);
        assert_eq!(table.rows()[1], vec!["1", "2"]);
        assert_eq!(table.rows()[2], vec!["3", "4"]);
    }

    #[test]
    fn tab_wins_over_comma() {
        let table = parse_table("1,5\t2");
        assert_eq!(table.rows()[0], vec!["1,5", "2"]);
    }

    #[test]
    fn pads_short_rows_and_drops_blank_lines() {
        let table = parse_table("a,b\n\n   \n1,2,3\r\n");
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows()[0], vec!["a", "b", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn trims_cells() {
        let table = parse_table(" a , b ,\t");
        assert_eq!(table.rows()[0], vec!["a", "b", ""]);
    }

    #[test]
    fn empty_input_is_empty_table() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("\n \n\t\n").is_empty());
    }

    #[test]
    fn extract_skips_non_numeric_and_short_rows() {
        let table = parse_table("x,y\n1,2\n2,n/a\n3,6\n4");
        let (xs, ys) = extract_xy(&table, 0, 1);
        assert_eq!(xs, vec![1.0, 3.0]);
        assert_eq!(ys, vec![2.0, 6.0]);

        let (xs, ys) = extract_xy(&table, 0, 7);
        assert!(xs.is_empty() && ys.is_empty());
    }

    #[test]
    fn numeric_values_scans_column_range() {
        let table = parse_table("t,a,b\n0,1,x\n1,-2,3");
        assert_eq!(numeric_values(&table, 0..1), vec![0.0, 1.0]);
        assert_eq!(numeric_values(&table, 1..3), vec![1.0, -2.0, 3.0]);
    }
}
