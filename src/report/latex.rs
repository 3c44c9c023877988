//! LaTeX `tabular` rendering.

use crate::domain::Table;
use crate::math::{round_number, round_significant_figures};

/// How each cell's text is prepared before escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    /// Cells as parsed.
    #[default]
    Raw,
    /// Numeric cells rounded to a fixed number of fractional digits.
    Decimals(i32),
    /// Numeric cells rounded to significant figures.
    SigFigs(i32),
}

impl CellFormat {
    fn apply(self, cell: &str) -> String {
        match self {
            CellFormat::Raw => cell.to_string(),
            CellFormat::Decimals(d) => round_number(cell, d),
            CellFormat::SigFigs(s) => round_significant_figures(cell, s),
        }
    }
}

/// Render a centered `tabular` with a rule above and below all rows.
///
/// Returns an empty string for an empty table.
pub fn to_latex(table: &Table, format: CellFormat) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(table.num_rows() + 4);
    lines.push(format!("\\begin{{tabular}}{{{}}}", "c".repeat(table.num_cols())));
    lines.push("\\hline".to_string());
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|c| escape(&format.apply(c))).collect();
        lines.push(format!("{} \\\\", cells.join(" & ")));
    }
    lines.push("\\hline".to_string());
    lines.push("\\end{tabular}".to_string());

    lines.join("\n")
}

/// Escape the characters LaTeX treats specially in text mode.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '&' | '%' | '$' | '#' | '_' | '{' | '}') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::parse_table;

    #[test]
    fn renders_raw_table() {
        let table = parse_table("x,y\n1.25,2");
        let expected = concat!(
            "\\begin{tabular}{cc}\n",
            "\\hline\n",
            "x & y \\\\\n",
            "1.25 & 2 \\\\\n",
            "\\hline\n",
            "\\end{tabular}",
        );
        assert_eq!(to_latex(&table, CellFormat::Raw), expected);
    }

    #[test]
    fn rounds_then_escapes() {
        let table = parse_table("rate_%\t3.14159\n");
        let out = to_latex(&table, CellFormat::Decimals(2));
        assert!(out.contains("rate\\_\\% & 3.14 \\\\"));

        let out = to_latex(&table, CellFormat::SigFigs(1));
        assert!(out.contains("rate\\_\\% & 3 \\\\"));
    }

    #[test]
    fn escapes_all_specials() {
        assert_eq!(escape("a&b%c$d#e_f{g}"), "a\\&b\\%c\\$d\\#e\\_f\\{g\\}");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(to_latex(&parse_table("\n\n"), CellFormat::Raw), "");
    }

    #[test]
    fn column_spec_matches_padded_width() {
        let out = to_latex(&parse_table("a\n1 2 3"), CellFormat::Raw);
        assert!(out.starts_with("\\begin{tabular}{ccc}\n"));
        assert!(out.contains("a &  &  \\\\"));
    }
}
