//! Export a parsed table as CSV.
//!
//! The output is meant to be saved next to the TikZ figure (which reads it with
//! `col sep=comma`) or pasted into spreadsheets. Cells are quoted only when
//! they would otherwise break the row structure; plain numeric cells are always
//! emitted verbatim.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::Table;

/// Render a table as CSV: `,` between cells, `\n` between rows, no trailing newline.
pub fn to_csv(table: &Table) -> String {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in table.rows() {
        // Writing into a `Vec` cannot fail.
        if writer.write_record(row).is_err() {
            return String::new();
        }
    }

    let bytes = writer.into_inner().unwrap_or_default();
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
