//! Plain-text table rendering.
//!
//! Columns are left-aligned, padded to the widest cell (header included) and
//! separated by `" | "`. Widths are measured in terminal columns, so wide
//! and combining characters line up.

use crate::model::{Field, Record};
use unicode_width::UnicodeWidthStr;

const COLUMN_SEPARATOR: &str = " | ";

/// Renders records under the six field headers.
pub fn render(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| r.values().iter().map(|v| v.to_string()).collect())
        .collect();
    render_rows(&Field::headers(), &rows)
}

/// Like [`render`], with a leading `#` column numbering rows from 1.
pub fn render_numbered(records: &[Record]) -> String {
    let mut headers = vec!["#"];
    headers.extend(Field::headers());

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut row = vec![(i + 1).to_string()];
            row.extend(r.values().iter().map(|v| v.to_string()));
            row
        })
        .collect();
    render_rows(&headers, &rows)
}

/// Per-column width: the widest of the header and every cell beneath it.
pub fn column_widths<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.as_ref().width())
                .fold(header.width(), usize::max)
        })
        .collect()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(col, width)| pad(cells.get(col).map(|c| c.as_ref()).unwrap_or(""), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let header_line = format_line(headers, &widths);
    let separator = "-".repeat(header_line.width());

    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}
