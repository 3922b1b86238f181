//! Tabular rendering of query results.

use crate::core::domain::Table;

/// Shown instead of the password unless `--show` is passed.
const MASK: &str = "******";

/// Render `table` as aligned, space-separated columns.
///
/// Every column is as wide as its longest cell; the last column is not
/// padded.
pub fn render(table: &Table, show: bool, header: bool) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);
    if header {
        lines.push(table.header().iter().map(|h| h.to_string()).collect());
    }
    for row in table.rows() {
        let mut cells = row.cells().to_vec();
        if !show {
            cells[3] = MASK.to_string();
        }
        lines.push(cells);
    }

    let columns = table.header().len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            lines
                .iter()
                .map(|l| l[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &lines {
        let mut text = String::new();
        for (c, cell) in line.iter().enumerate() {
            if c + 1 == columns {
                text.push_str(cell);
            } else {
                let pad = widths[c] - cell.chars().count();
                text.push_str(cell);
                text.push_str(&" ".repeat(pad + 2));
            }
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

/// JSON array of rows; passwords are masked unless `show`.
pub fn render_json(table: &Table, show: bool) -> serde_json::Result<String> {
    let rows: Vec<_> = table
        .rows()
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "category": r.category,
                "account": r.account,
                "password": if show { r.password.as_str() } else { MASK },
                "created_at": r.created_at,
                "last_updated_at": r.last_updated_at,
            })
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
