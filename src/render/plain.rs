//! Plain text grid

use crate::explorer::error::ExplorerError;
use crate::explorer::table::{ResultTable, VersionCheck};
use crate::render::{TableRenderer, column_widths, headers, text_cells};

/// Renders an aligned text grid with `dev | pre | final | post` columns
///
/// Accepted versions are prefixed with `+`, rejected ones with `-`.
pub struct PlainRenderer;

impl TableRenderer for PlainRenderer {
    fn render(&self, table: &ResultTable) -> Result<String, ExplorerError> {
        let header = headers();
        let rows = text_cells(table, mark);
        let widths = column_widths(&header, &rows);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(line(&header, &widths));
        lines.push(
            widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(rows.iter().map(|row| line(row, &widths)));

        Ok(lines.join("\n") + "\n")
    }
}

fn mark(check: &VersionCheck) -> String {
    let sign = if check.is_valid { '+' } else { '-' };
    format!("{sign}{}", check.version)
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
