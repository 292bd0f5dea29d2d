//! GitHub-flavored Markdown table

use crate::explorer::error::ExplorerError;
use crate::explorer::table::{ResultTable, VersionCheck};
use crate::render::{TableRenderer, column_widths, headers, text_cells};

/// Renders a Markdown pipe table; rejected versions are struck through
pub struct MarkupRenderer;

impl TableRenderer for MarkupRenderer {
    fn render(&self, table: &ResultTable) -> Result<String, ExplorerError> {
        let header = headers();
        let rows = text_cells(table, strike_rejected);
        let widths = column_widths(&header, &rows);

        let mut output = line(&header, &widths);
        output.push_str(&line(&widths.map(|width| "-".repeat(width.max(3))), &widths));
        for row in &rows {
            output.push_str(&line(row, &widths));
        }
        Ok(output)
    }
}

fn strike_rejected(check: &VersionCheck) -> String {
    if check.is_valid {
        check.version.clone()
    } else {
        format!("~~{}~~", check.version)
    }
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |\n", cells.join(" | "))
}
