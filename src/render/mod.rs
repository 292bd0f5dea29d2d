//! Rendering of result tables
//!
//! - plain.rs: aligned text grid, `+`/`-` marks accepted/rejected versions
//! - markup.rs: GitHub-flavored Markdown table
//! - html.rs: `<table>` with proportional column spans

pub mod html;
pub mod markup;
pub mod plain;

pub use html::HtmlRenderer;
pub use markup::MarkupRenderer;
pub use plain::PlainRenderer;

use serde::Deserialize;

use crate::explorer::error::ExplorerError;
use crate::explorer::table::{PhaseBucket, ResultTable, VersionCheck};

/// Output dialect of a rendered table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Plain,
    Markup,
    Html,
    Json,
}

/// Trait for turning a non-empty table into text
pub trait TableRenderer {
    fn render(&self, table: &ResultTable) -> Result<String, ExplorerError>;
}

struct JsonRenderer;

impl TableRenderer for JsonRenderer {
    fn render(&self, table: &ResultTable) -> Result<String, ExplorerError> {
        Ok(serde_json::to_string_pretty(table)?)
    }
}

/// Render a table in the given format
///
/// An empty table renders as the empty string in every format.
pub fn render(table: &ResultTable, format: TableFormat) -> Result<String, ExplorerError> {
    if table.is_empty() {
        return Ok(String::new());
    }

    let renderer: &dyn TableRenderer = match format {
        TableFormat::Plain => &PlainRenderer,
        TableFormat::Markup => &MarkupRenderer,
        TableFormat::Html => &HtmlRenderer,
        TableFormat::Json => &JsonRenderer,
    };
    renderer.render(table)
}

/// Header cells in column order
fn headers() -> [String; 4] {
    PhaseBucket::ALL.map(|phase| phase.as_str().to_string())
}

/// One text cell per phase, each check formatted by `item`
fn text_cells(table: &ResultTable, item: impl Fn(&VersionCheck) -> String) -> Vec<[String; 4]> {
    table
        .rows
        .iter()
        .map(|row| {
            PhaseBucket::ALL.map(|phase| {
                row.bucket(phase)
                    .iter()
                    .map(&item)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
        })
        .collect()
}

/// Width of each column, header included
fn column_widths(header: &[String; 4], rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = header.each_ref().map(|cell| cell.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TableFormat::Plain)]
    #[case(TableFormat::Markup)]
    #[case(TableFormat::Html)]
    #[case(TableFormat::Json)]
    fn render_empty_table_returns_empty_string(#[case] format: TableFormat) {
        assert_eq!(render(&ResultTable::default(), format).unwrap(), "");
    }

    #[test]
    fn table_format_deserializes_lowercase_names() {
        let format: TableFormat = serde_json::from_str("\"markup\"").unwrap();
        assert_eq!(format, TableFormat::Markup);
    }

    #[test]
    fn column_widths_covers_header_and_cells() {
        let rows = vec![[
            "a".to_string(),
            "longer cell".to_string(),
            String::new(),
            "é".to_string(),
        ]];

        assert_eq!(column_widths(&headers(), &rows), [3, 11, 5, 4]);
    }
}
