//! HTML table with proportional column spans
//!
//! Each phase column spans the least common multiple of the number of
//! versions any row holds in that phase, capped at the largest `colspan`
//! browsers honor. Every row splits that width between its own versions,
//! handing any remainder to its first cells.

use crate::explorer::error::ExplorerError;
use crate::explorer::table::{PhaseBucket, ResultTable, Row};
use crate::render::TableRenderer;

/// Largest `colspan` allowed by HTML
pub const MAX_COLSPAN: u64 = 1000;

pub struct HtmlRenderer;

impl TableRenderer for HtmlRenderer {
    fn render(&self, table: &ResultTable) -> Result<String, ExplorerError> {
        let spans = PhaseBucket::ALL.map(|phase| phase_span(table, phase));

        let mut html = String::from("<table>\n<thead>\n<tr>");
        for (phase, span) in PhaseBucket::ALL.iter().zip(spans) {
            html.push_str(&format!(
                "<th colspan=\"{span}\">{}</th>",
                phase.as_str()
            ));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &table.rows {
            html.push_str(&render_row(row, &spans));
        }

        html.push_str("</tbody>\n</table>\n");
        Ok(html)
    }
}

fn render_row(row: &Row, spans: &[u64; 4]) -> String {
    let mut html = String::from("<tr>");
    for (phase, &span) in PhaseBucket::ALL.iter().zip(spans) {
        let checks = row.bucket(*phase);
        if checks.is_empty() {
            html.push_str(&format!("<td colspan=\"{span}\"></td>"));
            continue;
        }

        for (check, cell_span) in checks.iter().zip(cell_spans(span, checks.len() as u64)) {
            let class = if check.is_valid { "valid" } else { "invalid" };
            html.push_str(&format!(
                "<td colspan=\"{cell_span}\" class=\"{class}\">{}</td>",
                check.version
            ));
        }
    }
    html.push_str("</tr>\n");
    html
}

/// Total span of one phase column, at most [`MAX_COLSPAN`]
fn phase_span(table: &ResultTable, phase: PhaseBucket) -> u64 {
    table
        .rows
        .iter()
        .map(|row| row.bucket(phase).len() as u64)
        .filter(|&count| count > 0)
        .fold(1, capped_lcm)
}

/// Spans of `count` cells sharing `span` columns
///
/// The first `span % count` cells get one extra column. A cell never spans
/// less than one column, so more cells than columns overflow the header.
fn cell_spans(span: u64, count: u64) -> impl Iterator<Item = u64> {
    let share = span / count;
    let extra = span % count;
    (0..count).map(move |i| (share + u64::from(i < extra)).max(1))
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn capped_lcm(a: u64, b: u64) -> u64 {
    (a / gcd(a, b))
        .checked_mul(b)
        .map_or(MAX_COLSPAN, |lcm| lcm.min(MAX_COLSPAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::render_candidate_table;
    use crate::render::TableFormat;
    use pep508_rs::pep440_rs::Version;
    use regex::Regex;
    use rstest::rstest;
    use std::str::FromStr;

    fn table(versions: &[(&str, bool)]) -> ResultTable {
        ResultTable::from_checks(
            versions
                .iter()
                .map(|(v, valid)| (Version::from_str(v).unwrap(), *valid)),
        )
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(2, 3, 6)]
    #[case(4, 6, 12)]
    #[case(9, 3, 9)]
    #[case(840, 9, 1000)]
    #[case(1000, 7, 1000)]
    #[case(u64::MAX, 2, 1000)]
    fn capped_lcm_returns_expected(#[case] a: u64, #[case] b: u64, #[case] expected: u64) {
        assert_eq!(capped_lcm(a, b), expected);
    }

    #[rstest]
    #[case(6, 3, vec![2, 2, 2])]
    #[case(1000, 3, vec![334, 333, 333])]
    #[case(1000, 7, vec![143, 143, 143, 143, 143, 143, 142])]
    #[case(2, 3, vec![1, 1, 1])]
    fn cell_spans_share_the_phase_width(
        #[case] span: u64,
        #[case] count: u64,
        #[case] expected: Vec<u64>,
    ) {
        assert_eq!(cell_spans(span, count).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(21)]
    #[case(60)]
    fn render_keeps_colspans_within_html_limit(#[case] clause_count: u64) {
        // Rows end up with many different pre-release counts
        let specifiers = (0..clause_count)
            .map(|i| format!(">={}.0a{}", 10 + i % 11, 1 + 3 * (i / 11)))
            .collect::<Vec<_>>()
            .join(",");

        let output = render_candidate_table(&specifiers, TableFormat::Html).unwrap();

        let colspan = Regex::new(r#"colspan="(\d+)""#).unwrap();
        let spans: Vec<u64> = colspan
            .captures_iter(&output)
            .map(|captures| captures[1].parse().unwrap())
            .collect();
        assert!(!spans.is_empty());
        assert!(spans.iter().all(|&span| (1..=MAX_COLSPAN).contains(&span)));
    }

    #[test]
    fn render_row_cells_add_up_to_capped_span() {
        // Pre counts 1..=9 give an uncapped width of 2520
        let versions: Vec<(String, bool)> = (1..=9u64)
            .flat_map(|major| {
                std::iter::once((format!("{major}.0"), true))
                    .chain((1..=major).map(move |n| (format!("{major}.0a{n}"), false)))
            })
            .collect();
        let versions: Vec<(&str, bool)> =
            versions.iter().map(|(v, valid)| (v.as_str(), *valid)).collect();
        let table = table(&versions);

        assert_eq!(phase_span(&table, PhaseBucket::Pre), MAX_COLSPAN);

        let output = HtmlRenderer.render(&table).unwrap();
        let colspan = Regex::new(r#"colspan="(\d+)""#).unwrap();
        let row_widths: Vec<u64> = output
            .lines()
            .filter(|line| line.starts_with("<tr><td"))
            .map(|line| {
                colspan
                    .captures_iter(line)
                    .map(|captures| captures[1].parse::<u64>().unwrap())
                    .sum()
            })
            .collect();
        assert_eq!(row_widths, vec![MAX_COLSPAN + 3; 9]);
    }

    #[test]
    fn render_shares_phase_width_between_versions() {
        let table = table(&[
            ("1.1", true),
            ("1.1a1", false),
            ("1.1b1", true),
            ("1.2", false),
            ("1.2a1", false),
            ("1.2b1", false),
            ("1.2rc1", true),
        ]);

        let output = HtmlRenderer.render(&table).unwrap();

        assert_eq!(
            output,
            concat!(
                "<table>\n<thead>\n<tr>",
                "<th colspan=\"1\">dev</th><th colspan=\"6\">pre</th>",
                "<th colspan=\"1\">final</th><th colspan=\"1\">post</th>",
                "</tr>\n</thead>\n<tbody>\n",
                "<tr><td colspan=\"1\"></td>",
                "<td colspan=\"3\" class=\"invalid\">1.1a1</td>",
                "<td colspan=\"3\" class=\"valid\">1.1b1</td>",
                "<td colspan=\"1\" class=\"valid\">1.1</td>",
                "<td colspan=\"1\"></td></tr>\n",
                "<tr><td colspan=\"1\"></td>",
                "<td colspan=\"2\" class=\"invalid\">1.2a1</td>",
                "<td colspan=\"2\" class=\"invalid\">1.2b1</td>",
                "<td colspan=\"2\" class=\"valid\">1.2rc1</td>",
                "<td colspan=\"1\" class=\"invalid\">1.2</td>",
                "<td colspan=\"1\"></td></tr>\n",
                "</tbody>\n</table>\n",
            )
        );
    }
}
