//! Candidate generation and classification for version specifiers
//!
//! This module explores the versions around the anchors of a specifier
//! expression and records which of them the expression accepts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Anchor    │────▶│  Neighbors  │────▶│ Synthesizer │
//! │  (clauses)  │     │ (integers)  │     │ (versions)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Render    │◀────│    Table    │◀────│ Membership  │
//! │  (formats)  │     │ (grouping)  │     │ (pep440_rs) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Anchors are parsed per clause and a clause that does not match is skipped.
//! Membership is always decided against the whole expression, so a syntax
//! error there fails the entire call.
//!
//! # Modules
//!
//! - [`anchor`]: Anchor extraction from one clause
//! - [`neighbors`]: Integer neighborhoods around an anchor
//! - [`synthesizer`]: Candidate versions across release phases
//! - [`membership`]: Specifier membership predicate
//! - [`table`]: Deduplication, phase buckets and sorting
//! - [`error`]: Error types for explorer operations

pub mod anchor;
pub mod error;
pub mod membership;
pub mod neighbors;
pub mod synthesizer;
pub mod table;

use std::str::FromStr;

use pep508_rs::pep440_rs::Version;
use tracing::debug;

use crate::explorer::anchor::parse_anchors;
use crate::explorer::error::ExplorerError;
use crate::explorer::membership::{MembershipOracle, SpecifierSet};
use crate::explorer::neighbors::Neighborhood;
use crate::explorer::synthesizer::synthesize;
use crate::explorer::table::ResultTable;
use crate::render::{TableFormat, render};

/// Explore the versions around `specifiers` and check each against it
pub fn evaluate(specifiers: &str) -> Result<ResultTable, ExplorerError> {
    let set = SpecifierSet::parse(specifiers)?;
    evaluate_with(specifiers, &set)
}

/// Same as [`evaluate`], deciding membership with `oracle`
///
/// `specifiers` is only used to find anchors; `oracle` must already hold the
/// parsed expression.
pub fn evaluate_with<O: MembershipOracle + ?Sized>(
    specifiers: &str,
    oracle: &O,
) -> Result<ResultTable, ExplorerError> {
    let anchors = parse_anchors(specifiers);
    debug!(
        "Exploring {} anchor(s) of '{}'",
        anchors.len(),
        specifiers
    );

    let mut checks = Vec::new();
    for anchor in &anchors {
        for candidate in synthesize(&Neighborhood::around(anchor)) {
            let version = Version::from_str(&candidate.to_string())?;
            let is_valid = oracle.contains(&version);
            checks.push((version, is_valid));
        }
    }

    Ok(ResultTable::from_checks(checks))
}

/// Explore `specifiers` and render the result table
///
/// Returns the empty string when no candidate was generated.
pub fn render_candidate_table(
    specifiers: &str,
    format: TableFormat,
) -> Result<String, ExplorerError> {
    let table = evaluate(specifiers)?;
    render(&table, format)
}
