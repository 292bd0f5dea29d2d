//! Anchor extraction from a single specifier clause
//!
//! A clause such as `~=1.2b1` is reduced to the numeric release it names
//! (`1.2.0`) plus the trailing suffix counter (`1`). Clauses that do not look
//! like `<comparator><release>[<word><counter>]` yield no anchor.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Comparator, dotted release, optional suffix word, optional suffix counter
static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[~>=<!]{1,3}(?<release>\d+(?:\.\d*)*)(?:(?<word>[A-Za-z]+)(?<counter>\d+)?)?")
        .expect("clause pattern is valid")
});

/// Center of the neighborhood explored for one clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    /// Number following the suffix word (`10` in `~=1.2b10`)
    pub suffix_counter: Option<u64>,
}

/// Extract an anchor from one clause of a specifier expression
///
/// Returns `None` when the clause does not match; the caller skips it.
/// The suffix word (`b`, `rc`, `post`, ...) is matched but not kept.
/// Whitespace around the clause is ignored, so `">=2.0, <3.0"` anchors on
/// both clauses.
pub fn parse_anchor(clause: &str) -> Option<Anchor> {
    let clause = clause.trim();
    let Some(captures) = CLAUSE_RE.captures(clause) else {
        debug!("Skipping clause without a numeric anchor: '{}'", clause);
        return None;
    };

    let release = captures.name("release")?.as_str().trim_end_matches('.');
    let mut parts = Vec::with_capacity(3);
    for group in release.split('.').take(3) {
        let Ok(part) = group.parse::<u64>() else {
            debug!("Skipping clause with unusable release '{}'", release);
            return None;
        };
        parts.push(part);
    }
    parts.resize(3, 0);

    let suffix_counter = match captures.name("counter") {
        Some(counter) => Some(counter.as_str().parse::<u64>().ok()?),
        None => None,
    };

    Some(Anchor {
        major: parts[0],
        minor: parts[1],
        micro: parts[2],
        suffix_counter,
    })
}

/// Extract the anchors of every clause in a comma-separated expression
pub fn parse_anchors(specifiers: &str) -> Vec<Anchor> {
    specifiers.split(',').filter_map(parse_anchor).collect()
}
