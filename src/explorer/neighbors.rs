//! Integer neighborhoods explored around an anchor

use crate::explorer::anchor::Anchor;

/// Suffix counter used when the clause names none
pub const DEFAULT_SUFFIX_COUNTER: u64 = 1;

/// Neighborhoods of every component of one anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    pub majors: Vec<u64>,
    pub minors: Vec<u64>,
    pub micros: Vec<u64>,
    pub suffix_counters: Vec<u64>,
}

impl Neighborhood {
    pub fn around(anchor: &Anchor) -> Self {
        Self {
            majors: release_neighbors(anchor.major),
            minors: release_neighbors(anchor.minor),
            micros: release_neighbors(anchor.micro),
            suffix_counters: suffix_neighbors(anchor.suffix_counter),
        }
    }
}

/// Neighbors of one release component, ascending
///
/// `n - 1` is only included for `n > 1`: below that it is either negative or
/// a zero that the bare release already covers.
pub fn release_neighbors(n: u64) -> Vec<u64> {
    let mut neighbors = Vec::with_capacity(3);
    if n > 1 {
        neighbors.push(n - 1);
    }
    neighbors.push(n);
    neighbors.push(n.saturating_add(1));
    neighbors.dedup();
    neighbors
}

/// Neighbors of the suffix counter, ascending
///
/// Zero is a valid counter (`1.0a0`), so only negative values are dropped.
pub fn suffix_neighbors(counter: Option<u64>) -> Vec<u64> {
    let Some(n) = counter else {
        return vec![DEFAULT_SUFFIX_COUNTER];
    };

    let mut neighbors: Vec<u64> = n.checked_sub(1).into_iter().collect();
    neighbors.push(n);
    neighbors.push(n.saturating_add(1));
    neighbors.dedup();
    neighbors
}
