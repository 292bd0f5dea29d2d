//! Candidate version synthesis
//!
//! Every release reachable from a [`Neighborhood`] is expanded into its final
//! form plus one dev, alpha, beta, release candidate and post release per
//! suffix counter.

use std::fmt;

use crate::explorer::neighbors::Neighborhood;

/// Pre-release kind, rendered with the canonical PEP 440 spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreKind {
    Alpha,
    Beta,
    Rc,
}

impl PreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreKind::Alpha => "a",
            PreKind::Beta => "b",
            PreKind::Rc => "rc",
        }
    }
}

/// Release phase of a synthesized candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleasePhase {
    Dev(u64),
    Pre(PreKind, u64),
    Final,
    Post(u64),
}

impl ReleasePhase {
    /// Every phase synthesized for one suffix counter
    fn all(counter: u64) -> [ReleasePhase; 6] {
        [
            ReleasePhase::Final,
            ReleasePhase::Dev(counter),
            ReleasePhase::Pre(PreKind::Alpha, counter),
            ReleasePhase::Pre(PreKind::Beta, counter),
            ReleasePhase::Pre(PreKind::Rc, counter),
            ReleasePhase::Post(counter),
        ]
    }
}

/// A synthesized version, e.g. `1.2rc1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateVersion {
    /// One to three release components
    pub release: Vec<u64>,
    pub phase: ReleasePhase,
}

impl fmt::Display for CandidateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.release.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }

        match self.phase {
            ReleasePhase::Final => Ok(()),
            ReleasePhase::Dev(n) => write!(f, "dev{n}"),
            ReleasePhase::Pre(kind, n) => write!(f, "{}{n}", kind.as_str()),
            ReleasePhase::Post(n) => write!(f, "post{n}"),
        }
    }
}

/// Expand a neighborhood into candidate versions
///
/// Releases whose components sum to zero (`0`, `0.0`, `0.0.0`) are never
/// emitted. The output may contain duplicates; ordering is left to the caller.
pub fn synthesize(neighborhood: &Neighborhood) -> Vec<CandidateVersion> {
    let mut candidates = Vec::new();

    for &major in &neighborhood.majors {
        push_release(&mut candidates, vec![major], &neighborhood.suffix_counters);
        for &minor in &neighborhood.minors {
            push_release(
                &mut candidates,
                vec![major, minor],
                &neighborhood.suffix_counters,
            );
            for &micro in &neighborhood.micros {
                push_release(
                    &mut candidates,
                    vec![major, minor, micro],
                    &neighborhood.suffix_counters,
                );
            }
        }
    }

    candidates
}

fn push_release(candidates: &mut Vec<CandidateVersion>, release: Vec<u64>, counters: &[u64]) {
    if release.iter().all(|&component| component == 0) {
        return;
    }

    for &counter in counters {
        candidates.extend(ReleasePhase::all(counter).into_iter().map(|phase| {
            CandidateVersion {
                release: release.clone(),
                phase,
            }
        }));
    }
}
