//! Specifier membership using PEP 440 version specifiers

use std::str::FromStr;

#[cfg(test)]
use mockall::automock;

use pep508_rs::pep440_rs::{Operator, Version, VersionSpecifier, VersionSpecifiers};
use tracing::warn;

use crate::explorer::error::ExplorerError;

/// Decides whether a version belongs to a specifier set
#[cfg_attr(test, automock)]
pub trait MembershipOracle {
    /// Check the whole version against every clause of the set
    fn contains(&self, version: &Version) -> bool;
}

/// A parsed specifier expression, e.g. `>=1.0,!=1.3.*`
///
/// Besides the clause-by-clause check, a set only admits pre-releases and
/// dev releases when one of its inclusive clauses names one itself.
#[derive(Debug, Clone)]
pub struct SpecifierSet {
    specifiers: VersionSpecifiers,
    allows_prereleases: bool,
}

impl SpecifierSet {
    pub fn parse(specifiers: &str) -> Result<Self, ExplorerError> {
        let specifiers = VersionSpecifiers::from_str(specifiers).inspect_err(|e| {
            warn!("Failed to parse version specifiers '{}': {}", specifiers, e);
        })?;
        let allows_prereleases = specifiers.iter().any(admits_prereleases);

        Ok(Self {
            specifiers,
            allows_prereleases,
        })
    }
}

impl MembershipOracle for SpecifierSet {
    fn contains(&self, version: &Version) -> bool {
        if version.any_prerelease() && !self.allows_prereleases {
            return false;
        }
        self.specifiers.contains(version)
    }
}

/// Whether a single clause opts the set into pre-releases
fn admits_prereleases(specifier: &VersionSpecifier) -> bool {
    let inclusive = matches!(
        specifier.operator(),
        Operator::Equal
            | Operator::EqualStar
            | Operator::ExactEqual
            | Operator::GreaterThanEqual
            | Operator::LessThanEqual
            | Operator::TildeEqual
    );
    inclusive && specifier.version().any_prerelease()
}

/// Check whether `version` satisfies every clause of `specifiers`
pub fn is_member_of(version: &str, specifiers: &str) -> Result<bool, ExplorerError> {
    let set = SpecifierSet::parse(specifiers)?;
    let version = Version::from_str(version.trim())?;
    Ok(set.contains(&version))
}
