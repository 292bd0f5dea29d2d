use pep508_rs::pep440_rs::{VersionParseError, VersionSpecifiersParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Invalid version specifier: {0}")]
    SpecifierSyntax(#[from] VersionSpecifiersParseError),

    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] VersionParseError),

    #[error("Failed to serialize table: {0}")]
    Serialize(#[from] serde_json::Error),
}
