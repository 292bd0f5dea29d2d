//! Grouping of checked candidates into a phase-bucketed table

use std::collections::BTreeMap;

use indexmap::IndexMap;
use pep508_rs::pep440_rs::Version;
use serde::Serialize;

/// Outcome of testing one candidate against a specifier set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// Normalized PEP 440 string, e.g. `1.2.post1`
    pub version: String,
    pub is_valid: bool,
}

/// Column a version is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseBucket {
    Dev,
    Pre,
    Final,
    Post,
}

impl PhaseBucket {
    /// Column order of every rendered table
    pub const ALL: [PhaseBucket; 4] = [
        PhaseBucket::Dev,
        PhaseBucket::Pre,
        PhaseBucket::Final,
        PhaseBucket::Post,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseBucket::Dev => "dev",
            PhaseBucket::Pre => "pre",
            PhaseBucket::Final => "final",
            PhaseBucket::Post => "post",
        }
    }

    /// Classify a version: a dev segment wins over a pre segment, which wins
    /// over a post segment
    pub fn of(version: &Version) -> Self {
        if version.is_dev() {
            PhaseBucket::Dev
        } else if version.is_pre() {
            PhaseBucket::Pre
        } else if version.is_post() {
            PhaseBucket::Post
        } else {
            PhaseBucket::Final
        }
    }
}

/// All checked versions sharing one base release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Release numbers without any phase suffix, e.g. `1.2`
    pub base: String,
    pub dev: Vec<VersionCheck>,
    pub pre: Vec<VersionCheck>,
    #[serde(rename = "final")]
    pub final_release: Vec<VersionCheck>,
    pub post: Vec<VersionCheck>,
}

impl Row {
    fn new(base: String) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn bucket(&self, phase: PhaseBucket) -> &[VersionCheck] {
        match phase {
            PhaseBucket::Dev => &self.dev,
            PhaseBucket::Pre => &self.pre,
            PhaseBucket::Final => &self.final_release,
            PhaseBucket::Post => &self.post,
        }
    }

    fn bucket_mut(&mut self, phase: PhaseBucket) -> &mut Vec<VersionCheck> {
        match phase {
            PhaseBucket::Dev => &mut self.dev,
            PhaseBucket::Pre => &mut self.pre,
            PhaseBucket::Final => &mut self.final_release,
            PhaseBucket::Post => &mut self.post,
        }
    }

    fn is_empty(&self) -> bool {
        PhaseBucket::ALL
            .iter()
            .all(|&phase| self.bucket(phase).is_empty())
    }
}

/// Rows sorted by base version string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    pub rows: Vec<Row>,
}

impl ResultTable {
    /// Build a table from checked versions
    ///
    /// Versions are deduplicated by their normalized string, keeping the
    /// first occurrence.
    pub fn from_checks(checks: impl IntoIterator<Item = (Version, bool)>) -> Self {
        let mut unique: IndexMap<String, (Version, bool)> = IndexMap::new();
        for (version, is_valid) in checks {
            unique
                .entry(version.to_string())
                .or_insert((version, is_valid));
        }

        let mut rows: BTreeMap<String, Row> = BTreeMap::new();
        for (key, (version, is_valid)) in unique {
            let base = base_version(&version);
            rows.entry(base.clone())
                .or_insert_with(|| Row::new(base))
                .bucket_mut(PhaseBucket::of(&version))
                .push(VersionCheck {
                    version: key,
                    is_valid,
                });
        }

        let rows = rows
            .into_values()
            .map(|mut row| {
                for phase in PhaseBucket::ALL {
                    row.bucket_mut(phase)
                        .sort_by(|a, b| a.version.cmp(&b.version));
                }
                row
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate every check in row and column order
    pub fn checks(&self) -> impl Iterator<Item = &VersionCheck> {
        self.rows.iter().flat_map(|row| {
            PhaseBucket::ALL
                .into_iter()
                .flat_map(move |phase| row.bucket(phase).iter())
        })
    }

    /// Drop rejected versions, then rows left without any version
    pub fn retain_valid(&mut self) {
        for row in &mut self.rows {
            for phase in PhaseBucket::ALL {
                row.bucket_mut(phase).retain(|check| check.is_valid);
            }
        }
        self.rows.retain(|row| !row.is_empty());
    }
}

fn base_version(version: &Version) -> String {
    version
        .release()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
