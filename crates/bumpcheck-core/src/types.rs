use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Magnitude of a semantic-version change.
///
/// The derived ordering is `None < Patch < Minor < Major`, which is what
/// declared-bump aggregation relies on when a package is named by more than
/// one change document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    None,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        };
        write!(f, "{s}")
    }
}

/// A classified transition between two versions: its kind plus whether it is
/// the minimal strict increment for that kind (lower fields reset to zero,
/// the changed field increased by exactly one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionBump {
    pub kind: BumpKind,
    pub strict: bool,
}

impl VersionBump {
    #[must_use]
    pub fn none() -> Self {
        Self {
            kind: BumpKind::None,
            strict: true,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == BumpKind::None
    }
}

/// A single workspace member as seen in one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: Version,
    pub publish: bool,
    /// `[package.metadata.bumpcheck]` key/value pairs from the manifest.
    pub metadata: BTreeMap<String, String>,
}

impl PackageInfo {
    /// Internal-only packages are exempt from bump validation. A package is
    /// internal when it is unpublishable or its manifest marks it so.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        !self.publish || self.metadata.get("internal").is_some_and(|v| v == "true")
    }
}

/// One entry of a change document: a package name with an optional declared
/// bump. A missing bump keyword means the document has no opinion on the
/// package's version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bump: Option<BumpKind>,
}

/// A parsed change document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub crates: Vec<CrateEntry>,
}

/// Highest declared bump per package across all change documents.
///
/// Absence of an entry is distinct from an explicit `none` declaration; both
/// states matter to the consistency validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredBumps {
    entries: IndexMap<String, BumpKind>,
}

impl DeclaredBumps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration, keeping the maximum when the package was
    /// already declared.
    pub fn record(&mut self, name: &str, kind: BumpKind) {
        match self.entries.get_mut(name) {
            Some(existing) => {
                if kind > *existing {
                    *existing = kind;
                }
            }
            None => {
                self.entries.insert(name.to_string(), kind);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<BumpKind> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BumpKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}
