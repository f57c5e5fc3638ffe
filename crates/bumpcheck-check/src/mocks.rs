use bumpcheck_core::{BumpKind, ChangeDocument, CrateEntry};
use bumpcheck_snapshot::{ManifestFile, WorkspaceSnapshot};

use crate::sources::{ChangedocSource, SnapshotSource};
use crate::Result;

/// Describes one workspace member for in-memory snapshot fixtures. The mock
/// renders real manifests, so tests exercise the same snapshot construction
/// path as production.
#[derive(Debug, Clone)]
pub struct PackageSpec {
    pub name: String,
    pub version: String,
    pub publish: bool,
    pub internal: bool,
}

impl PackageSpec {
    #[must_use]
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            publish: true,
            internal: false,
        }
    }

    #[must_use]
    pub fn unpublished(mut self) -> Self {
        self.publish = false;
        self
    }

    #[must_use]
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    fn render_manifest(&self) -> String {
        let mut manifest = format!(
            "[package]\nname = \"{}\"\nversion = \"{}\"\n",
            self.name, self.version
        );
        if !self.publish {
            manifest.push_str("publish = false\n");
        }
        if self.internal {
            manifest.push_str("\n[package.metadata.bumpcheck]\ninternal = true\n");
        }
        manifest
    }
}

pub struct MockSnapshotSource {
    files: Vec<ManifestFile>,
}

impl MockSnapshotSource {
    /// A virtual workspace with one member crate per `PackageSpec`.
    #[must_use]
    pub fn workspace(members: Vec<PackageSpec>) -> Self {
        let mut files = vec![ManifestFile::new(
            "Cargo.toml",
            "[workspace]\nmembers = [\"crates/*\"]\nresolver = \"2\"\n",
        )];
        for member in &members {
            files.push(ManifestFile::new(
                format!("crates/{}/Cargo.toml", member.name),
                member.render_manifest(),
            ));
        }
        Self { files }
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load(&self) -> Result<WorkspaceSnapshot> {
        Ok(WorkspaceSnapshot::from_manifests(&self.files)?)
    }
}

pub struct MockChangedocSource {
    docs: Vec<ChangeDocument>,
}

impl MockChangedocSource {
    #[must_use]
    pub fn empty() -> Self {
        Self { docs: Vec::new() }
    }

    #[must_use]
    pub fn with_docs(docs: Vec<ChangeDocument>) -> Self {
        Self { docs }
    }

    /// One document per entry, which is the common fixture shape.
    #[must_use]
    pub fn single_entry_docs(entries: Vec<(&str, Option<BumpKind>)>) -> Self {
        let docs = entries
            .into_iter()
            .map(|(name, bump)| ChangeDocument {
                title: None,
                crates: vec![CrateEntry {
                    name: name.to_string(),
                    bump,
                }],
            })
            .collect();
        Self { docs }
    }
}

impl ChangedocSource for MockChangedocSource {
    fn load(&self) -> Result<Vec<ChangeDocument>> {
        Ok(self.docs.clone())
    }
}
