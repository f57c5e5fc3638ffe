use std::path::{Path, PathBuf};

use bumpcheck_changedoc::{list_changedoc_files, read_changedoc};
use bumpcheck_core::ChangeDocument;
use bumpcheck_git::Repository;
use bumpcheck_snapshot::{snapshot_from_dir, ManifestFile, WorkspaceSnapshot};

use crate::Result;

/// Produces one immutable workspace snapshot. Implementations read a
/// checkout, a committed git tree, or in-memory fixtures; the validator
/// never cares which.
pub trait SnapshotSource {
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be constructed.
    fn load(&self) -> Result<WorkspaceSnapshot>;
}

/// Produces the set of change documents for a run.
pub trait ChangedocSource {
    /// # Errors
    ///
    /// Returns an error if any document cannot be read or parsed.
    fn load(&self) -> Result<Vec<ChangeDocument>>;
}

/// Snapshot of the working tree on disk.
pub struct FsSnapshotSource {
    root: PathBuf,
}

impl FsSnapshotSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotSource for FsSnapshotSource {
    fn load(&self) -> Result<WorkspaceSnapshot> {
        Ok(snapshot_from_dir(&self.root)?)
    }
}

/// Snapshot of the manifest tree as committed at a refspec.
pub struct GitSnapshotSource {
    repo_path: PathBuf,
    refspec: String,
}

impl GitSnapshotSource {
    #[must_use]
    pub fn new(repo_path: impl Into<PathBuf>, refspec: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            refspec: refspec.into(),
        }
    }
}

impl SnapshotSource for GitSnapshotSource {
    fn load(&self) -> Result<WorkspaceSnapshot> {
        let repo = Repository::open(&self.repo_path)?;
        let manifests = repo.manifests_at_ref(&self.refspec)?;
        let files: Vec<ManifestFile> = manifests
            .into_iter()
            .map(|f| ManifestFile::new(f.path, f.content))
            .collect();
        Ok(WorkspaceSnapshot::from_manifests(&files)?)
    }
}

/// Change documents as committed at a refspec.
pub struct GitChangedocSource {
    repo_path: PathBuf,
    refspec: String,
    dir: PathBuf,
}

impl GitChangedocSource {
    #[must_use]
    pub fn new(
        repo_path: impl Into<PathBuf>,
        refspec: impl Into<String>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            refspec: refspec.into(),
            dir: dir.into(),
        }
    }
}

impl ChangedocSource for GitChangedocSource {
    fn load(&self) -> Result<Vec<ChangeDocument>> {
        let repo = Repository::open(&self.repo_path)?;
        let files = repo.files_under_at_ref(&self.refspec, &self.dir)?;
        let mut docs = Vec::new();
        for file in files {
            if is_yaml_path(&file.path) {
                docs.push(bumpcheck_changedoc::parse_changedoc(&file.content)?);
            }
        }
        Ok(docs)
    }
}

fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Change documents from a directory in the working tree.
pub struct FsChangedocSource {
    dir: PathBuf,
}

impl FsChangedocSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ChangedocSource for FsChangedocSource {
    fn load(&self) -> Result<Vec<ChangeDocument>> {
        let mut docs = Vec::new();
        for path in list_changedoc_files(&self.dir)? {
            docs.push(read_changedoc(&path)?);
        }
        Ok(docs)
    }
}

/// The directory change documents live in, relative to the workspace root.
#[must_use]
pub fn changedoc_dir(root: &Path) -> PathBuf {
    root.join("changedocs")
}
