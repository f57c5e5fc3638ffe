use std::path::Path;

use crate::error::SnapshotError;
use crate::snapshot::{ManifestFile, WorkspaceSnapshot};

/// Collects every `Cargo.toml` under `root`, addressed relative to it.
/// Hidden directories and build output are skipped.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if a directory cannot be read, or
/// [`SnapshotError::ManifestRead`] if a manifest file cannot be read.
pub fn collect_manifest_files(root: &Path) -> Result<Vec<ManifestFile>, SnapshotError> {
    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Builds a snapshot from a checked-out workspace on disk.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the tree cannot be read or the manifests do
/// not form a valid workspace.
pub fn snapshot_from_dir(root: &Path) -> Result<WorkspaceSnapshot, SnapshotError> {
    let files = collect_manifest_files(root)?;
    WorkspaceSnapshot::from_manifests(&files)
}

fn walk(base: &Path, current: &Path, results: &mut Vec<ManifestFile>) -> Result<(), SnapshotError> {
    let manifest_path = current.join("Cargo.toml");
    if manifest_path.is_file() {
        let content = std::fs::read_to_string(&manifest_path).map_err(|source| {
            SnapshotError::ManifestRead {
                path: manifest_path.clone(),
                source,
            }
        })?;
        let relative = manifest_path
            .strip_prefix(base)
            .unwrap_or(&manifest_path)
            .to_path_buf();
        results.push(ManifestFile { path: relative, content });
    }

    for entry in std::fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }
        if is_skipped_dir(&path) {
            continue;
        }

        walk(base, &path, results)?;
    }

    Ok(())
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_none_or(|name| name == "target" || name.starts_with('.'))
}
