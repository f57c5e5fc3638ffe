use std::path::{Path, PathBuf};

use bumpcheck_core::ChangeDocument;

use crate::error::ChangedocError;

/// Parses one change document. The bump vocabulary is closed: anything other
/// than `none`, `patch`, `minor` or `major` fails the parse, and the caller
/// treats that as fatal for the whole run.
///
/// # Errors
///
/// Returns [`ChangedocError::Yaml`] on malformed YAML or an unrecognized
/// bump keyword.
#[must_use = "parsing result should be handled"]
pub fn parse_changedoc(content: &str) -> Result<ChangeDocument, ChangedocError> {
    Ok(serde_yml::from_str(content)?)
}

/// Reads and parses a change document from disk.
///
/// # Errors
///
/// Returns [`ChangedocError::FileRead`] or [`ChangedocError::FileParse`]
/// with the offending path.
pub fn read_changedoc(path: &Path) -> Result<ChangeDocument, ChangedocError> {
    let content = std::fs::read_to_string(path).map_err(|source| ChangedocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yml::from_str(&content).map_err(|source| ChangedocError::FileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists change-document files (`.yaml`/`.yml`) in a directory, sorted by
/// path. A missing directory yields an empty list so a workspace without
/// change documents is not an error.
///
/// # Errors
///
/// Returns [`ChangedocError::List`] if the directory cannot be read.
pub fn list_changedoc_files(dir: &Path) -> Result<Vec<PathBuf>, ChangedocError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ChangedocError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ChangedocError::List {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_yaml_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}
