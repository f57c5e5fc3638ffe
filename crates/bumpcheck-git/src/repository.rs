use std::path::{Path, PathBuf};

use crate::{GitError, Result};

/// A file read out of a committed tree, addressed relative to the
/// repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFile {
    pub path: PathBuf,
    pub content: String,
}

pub struct Repository {
    inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git
    /// repository with a working directory.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner
            .workdir()
            .ok_or_else(|| GitError::NotARepository {
                path: path.to_path_buf(),
            })?
            .to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads every `Cargo.toml` out of the tree at `refspec`, without
    /// touching the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the refspec does not resolve,
    /// or [`GitError::NonUtf8Blob`] if a manifest blob is not UTF-8.
    pub fn manifests_at_ref(&self, refspec: &str) -> Result<Vec<TreeFile>> {
        self.tree_files_at_ref(refspec, |path| {
            path.file_name().is_some_and(|name| name == "Cargo.toml")
        })
    }

    /// Reads every file under `dir` out of the tree at `refspec`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the refspec does not resolve,
    /// or [`GitError::NonUtf8Blob`] if a matching blob is not UTF-8.
    pub fn files_under_at_ref(&self, refspec: &str, dir: &Path) -> Result<Vec<TreeFile>> {
        self.tree_files_at_ref(refspec, |path| path.starts_with(dir))
    }

    fn tree_files_at_ref(
        &self,
        refspec: &str,
        matches: impl Fn(&Path) -> bool,
    ) -> Result<Vec<TreeFile>> {
        let tree = self.resolve_tree(refspec)?;

        let mut files = Vec::new();
        let mut walk_error = None;

        let walk_result = tree.walk(git2::TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() != Some(git2::ObjectType::Blob) {
                return git2::TreeWalkResult::Ok;
            }
            let Some(name) = entry.name() else {
                return git2::TreeWalkResult::Ok;
            };
            let path = PathBuf::from(format!("{dir}{name}"));
            if !matches(&path) {
                return git2::TreeWalkResult::Ok;
            }

            match self.read_blob(entry.id(), &path) {
                Ok(content) => {
                    files.push(TreeFile { path, content });
                    git2::TreeWalkResult::Ok
                }
                Err(err) => {
                    walk_error = Some(err);
                    git2::TreeWalkResult::Abort
                }
            }
        });

        // An aborted walk surfaces as a git error; the recorded cause is
        // the one worth reporting.
        if let Some(err) = walk_error {
            return Err(err);
        }
        walk_result?;

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let object = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;
        Ok(object.peel_to_tree()?)
    }

    fn read_blob(&self, id: git2::Oid, path: &Path) -> Result<String> {
        let blob = self.inner.find_blob(id)?;
        let content = std::str::from_utf8(blob.content()).map_err(|_| GitError::NonUtf8Blob {
            path: path.to_path_buf(),
        })?;
        Ok(content.to_string())
    }
}
