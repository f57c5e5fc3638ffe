use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bumpcheck_core::PackageInfo;
use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexMap;
use semver::Version;

use crate::error::SnapshotError;
use crate::manifest::{CargoManifest, Package, VersionField};

/// A manifest file addressed relative to the workspace root. Snapshots are
/// built from a set of these, so the same code serves filesystem checkouts
/// and git trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub path: PathBuf,
    pub content: String,
}

impl ManifestFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// An immutable, ordered view of all packages in a workspace at one point in
/// history. Queryable by name; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    packages: IndexMap<String, PackageInfo>,
}

impl WorkspaceSnapshot {
    /// Builds a snapshot from a set of manifest files. The set must contain
    /// the root `Cargo.toml`; member manifests are selected by the root's
    /// `members`/`exclude` globs.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] on a missing root manifest, unparseable
    /// TOML, a missing name/version field, an invalid version string, a bad
    /// member glob, or a duplicate package name.
    pub fn from_manifests(files: &[ManifestFile]) -> Result<Self, SnapshotError> {
        let root = files
            .iter()
            .find(|f| f.path == Path::new("Cargo.toml"))
            .ok_or(SnapshotError::RootManifestMissing)?;
        let root_manifest = parse_manifest(root)?;

        let workspace_version = root_manifest
            .workspace
            .as_ref()
            .and_then(|ws| ws.package.as_ref())
            .and_then(|pkg| pkg.version.clone());

        let mut packages = IndexMap::new();

        if let Some(pkg) = &root_manifest.package {
            insert_package(
                &mut packages,
                pkg,
                workspace_version.as_ref(),
                &root.path,
            )?;
        }

        if let Some(workspace) = &root_manifest.workspace {
            let members = build_matchers(workspace.members.as_deref().unwrap_or(&[]))?;
            let excludes = build_matchers(workspace.exclude.as_deref().unwrap_or(&[]))?;

            let mut member_files: Vec<&ManifestFile> = files
                .iter()
                .filter(|f| f.path != Path::new("Cargo.toml"))
                .filter(|f| {
                    let Some(dir) = f.path.parent() else {
                        return false;
                    };
                    members.iter().any(|m| m.is_match(dir))
                        && !excludes.iter().any(|ex| ex.is_match(dir))
                })
                .collect();
            member_files.sort_by(|a, b| a.path.cmp(&b.path));

            for file in member_files {
                let manifest = parse_manifest(file)?;
                if let Some(pkg) = &manifest.package {
                    insert_package(&mut packages, pkg, workspace_version.as_ref(), &file.path)?;
                }
            }
        }

        Ok(Self { packages })
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.packages.values()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PackageInfo> {
        self.packages.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

fn parse_manifest(file: &ManifestFile) -> Result<CargoManifest, SnapshotError> {
    toml::from_str(&file.content).map_err(|source| SnapshotError::ManifestParse {
        path: file.path.clone(),
        source: Box::new(source),
    })
}

fn build_matchers(patterns: &[String]) -> Result<Vec<GlobMatcher>, SnapshotError> {
    patterns
        .iter()
        .map(|pattern| {
            GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map(|g| g.compile_matcher())
                .map_err(|source| SnapshotError::GlobPattern {
                    pattern: pattern.clone(),
                    source,
                })
        })
        .collect()
}

fn insert_package(
    packages: &mut IndexMap<String, PackageInfo>,
    pkg: &Package,
    workspace_version: Option<&String>,
    manifest_path: &Path,
) -> Result<(), SnapshotError> {
    let version = resolve_version(pkg.version.as_ref(), workspace_version, manifest_path)?;
    let publish = pkg
        .publish
        .as_ref()
        .is_none_or(crate::manifest::PublishField::is_publishable);
    let metadata = pkg
        .metadata
        .as_ref()
        .map_or_else(BTreeMap::new, crate::manifest::MetadataSection::string_pairs);

    let info = PackageInfo {
        name: pkg.name.clone(),
        version,
        publish,
        metadata,
    };

    if packages.insert(pkg.name.clone(), info).is_some() {
        return Err(SnapshotError::DuplicatePackage {
            name: pkg.name.clone(),
        });
    }
    Ok(())
}

fn resolve_version(
    version_field: Option<&VersionField>,
    workspace_version: Option<&String>,
    manifest_path: &Path,
) -> Result<Version, SnapshotError> {
    let version_str = match version_field {
        Some(VersionField::Literal(v)) => v.clone(),
        Some(VersionField::Inherited(inherited)) if inherited.workspace => workspace_version
            .ok_or_else(|| SnapshotError::MissingField {
                path: manifest_path.to_path_buf(),
                field: "workspace.package.version",
            })?
            .clone(),
        Some(VersionField::Inherited(_)) | None => {
            return Err(SnapshotError::MissingField {
                path: manifest_path.to_path_buf(),
                field: "package.version",
            });
        }
    };

    version_str
        .parse()
        .map_err(|source| SnapshotError::InvalidVersion {
            path: manifest_path.to_path_buf(),
            version: version_str,
            source,
        })
}
