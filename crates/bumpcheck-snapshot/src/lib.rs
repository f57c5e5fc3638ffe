mod error;
mod fs;
mod manifest;
mod snapshot;

pub use error::SnapshotError;
pub use fs::{collect_manifest_files, snapshot_from_dir};
pub use snapshot::{ManifestFile, WorkspaceSnapshot};

pub type Result<T> = std::result::Result<T, SnapshotError>;
