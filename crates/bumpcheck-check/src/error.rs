use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Snapshot(#[from] bumpcheck_snapshot::SnapshotError),

    #[error(transparent)]
    Changedoc(#[from] bumpcheck_changedoc::ChangedocError),

    #[error(transparent)]
    Git(#[from] bumpcheck_git::GitError),

    #[error("change document declares unknown package '{name}' (available: {available})")]
    UnknownPackage { name: String, available: String },
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_package_error_includes_name_and_available() {
        let err = CheckError::UnknownPackage {
            name: "missing".to_string(),
            available: "foo, bar".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("missing"));
        assert!(msg.contains("foo, bar"));
    }

    #[test]
    fn snapshot_error_converts_via_from() {
        let snapshot_err = bumpcheck_snapshot::SnapshotError::RootManifestMissing;
        let err: CheckError = snapshot_err.into();

        assert!(matches!(err, CheckError::Snapshot(_)));
    }
}
