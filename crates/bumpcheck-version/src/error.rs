use semver::Version;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("invalid version transition from {base} to {new}: a version field decreased")]
    FieldDecreased { base: Version, new: Version },
}
