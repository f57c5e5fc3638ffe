mod classify;
mod error;

pub use classify::{bump_version, classify, has_suffix, is_bootstrap_version, BOOTSTRAP_VERSIONS};
pub use error::ClassifyError;

pub type Result<T> = std::result::Result<T, ClassifyError>;
