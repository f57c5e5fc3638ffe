mod error;
pub mod operations;
pub mod sources;
pub mod validation;

#[cfg(test)]
pub mod mocks;

pub use error::{CheckError, Result};
