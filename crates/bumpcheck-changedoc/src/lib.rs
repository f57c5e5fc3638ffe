mod aggregate;
mod error;
mod parse;

pub use aggregate::aggregate;
pub use error::ChangedocError;
pub use parse::{list_changedoc_files, parse_changedoc, read_changedoc};

pub type Result<T> = std::result::Result<T, ChangedocError>;
