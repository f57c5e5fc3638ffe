mod formatter;
mod plain;
mod status;

pub(crate) use formatter::OutputFormatter;
pub(crate) use plain::PlainTextFormatter;
pub(crate) use status::{PlainTextStatusFormatter, StatusFormatter};
