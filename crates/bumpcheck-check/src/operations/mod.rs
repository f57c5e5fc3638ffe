mod check;
mod status;

pub use check::{CheckOperation, CheckOutcome};
pub use status::{StatusOperation, StatusReport};
