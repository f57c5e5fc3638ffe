mod context;
mod engine;
mod result;
pub mod rules;

pub use context::CheckContext;
pub use engine::CheckEngine;
pub use result::{CheckResult, Finding};
