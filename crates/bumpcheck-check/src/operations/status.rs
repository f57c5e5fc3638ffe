use bumpcheck_changedoc::aggregate;
use bumpcheck_core::DeclaredBumps;

use crate::sources::ChangedocSource;
use crate::Result;

/// What the pending change documents declare, before any snapshot
/// comparison. This is the "what will this change bump" view.
#[derive(Debug)]
pub struct StatusReport {
    pub document_count: usize,
    pub declared: DeclaredBumps,
}

pub struct StatusOperation<D> {
    changedoc_source: D,
}

impl<D: ChangedocSource> StatusOperation<D> {
    pub fn new(changedoc_source: D) -> Self {
        Self { changedoc_source }
    }

    /// # Errors
    ///
    /// Returns an error if any change document cannot be read or parsed.
    pub fn execute(&self) -> Result<StatusReport> {
        let docs = self.changedoc_source.load()?;
        let declared = aggregate(&docs);
        Ok(StatusReport {
            document_count: docs.len(),
            declared,
        })
    }
}
