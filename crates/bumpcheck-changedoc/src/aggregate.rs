use bumpcheck_core::{ChangeDocument, DeclaredBumps};

/// Folds a set of change documents into the highest declared bump per
/// package.
///
/// Entries without a bump keyword contribute nothing: the document touched
/// the package but takes no position on its version. An explicit `none` is a
/// declaration and is recorded.
#[must_use]
pub fn aggregate<'a>(docs: impl IntoIterator<Item = &'a ChangeDocument>) -> DeclaredBumps {
    let mut declared = DeclaredBumps::new();
    for doc in docs {
        for entry in &doc.crates {
            if let Some(kind) = entry.bump {
                declared.record(&entry.name, kind);
            }
        }
    }
    declared
}
