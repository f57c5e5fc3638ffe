use bumpcheck_core::{DeclaredBumps, PackageInfo};
use bumpcheck_snapshot::WorkspaceSnapshot;

/// Immutable inputs for one validation run: the two snapshots under
/// comparison and the aggregated declarations.
pub struct CheckContext {
    pub base: WorkspaceSnapshot,
    pub new: WorkspaceSnapshot,
    pub declared: DeclaredBumps,
}

impl CheckContext {
    /// Published, non-internal packages of the new snapshot, in snapshot
    /// order. These are the packages the rules examine.
    pub fn eligible_packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.new.packages().filter(|pkg| !pkg.is_internal())
    }
}
