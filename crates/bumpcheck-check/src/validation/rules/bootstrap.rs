use bumpcheck_version::is_bootstrap_version;

use super::{CheckContext, CheckResult, CheckRule};
use crate::Result;

/// Packages absent from the base snapshot are new and must be introduced at
/// one of the canonical starting versions.
pub struct BootstrapRule;

impl CheckRule for BootstrapRule {
    fn check(&self, context: &CheckContext, result: &mut CheckResult) -> Result<()> {
        for pkg in context.eligible_packages() {
            if context.base.find(&pkg.name).is_some() {
                continue;
            }
            if !is_bootstrap_version(&pkg.version) {
                result.push_finding(
                    &pkg.name,
                    format!(
                        "new package must be introduced at an allowed bootstrap version \
                         (0.0.1, 0.1.0 or 1.0.0), found {}",
                        pkg.version
                    ),
                );
            }
        }
        Ok(())
    }
}
