use bumpcheck_version::has_suffix;

use super::{CheckContext, CheckResult, CheckRule};
use crate::Result;

/// Published package versions must be plain `major.minor.patch`; anything
/// with a pre-release or build suffix cannot be released.
pub struct SuffixRule;

impl CheckRule for SuffixRule {
    fn check(&self, context: &CheckContext, result: &mut CheckResult) -> Result<()> {
        for pkg in context.eligible_packages() {
            if has_suffix(&pkg.version) {
                result.push_finding(
                    &pkg.name,
                    format!(
                        "publishable version {} carries a pre-release or build suffix",
                        pkg.version
                    ),
                );
            }
        }
        Ok(())
    }
}
