use bumpcheck_version::{bump_version, classify};

use super::{CheckContext, CheckResult, CheckRule};
use crate::Result;

/// Existing packages must either keep their version or take the minimal
/// strict increment for the bump's kind. A version field going backwards is
/// reported per package; the rest of the workspace is still checked.
pub struct StrictIncrementRule;

impl CheckRule for StrictIncrementRule {
    fn check(&self, context: &CheckContext, result: &mut CheckResult) -> Result<()> {
        for pkg in context.eligible_packages() {
            let Some(base_pkg) = context.base.find(&pkg.name) else {
                continue;
            };

            match classify(&base_pkg.version, &pkg.version) {
                Ok(bump) if bump.is_none() || bump.strict => {}
                Ok(bump) => {
                    let expected = bump_version(&base_pkg.version, bump.kind);
                    result.push_finding(
                        &pkg.name,
                        format!(
                            "{} bump from {} to {} is not the minimal increment; expected {expected}",
                            bump.kind, base_pkg.version, pkg.version
                        ),
                    );
                }
                Err(err) => {
                    result.push_finding(&pkg.name, err.to_string());
                }
            }
        }
        Ok(())
    }
}
