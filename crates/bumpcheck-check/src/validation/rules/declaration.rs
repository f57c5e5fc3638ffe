use bumpcheck_core::BumpKind;
use bumpcheck_version::classify;

use super::{CheckContext, CheckResult, CheckRule};
use crate::Result;

/// Cross-checks the computed bump of every existing package against what the
/// change documents declare for it. New packages are skipped entirely:
/// bootstrap versions are not bumps.
pub struct DeclarationRule;

impl CheckRule for DeclarationRule {
    fn check(&self, context: &CheckContext, result: &mut CheckResult) -> Result<()> {
        for pkg in context.eligible_packages() {
            let Some(base_pkg) = context.base.find(&pkg.name) else {
                continue;
            };

            // An invalid transition was already reported by the strict
            // increment rule; there is no meaningful bump to compare.
            let Ok(computed) = classify(&base_pkg.version, &pkg.version) else {
                continue;
            };

            let declared = context.declared.get(&pkg.name);

            match (computed.kind, declared) {
                (BumpKind::None, None | Some(BumpKind::None)) => {}
                (kind, Some(declared_kind)) if kind == declared_kind => {}
                (BumpKind::None, Some(declared_kind)) => {
                    result.push_finding(
                        &pkg.name,
                        format!("declared {declared_kind} but the version did not change"),
                    );
                }
                (kind, None) => {
                    result.push_finding(
                        &pkg.name,
                        format!(
                            "version bumped ({kind}) but no bump is declared in any change document"
                        ),
                    );
                }
                (kind, Some(declared_kind)) => {
                    result.push_finding(
                        &pkg.name,
                        format!("declared {declared_kind}, got {kind}"),
                    );
                }
            }
        }
        Ok(())
    }
}
