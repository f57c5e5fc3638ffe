use tracing::debug;

use bumpcheck_changedoc::aggregate;
use bumpcheck_core::DeclaredBumps;
use bumpcheck_snapshot::WorkspaceSnapshot;

use crate::sources::{ChangedocSource, SnapshotSource};
use crate::validation::rules::{BootstrapRule, DeclarationRule, StrictIncrementRule, SuffixRule};
use crate::validation::{CheckContext, CheckEngine, CheckResult};
use crate::{CheckError, Result};

#[derive(Debug)]
pub enum CheckOutcome {
    Passed(CheckResult),
    Failed(CheckResult),
}

/// The full validation run: load both snapshots and the change documents,
/// aggregate declarations, then run every rule and collect findings.
pub struct CheckOperation<B, N, D> {
    base_source: B,
    new_source: N,
    changedoc_source: D,
}

impl<B, N, D> CheckOperation<B, N, D>
where
    B: SnapshotSource,
    N: SnapshotSource,
    D: ChangedocSource,
{
    pub fn new(base_source: B, new_source: N, changedoc_source: D) -> Self {
        Self {
            base_source,
            new_source,
            changedoc_source,
        }
    }

    /// # Errors
    ///
    /// Returns an error on structural problems: a snapshot that cannot be
    /// built, a malformed change document, or a change document declaring a
    /// package the new snapshot does not contain. Policy violations do not
    /// error; they are collected in the outcome.
    pub fn execute(&self) -> Result<CheckOutcome> {
        let base = self.base_source.load()?;
        let new = self.new_source.load()?;
        let docs = self.changedoc_source.load()?;
        let declared = aggregate(&docs);

        debug!(
            base_packages = base.len(),
            new_packages = new.len(),
            documents = docs.len(),
            declarations = declared.len(),
            "loaded validation inputs"
        );

        ensure_declared_packages_exist(&declared, &new)?;

        let context = CheckContext {
            base,
            new,
            declared,
        };

        let suffix_rule = SuffixRule;
        let bootstrap_rule = BootstrapRule;
        let increment_rule = StrictIncrementRule;
        let declaration_rule = DeclarationRule;

        let mut engine = CheckEngine::new();
        engine.add_rule(&suffix_rule);
        engine.add_rule(&bootstrap_rule);
        engine.add_rule(&increment_rule);
        engine.add_rule(&declaration_rule);

        let result = engine.run(&context)?;

        if result.is_success() {
            Ok(CheckOutcome::Passed(result))
        } else {
            Ok(CheckOutcome::Failed(result))
        }
    }
}

/// A declaration naming a package the new snapshot does not contain means
/// the inputs cannot be trusted, so the whole run aborts.
fn ensure_declared_packages_exist(
    declared: &DeclaredBumps,
    new: &WorkspaceSnapshot,
) -> Result<()> {
    for (name, _) in declared.iter() {
        if new.find(name).is_none() {
            let available = new
                .packages()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CheckError::UnknownPackage {
                name: name.to_string(),
                available,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockChangedocSource, MockSnapshotSource, PackageSpec};
    use bumpcheck_core::BumpKind;

    fn run(
        base: Vec<PackageSpec>,
        new: Vec<PackageSpec>,
        docs: Vec<(&str, Option<BumpKind>)>,
    ) -> Result<CheckOutcome> {
        let operation = CheckOperation::new(
            MockSnapshotSource::workspace(base),
            MockSnapshotSource::workspace(new),
            MockChangedocSource::single_entry_docs(docs),
        );
        operation.execute()
    }

    fn expect_failed(outcome: CheckOutcome) -> CheckResult {
        match outcome {
            CheckOutcome::Failed(result) => result,
            CheckOutcome::Passed(_) => panic!("expected CheckOutcome::Failed"),
        }
    }

    #[test]
    fn unchanged_undeclared_package_passes() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![],
        )
        .expect("check should run");

        match outcome {
            CheckOutcome::Passed(result) => {
                assert!(result.findings.is_empty());
                assert_eq!(result.checked_packages, ["lib-a"]);
            }
            CheckOutcome::Failed(result) => {
                panic!("expected pass, got findings: {:?}", result.findings)
            }
        }
    }

    #[test]
    fn strict_patch_bump_with_matching_declaration_passes() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.4")],
            vec![("lib-a", Some(BumpKind::Patch))],
        )
        .expect("check should run");

        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[test]
    fn non_strict_minor_jump_names_expected_version() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.4.0")],
            vec![("lib-a", Some(BumpKind::Minor))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].package, "lib-a");
        assert!(result.findings[0].reason.contains("expected 1.3.0"));
    }

    #[test]
    fn undeclared_bump_fails() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.4")],
            vec![],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result.findings[0].reason.contains("no bump is declared"));
    }

    #[test]
    fn declared_without_actual_bump_fails() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![("lib-a", Some(BumpKind::Minor))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result.findings[0]
            .reason
            .contains("declared minor but the version did not change"));
    }

    #[test]
    fn declared_kind_mismatch_names_both_kinds() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.3.0")],
            vec![("lib-a", Some(BumpKind::Major))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result.findings[0].reason.contains("declared major"));
        assert!(result.findings[0].reason.contains("got minor"));
    }

    #[test]
    fn explicit_none_declaration_passes_without_change() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![("lib-a", Some(BumpKind::None))],
        )
        .expect("check should run");

        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[test]
    fn explicit_none_declaration_mismatches_a_real_bump() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.2.4")],
            vec![("lib-a", Some(BumpKind::None))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result.findings[0].reason.contains("declared none"));
    }

    #[test]
    fn new_package_at_bootstrap_version_passes_without_declaration() {
        let outcome = run(
            vec![],
            vec![PackageSpec::new("fresh", "0.1.0")],
            vec![],
        )
        .expect("check should run");

        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[test]
    fn new_package_at_non_bootstrap_version_fails() {
        let outcome = run(
            vec![],
            vec![PackageSpec::new("fresh", "0.2.0")],
            vec![],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result.findings[0].reason.contains("bootstrap version"));
        assert!(result.findings[0].reason.contains("0.2.0"));
    }

    #[test]
    fn new_package_skips_declaration_comparison() {
        // Declared major, introduced at 1.0.0: bootstrap versions are not
        // bumps, so the declaration is not compared.
        let outcome = run(
            vec![],
            vec![PackageSpec::new("fresh", "1.0.0")],
            vec![("fresh", Some(BumpKind::Major))],
        )
        .expect("check should run");

        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[test]
    fn suffixed_publishable_version_fails() {
        let outcome = run(
            vec![PackageSpec::new("lib-a", "1.2.3")],
            vec![PackageSpec::new("lib-a", "1.3.0-rc.1")],
            vec![("lib-a", Some(BumpKind::Minor))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert!(result
            .findings
            .iter()
            .any(|f| f.reason.contains("pre-release or build suffix")));
    }

    #[test]
    fn version_field_decrease_is_reported_per_package() {
        let outcome = run(
            vec![
                PackageSpec::new("going-back", "2.0.0"),
                PackageSpec::new("fine", "1.0.0"),
            ],
            vec![
                PackageSpec::new("going-back", "1.9.0"),
                PackageSpec::new("fine", "1.0.1"),
            ],
            vec![("fine", Some(BumpKind::Patch))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].package, "going-back");
        assert!(result.findings[0].reason.contains("decreased"));
    }

    #[test]
    fn internal_packages_are_exempt() {
        let outcome = run(
            vec![PackageSpec::new("helper", "0.3.0").internal()],
            // Non-strict jump and no declaration, but the package is
            // internal so nothing is checked.
            vec![PackageSpec::new("helper", "0.5.0").internal()],
            vec![],
        )
        .expect("check should run");

        match outcome {
            CheckOutcome::Passed(result) => {
                assert_eq!(result.skipped_internal, ["helper"]);
                assert!(result.checked_packages.is_empty());
            }
            CheckOutcome::Failed(result) => {
                panic!("expected pass, got findings: {:?}", result.findings)
            }
        }
    }

    #[test]
    fn declaration_for_unknown_package_aborts_the_run() {
        let err = run(
            vec![PackageSpec::new("lib-a", "1.0.0")],
            vec![PackageSpec::new("lib-a", "1.0.0")],
            vec![("no-such-package", Some(BumpKind::Patch))],
        )
        .expect_err("should abort");

        assert!(matches!(err, CheckError::UnknownPackage { name, .. } if name == "no-such-package"));
    }

    #[test]
    fn all_findings_are_collected_in_one_run() {
        let outcome = run(
            vec![
                PackageSpec::new("jumpy", "1.0.0"),
                PackageSpec::new("silent", "2.0.0"),
            ],
            vec![
                PackageSpec::new("jumpy", "1.3.0"),
                PackageSpec::new("silent", "2.0.1"),
                PackageSpec::new("newcomer", "0.7.0"),
            ],
            vec![("jumpy", Some(BumpKind::Minor))],
        )
        .expect("check should run");

        let result = expect_failed(outcome);
        let packages: Vec<_> = result.findings.iter().map(|f| f.package.as_str()).collect();
        assert!(packages.contains(&"jumpy"));
        assert!(packages.contains(&"silent"));
        assert!(packages.contains(&"newcomer"));
    }

    #[test]
    fn repeated_runs_yield_identical_findings() {
        let base = vec![PackageSpec::new("lib-a", "1.2.3")];
        let new = vec![PackageSpec::new("lib-a", "1.4.0")];
        let docs = vec![("lib-a", Some(BumpKind::Minor))];

        let first = expect_failed(
            run(base.clone(), new.clone(), docs.clone()).expect("check should run"),
        );
        let second = expect_failed(run(base, new, docs).expect("check should run"));

        assert_eq!(first.findings, second.findings);
    }
}
