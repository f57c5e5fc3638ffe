use tracing::debug;

use super::rules::CheckRule;
use super::{CheckContext, CheckResult};
use crate::Result;

/// Runs a fixed set of rules over one context, accumulating findings.
/// Rules never abort on a policy violation, so one run reports every
/// inconsistent package at once.
pub struct CheckEngine<'a> {
    rules: Vec<&'a dyn CheckRule>,
}

impl<'a> CheckEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: &'a dyn CheckRule) {
        self.rules.push(rule);
    }

    /// # Errors
    ///
    /// Returns an error only on structural problems; policy violations land
    /// in the result's findings.
    pub fn run(&self, context: &CheckContext) -> Result<CheckResult> {
        let mut result = CheckResult::default();

        for pkg in context.new.packages() {
            if pkg.is_internal() {
                result.skipped_internal.push(pkg.name.clone());
            } else {
                result.checked_packages.push(pkg.name.clone());
            }
        }

        debug!(
            checked = result.checked_packages.len(),
            skipped = result.skipped_internal.len(),
            "running bump consistency rules"
        );

        for rule in &self.rules {
            rule.check(context, &mut result)?;
        }

        Ok(result)
    }
}

impl Default for CheckEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
