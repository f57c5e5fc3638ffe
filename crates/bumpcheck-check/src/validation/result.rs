use std::fmt;

/// One policy violation: the package at fault and a human-readable reason
/// stating what was expected and what was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub package: String,
    pub reason: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.package, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct CheckResult {
    pub checked_packages: Vec<String>,
    pub skipped_internal: Vec<String>,
    pub findings: Vec<Finding>,
}

impl CheckResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    pub(crate) fn push_finding(&mut self, package: &str, reason: String) {
        self.findings.push(Finding {
            package: package.to_string(),
            reason,
        });
    }
}
