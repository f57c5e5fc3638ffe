use bumpcheck_check::validation::CheckResult;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_common_sections(output: &mut String, result: &CheckResult) {
        output.push_str("Checked packages:\n");
        for name in &result.checked_packages {
            let failed = result.findings.iter().any(|f| &f.package == name);
            let status = if failed { "✗" } else { "✓" };
            output.push_str(&format!("  {status} {name}\n"));
        }

        if !result.skipped_internal.is_empty() {
            output.push_str("\nSkipped internal packages:\n");
            for name in &result.skipped_internal {
                output.push_str(&format!("  {name}\n"));
            }
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_success(&self, result: &CheckResult) -> String {
        let mut output = String::new();
        Self::format_common_sections(&mut output, result);
        output.push_str("\nAll packages consistent\n");
        output
    }

    fn format_failure(&self, result: &CheckResult) -> String {
        let mut output = String::new();
        Self::format_common_sections(&mut output, result);

        output.push_str("\nInconsistent packages:\n");
        for finding in &result.findings {
            output.push_str(&format!("  {finding}\n"));
        }

        output
    }
}
