use bumpcheck_check::validation::CheckResult;

pub(crate) trait OutputFormatter {
    fn format_success(&self, result: &CheckResult) -> String;
    fn format_failure(&self, result: &CheckResult) -> String;
}
