use bumpcheck_check::operations::StatusReport;

pub(crate) trait StatusFormatter {
    fn format(&self, report: &StatusReport) -> String;
}

pub(crate) struct PlainTextStatusFormatter;

impl StatusFormatter for PlainTextStatusFormatter {
    fn format(&self, report: &StatusReport) -> String {
        if report.declared.is_empty() {
            return "No bumps declared in change documents\n".to_string();
        }

        let mut output = format!(
            "Declared bumps across {} change document(s):\n",
            report.document_count
        );
        for (name, kind) in report.declared.iter() {
            output.push_str(&format!("  {name}: {kind}\n"));
        }
        output
    }
}
