use std::path::Path;

use bumpcheck_check::operations::{CheckOperation, CheckOutcome};
use bumpcheck_check::sources::{
    changedoc_dir, ChangedocSource, FsChangedocSource, FsSnapshotSource, GitChangedocSource,
    GitSnapshotSource, SnapshotSource,
};
use bumpcheck_git::Repository;

use super::CheckArgs;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: &CheckArgs, start_path: &Path) -> Result<()> {
    let repo = Repository::open(start_path)?;
    let root = repo.root().to_path_buf();

    let base_source = GitSnapshotSource::new(&root, args.base.clone());

    match &args.head {
        Some(head) => {
            let new_source = GitSnapshotSource::new(&root, head.clone());
            let changedoc_source =
                GitChangedocSource::new(&root, head.clone(), Path::new("changedocs"));
            execute(args, base_source, new_source, changedoc_source)
        }
        None => {
            let new_source = FsSnapshotSource::new(&root);
            let changedoc_source = FsChangedocSource::new(changedoc_dir(&root));
            execute(args, base_source, new_source, changedoc_source)
        }
    }
}

fn execute<B, N, D>(args: &CheckArgs, base: B, new: N, docs: D) -> Result<()>
where
    B: SnapshotSource,
    N: SnapshotSource,
    D: ChangedocSource,
{
    let operation = CheckOperation::new(base, new, docs);
    let outcome = operation.execute()?;

    let formatter = PlainTextFormatter;

    match outcome {
        CheckOutcome::Passed(result) => {
            if !args.quiet {
                print!("{}", formatter.format_success(&result));
            }
            Ok(())
        }
        CheckOutcome::Failed(result) => {
            eprint!("{}", formatter.format_failure(&result));
            Err(CliError::CheckFailed {
                finding_count: result.findings.len(),
            })
        }
    }
}
