use std::path::Path;

use bumpcheck_check::operations::StatusOperation;
use bumpcheck_check::sources::{changedoc_dir, FsChangedocSource};
use bumpcheck_git::Repository;

use super::StatusArgs;
use crate::error::Result;
use crate::output::{PlainTextStatusFormatter, StatusFormatter};

pub(crate) fn run(args: &StatusArgs, start_path: &Path) -> Result<()> {
    // Status works from the working tree; the repository is only used to
    // locate the root.
    let root = match Repository::open(start_path) {
        Ok(repo) => repo.root().to_path_buf(),
        Err(_) => start_path.to_path_buf(),
    };

    let operation = StatusOperation::new(FsChangedocSource::new(changedoc_dir(&root)));
    let report = operation.execute()?;

    if !args.quiet {
        let formatter = PlainTextStatusFormatter;
        print!("{}", formatter.format(&report));
    }

    Ok(())
}
