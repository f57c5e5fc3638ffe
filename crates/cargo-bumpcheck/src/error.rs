use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("check error")]
    Check(#[from] bumpcheck_check::CheckError),

    #[error("git error")]
    Git(#[from] bumpcheck_git::GitError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("{finding_count} package(s) failed bump validation")]
    CheckFailed { finding_count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
