use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangedocError {
    #[error("failed to parse change document YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("failed to read change document '{path}'")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse change document '{path}'")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("failed to list change documents in '{path}'")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
