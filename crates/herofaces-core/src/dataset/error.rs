//! Errors raised while loading the dataset. All of them abort the run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("could not find file at {path}")]
    Missing { path: PathBuf },

    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} contains no entries")]
    Empty { path: PathBuf },

    #[error("language '{code}' not present in {path}")]
    MissingLanguage { code: String, path: PathBuf },
}
