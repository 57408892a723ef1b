use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading problem data.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read instance {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("instance {path}: {detail}")]
    Format { path: PathBuf, detail: String },
}

impl ProblemError {
    pub fn format(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
