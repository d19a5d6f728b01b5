//! Error types for geoshift-inject.

use std::path::PathBuf;

use thiserror::Error;

/// Failures from the fan-out stages. These are recorded and logged by the
/// pipeline, never allowed to abort the remaining stages.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to invoke privileged command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> InjectError {
    InjectError::Io {
        path: path.into(),
        source,
    }
}
