//! Error type for the huffxor binary.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of a command-line run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Codec failure, passed through undecorated
    #[error(transparent)]
    Codec(#[from] huffxor_core::Error),

    /// File operation failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
