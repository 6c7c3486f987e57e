use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of session operations (open/save/reload).
///
/// Dialog cancellation is not an error; operations that go through a dialog
/// return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("not a markdown file: {}", .0.display())]
    InvalidFileType(PathBuf),

    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no document or file path to save to")]
    NoTarget,

    #[error("{} is already open in another document", .0.display())]
    TargetAlreadyOpen(PathBuf),
}

/// Errors from config and recent-files persistence.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
