//! Terminal outcome of a download, as reported by the driver.

use std::path::PathBuf;

use super::error::TransferError;

/// How a download ended.
#[derive(Debug)]
pub enum Outcome {
    /// The file was written to the path.
    Success(PathBuf),
    /// The user kept the existing file at the path.
    Cancelled(PathBuf),
    /// The attempt failed; `path` is the destination when it was resolved.
    Failed {
        /// Destination path, if known when the error occurred.
        path: Option<PathBuf>,
        /// What went wrong.
        error: TransferError,
    },
}

impl Outcome {
    /// Returns true for [`Outcome::Failed`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl From<Result<PathBuf, TransferError>> for Outcome {
    fn from(result: Result<PathBuf, TransferError>) -> Self {
        match result {
            Ok(path) => Self::Success(path),
            Err(TransferError::Cancelled { path }) => Self::Cancelled(path),
            Err(error) => Self::Failed {
                path: error.path().map(std::path::Path::to_path_buf),
                error,
            },
        }
    }
}
