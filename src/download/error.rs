//! Error types for the download module.
//!
//! Every variant carries the URL or destination path it relates to, so the
//! driver can print a complete message without extra context.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can end a download attempt.
///
/// All of them are terminal: nothing in the engine retries.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The source does not parse as an absolute URL.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected URL string.
        url: String,
    },

    /// The URL path has no usable last segment to name the file after.
    #[error("cannot derive a file name from URL: {url}")]
    NoFilename {
        /// The URL whose path basename is empty.
        url: String,
    },

    /// The user declined to overwrite an existing file.
    #[error("download cancelled, keeping existing {path}")]
    Cancelled {
        /// The existing file that was left untouched.
        path: PathBuf,
    },

    /// Local file system failure (stat, remove, create, write).
    #[error("IO error on {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The request could not be sent (DNS, connection refused, TLS, timeout).
    #[error("network error downloading {url}: {source}")]
    Transport {
        /// The URL that failed.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body failed part-way through the transfer.
    #[error("connection lost while reading {url}: {source}")]
    Read {
        /// The URL being read.
        url: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The server answered with anything other than HTTP 200.
    #[error("download failed, received status code {status} from {url}")]
    BadStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

/// Coarse classification of a [`TransferError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed source URL, or one that names no file.
    InvalidUrl,
    /// Overwrite declined at the prompt.
    UserCancelled,
    /// Local file system failure.
    Io,
    /// The HTTP exchange could not be sent or completed.
    Transport,
    /// The server responded with a non-200 status.
    BadStatus,
}

impl TransferError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a missing-filename error.
    pub fn no_filename(url: impl Into<String>) -> Self {
        Self::NoFilename { url: url.into() }
    }

    /// Creates a cancellation for an existing destination.
    pub fn cancelled(path: impl Into<PathBuf>) -> Self {
        Self::Cancelled { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a transport error from a reqwest error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates a body read error.
    pub fn read(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            url: url.into(),
            source,
        }
    }

    /// Creates a bad status error.
    pub fn bad_status(url: impl Into<String>, status: u16) -> Self {
        Self::BadStatus {
            url: url.into(),
            status,
        }
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } | Self::NoFilename { .. } => ErrorKind::InvalidUrl,
            Self::Cancelled { .. } => ErrorKind::UserCancelled,
            Self::Io { .. } => ErrorKind::Io,
            Self::Transport { .. } | Self::Read { .. } => ErrorKind::Transport,
            Self::BadStatus { .. } => ErrorKind::BadStatus,
        }
    }

    /// Returns true when the user declined the overwrite prompt.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::UserCancelled
    }

    /// Returns the local path the error refers to, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Cancelled { path } | Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
