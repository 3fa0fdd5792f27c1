//! Destination path resolution for downloads.
//!
//! The file name is always the basename of the URL path; it cannot be
//! overridden and no fallback name is invented.

use std::borrow::Cow;
use std::path::{Path, PathBuf, is_separator};

use url::Url;

use super::error::TransferError;

/// Returns the percent-decoded basename of the URL path.
///
/// Trailing slashes are ignored the way a path basename ignores them, so
/// `https://host/dir/` names `dir`. Returns `None` when nothing usable
/// remains (`https://host/`, `.` or `..`).
#[must_use]
pub fn basename_from_url(url: &Url) -> Option<String> {
    let trimmed = url.path().trim_end_matches('/');
    let last_segment = trimmed.rsplit('/').next().unwrap_or("");
    let decoded = urlencoding::decode(last_segment)
        .map_or_else(|_| last_segment.to_string(), Cow::into_owned);

    // A decoded segment may itself contain separators (`%2F`); keep the tail.
    let name = decoded.rsplit(is_separator).next().unwrap_or("");
    match name {
        "" | "." | ".." => None,
        other => Some(other.to_string()),
    }
}

/// Computes `destination_dir / basename(url.path)`.
///
/// # Errors
///
/// Returns [`TransferError::NoFilename`] when the URL path has no basename.
pub fn destination_path(destination_dir: &Path, url: &Url) -> Result<PathBuf, TransferError> {
    basename_from_url(url)
        .map(|name| destination_dir.join(name))
        .ok_or_else(|| TransferError::no_filename(url.as_str()))
}
