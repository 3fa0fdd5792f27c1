//! Transfer engine: one URL, one file, live progress.
//!
//! [`Downloader::download`] runs the whole flow in order:
//! 1. parse and validate the URL (no I/O before this)
//! 2. resolve the destination and ask before replacing an existing entry
//! 3. send the GET request; only HTTP 200 is accepted
//! 4. create or truncate the destination file
//! 5. copy the body chunk by chunk, reporting after each one
//!
//! Steps 1-4 fail without touching the observer. Once copying starts, exactly
//! one of `on_success` / `on_failure` is called. A failed copy leaves the
//! partial file on disk.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use futures_util::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, trace, warn};
use url::Url;

use super::client::HttpClient;
use super::constants::CHUNK_SIZE;
use super::error::TransferError;
use super::filename::destination_path;
use super::progress::{Confirm, TransferObserver, TransferState};

/// Downloads single files through a shared [`HttpClient`].
#[derive(Debug, Clone)]
pub struct Downloader {
    client: HttpClient,
}

impl Downloader {
    /// Creates a downloader using the given client.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Downloads `source_url` into `destination_dir`, named after the URL
    /// path basename.
    ///
    /// `confirm` is asked before an existing entry at the destination is
    /// removed. `observer` receives per-chunk progress and the terminal
    /// success or failure of the copy.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InvalidUrl`] / [`TransferError::NoFilename`] for a
    ///   source that does not parse or names no file
    /// - [`TransferError::Cancelled`] when the overwrite is declined
    /// - [`TransferError::Io`] for stat, remove, create or write failures
    /// - [`TransferError::Transport`] / [`TransferError::Read`] when the
    ///   request or the body fails
    /// - [`TransferError::BadStatus`] for any status other than 200
    #[instrument(skip(self, confirm, observer))]
    pub async fn download<C, O>(
        &self,
        source_url: &str,
        destination_dir: &Path,
        confirm: &mut C,
        observer: &mut O,
    ) -> Result<PathBuf, TransferError>
    where
        C: Confirm + ?Sized,
        O: TransferObserver + ?Sized,
    {
        let url = Url::parse(source_url).map_err(|e| {
            debug!(error = %e, "rejected source URL");
            TransferError::invalid_url(source_url)
        })?;
        let path = destination_path(destination_dir, &url)?;
        debug!(path = %path.display(), "resolved destination");

        prepare_destination(&path, confirm).await?;

        let response = self.client.get(&url).await?;
        let bytes_total = response.content_length();
        debug!(?bytes_total, "starting transfer");

        let mut file = File::create(&path)
            .await
            .map_err(|e| TransferError::io(path.clone(), e))?;

        let body = response.bytes_stream().map(|chunk| chunk.map_err(io::Error::other));
        let state = copy_body(body, &mut file, &path, url.as_str(), bytes_total, observer).await?;

        info!(
            path = %path.display(),
            bytes = state.bytes_read,
            "download complete"
        );
        Ok(path)
    }
}

/// Makes sure nothing is in the way at `path`, asking before removing it.
async fn prepare_destination<C>(path: &Path, confirm: &mut C) -> Result<(), TransferError>
where
    C: Confirm + ?Sized,
{
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(TransferError::io(path, e)),
    };

    let question = format!(
        "The file {} already exists, do you want to download a fresh copy?",
        path.display()
    );
    if !confirm.confirm(&question) {
        debug!(path = %path.display(), "overwrite declined");
        return Err(TransferError::cancelled(path));
    }

    let removed = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };
    removed.map_err(|e| TransferError::io(path, e))?;
    debug!(path = %path.display(), "removed existing entry");
    Ok(())
}

/// Copies `body` into `file`, reporting after every chunk.
///
/// Chunks larger than [`CHUNK_SIZE`] are split so no single step handles more
/// than that. Empty chunks are skipped and never reported.
pub(crate) async fn copy_body<S, B, O>(
    mut body: S,
    file: &mut File,
    path: &Path,
    url: &str,
    bytes_total: Option<u64>,
    observer: &mut O,
) -> Result<TransferState, TransferError>
where
    S: Stream<Item = io::Result<B>> + Unpin,
    B: AsRef<[u8]>,
    O: TransferObserver + ?Sized,
{
    let mut state = TransferState::new(bytes_total);
    let started = Instant::now();

    while let Some(next) = body.next().await {
        let chunk = match next {
            Ok(chunk) => chunk,
            Err(source) => {
                let error = TransferError::read(url, source);
                warn!(bytes_read = state.bytes_read, error = %error, "transfer interrupted");
                observer.on_failure(path, &state, &error);
                return Err(error);
            }
        };

        for piece in chunk.as_ref().chunks(CHUNK_SIZE) {
            if let Err(source) = write_chunk(file, piece).await {
                let error = TransferError::io(path, source);
                warn!(bytes_read = state.bytes_read, error = %error, "write failed");
                observer.on_failure(path, &state, &error);
                return Err(error);
            }

            state.record_chunk(piece.len() as u64, started.elapsed());
            trace!(
                n = piece.len(),
                bytes_read = state.bytes_read,
                speed = state.speed,
                "chunk written"
            );
            observer.on_progress(path, &state);
        }
    }

    observer.on_success(path, &state);
    Ok(state)
}

/// Writes one chunk and flushes so a failure belongs to this chunk.
async fn write_chunk(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}
