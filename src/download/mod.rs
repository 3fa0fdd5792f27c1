//! Transfer engine for streaming a single file to disk.
//!
//! This module downloads one HTTP(S) URL into a directory, naming the file
//! after the URL path basename, and reports progress after every chunk.
//!
//! # Features
//!
//! - Streaming copy in chunks of at most 1 MiB
//! - Cumulative-average speed and ETA, with indeterminate fallbacks when the
//!   server omits `Content-Length`
//! - Overwrite confirmation for an existing destination
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use grabfile_core::download::{AlwaysConfirm, Callbacks, Downloader, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new(HttpClient::new()?);
//! let mut observer = Callbacks::new(
//!     |_: &Path, state: &grabfile_core::TransferState| println!("{} bytes", state.bytes_read),
//!     |path: &Path, _: &grabfile_core::TransferState| println!("saved {}", path.display()),
//!     |_: &Path, _: &grabfile_core::TransferState, error: &grabfile_core::TransferError| {
//!         eprintln!("{error}");
//!     },
//! );
//! let path = downloader
//!     .download(
//!         "https://example.com/file.iso",
//!         Path::new("./downloads"),
//!         &mut AlwaysConfirm,
//!         &mut observer,
//!     )
//!     .await?;
//! println!("Downloaded: {}", path.display());
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod engine;
mod error;
mod filename;
mod outcome;
mod progress;

pub use client::HttpClient;
pub use constants::{CHUNK_SIZE, CONNECT_TIMEOUT_SECS};
pub use engine::Downloader;
pub use error::{ErrorKind, TransferError};
pub use filename::{basename_from_url, destination_path};
pub use outcome::Outcome;
pub use progress::{
    AlwaysConfirm, Callbacks, Confirm, NeverConfirm, TransferObserver, TransferState,
};
