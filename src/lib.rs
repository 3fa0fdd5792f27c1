//! Grabfile Core Library
//!
//! This library provides the core functionality for the `grabfile` tool,
//! which downloads a single file over HTTP(S) into a local directory while
//! reporting live progress.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`download`] - Transfer engine: URL validation, destination resolution,
//!   the HTTP request and the chunked copy-with-progress loop
//! - [`output`] - Terminal formatting, the overwrite prompt and the progress
//!   reporter the CLI wires into the engine

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod output;

mod user_agent;

// Re-export commonly used types
pub use download::{
    AlwaysConfirm, CHUNK_SIZE, Callbacks, Confirm, Downloader, ErrorKind, HttpClient,
    NeverConfirm, Outcome, TransferError, TransferObserver, TransferState,
};
pub use output::{Console, DisplayConfig, Prompter, TerminalReporter};
