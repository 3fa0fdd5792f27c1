//! Shared helpers for integration tests: a recording observer and mock setup.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use grabfile_core::{TransferError, TransferObserver, TransferState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Observer that keeps every callback it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub progress: Vec<TransferState>,
    pub successes: Vec<(PathBuf, TransferState)>,
    pub failures: Vec<(PathBuf, String)>,
}

impl Recorder {
    /// Total number of terminal callbacks (success + failure).
    pub fn terminal_calls(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// True when no callback at all was received.
    pub fn is_untouched(&self) -> bool {
        self.progress.is_empty() && self.terminal_calls() == 0
    }
}

impl TransferObserver for Recorder {
    fn on_progress(&mut self, _path: &Path, state: &TransferState) {
        self.progress.push(state.clone());
    }

    fn on_success(&mut self, path: &Path, state: &TransferState) {
        self.successes.push((path.to_path_buf(), state.clone()));
    }

    fn on_failure(&mut self, path: &Path, _state: &TransferState, error: &TransferError) {
        self.failures.push((path.to_path_buf(), error.to_string()));
    }
}

/// Starts a mock server answering GET `path_str` with 200 and `content`.
pub async fn mock_file(path_str: &str, content: &[u8]) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Starts a mock server that fails the test if it receives any request.
pub async fn mock_never_called() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Lists the entries of a directory by file name.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("should read dir")
        .map(|entry| {
            entry
                .expect("should read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
