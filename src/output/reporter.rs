//! Progress reporter wiring engine callbacks to the terminal.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use super::terminal::{Console, Level};
use super::{format_bytes, format_duration, format_rate, format_total};
use crate::download::{TransferError, TransferObserver, TransferState};

const BAR_TEMPLATE: &str = "{prefix}[{bar:30.cyan/blue}] {percent:>3}% {msg}";
const SPINNER_TEMPLATE: &str = "{prefix}{spinner} {msg}";

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// In-progress line: `(read / total) rate eta: Downloading name`.
#[must_use]
pub fn progress_message(path: &Path, state: &TransferState) -> String {
    format!(
        "({} / {}) {} {}: Downloading {}",
        format_bytes(state.bytes_read),
        format_total(state.bytes_total),
        format_rate(state.speed),
        format_duration(state.seconds_remaining),
        display_name(path)
    )
}

/// Success line: `(size) rate: Downloaded to path`.
#[must_use]
pub fn success_message(path: &Path, state: &TransferState) -> String {
    format!(
        "({}) {}: Downloaded to {}",
        format_bytes(state.bytes_read),
        format_rate(state.speed),
        path.display()
    )
}

/// Failure line: `(read / total) rate: Downloading name failed: error`.
#[must_use]
pub fn failure_message(path: &Path, state: &TransferState, error: &TransferError) -> String {
    format!(
        "({} / {}) {}: Downloading {} failed: {}",
        format_bytes(state.bytes_read),
        format_total(state.bytes_total),
        format_rate(state.speed),
        display_name(path),
        error
    )
}

/// Draws one self-overwriting progress line, then a permanent result line.
///
/// The bar is a determinate bar when the total is known and a spinner
/// otherwise. Redraws are rate-limited by indicatif; every callback still
/// updates the bar state.
pub struct TerminalReporter {
    console: Console,
    bar: Option<ProgressBar>,
}

impl TerminalReporter {
    /// Creates a reporter that writes through `console`.
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self { console, bar: None }
    }

    fn bar_for(&mut self, bytes_total: Option<u64>) -> &ProgressBar {
        self.bar.get_or_insert_with(|| match bytes_total.filter(|total| *total > 0) {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::with_template(BAR_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("=>-"),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::with_template(SPINNER_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                bar
            }
        })
    }

    fn finish_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl TransferObserver for TerminalReporter {
    fn on_progress(&mut self, path: &Path, state: &TransferState) {
        let prefix = self.console.prefix(Level::Plain);
        let message = progress_message(path, state);
        let bar = self.bar_for(state.bytes_total);

        bar.set_prefix(prefix);
        match state.bytes_total.filter(|total| *total > 0) {
            Some(total) => bar.set_position(state.bytes_read.min(total)),
            None => bar.tick(),
        }
        bar.set_message(message);
    }

    fn on_success(&mut self, path: &Path, state: &TransferState) {
        self.finish_bar();
        self.console.success(&success_message(path, state));
    }

    fn on_failure(&mut self, path: &Path, state: &TransferState, error: &TransferError) {
        self.finish_bar();
        self.console.error(&failure_message(path, state, error));
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.finish_bar();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DisplayConfig;
    use std::time::Duration;

    fn state(total: Option<u64>, read: u64) -> TransferState {
        let mut state = TransferState::new(total);
        state.record_chunk(read, Duration::from_secs(2));
        state
    }

    #[test]
    fn test_progress_message_known_total() {
        let msg = progress_message(Path::new("/tmp/dl/file.iso"), &state(Some(2048), 1024));
        assert!(msg.contains("Downloading file.iso"), "Unexpected: {msg}");
        assert!(msg.contains(&format_bytes(2048)), "Expected total in: {msg}");
        assert!(msg.contains("/s"), "Expected rate in: {msg}");
        assert!(!msg.contains("NaN") && !msg.contains("inf"), "Unexpected: {msg}");
    }

    #[test]
    fn test_progress_message_unknown_total_shows_placeholders() {
        let msg = progress_message(Path::new("file.iso"), &state(None, 1024));
        assert!(msg.contains("/ ?)"), "Expected unknown total in: {msg}");
        assert!(msg.contains(" ?: "), "Expected unknown ETA in: {msg}");
    }

    #[test]
    fn test_success_message_includes_full_path() {
        let msg = success_message(Path::new("/tmp/dl/file.iso"), &state(Some(10), 10));
        assert!(msg.contains("Downloaded to /tmp/dl/file.iso"), "Unexpected: {msg}");
    }

    #[test]
    fn test_failure_message_includes_error() {
        let error = TransferError::bad_status("https://h/file.iso", 503);
        let msg = failure_message(Path::new("file.iso"), &state(Some(10), 3), &error);
        assert!(msg.contains("Downloading file.iso failed"), "Unexpected: {msg}");
        assert!(msg.contains("503"), "Expected error in: {msg}");
    }

    #[test]
    fn test_reporter_full_cycle_clears_bar() {
        let mut reporter = TerminalReporter::new(Console::new(DisplayConfig::plain()));
        let path = Path::new("file.bin");

        reporter.on_progress(path, &state(Some(10), 5));
        assert!(reporter.bar.is_some());
        reporter.on_progress(path, &state(Some(10), 10));
        reporter.on_success(path, &state(Some(10), 10));
        assert!(reporter.bar.is_none());
    }

    #[test]
    fn test_reporter_spinner_for_unknown_total() {
        let mut reporter = TerminalReporter::new(Console::new(DisplayConfig::plain()));
        let path = Path::new("file.bin");

        reporter.on_progress(path, &state(None, 5));
        assert!(reporter.bar.as_ref().is_some_and(|bar| bar.length().is_none()));

        let error = TransferError::read("https://h/file.bin", std::io::Error::other("reset"));
        reporter.on_failure(path, &state(None, 5), &error);
        assert!(reporter.bar.is_none());
    }
}
