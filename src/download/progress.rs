//! Transfer state and the observer seams the engine reports through.
//!
//! The engine owns a single [`TransferState`] per download and updates it
//! once per chunk. Callers receive it through a [`TransferObserver`]: many
//! `on_progress` calls, then exactly one of `on_success` or `on_failure`.

use std::path::Path;
use std::time::Duration;

use super::constants::MIN_ELAPSED_SECS;
use super::error::TransferError;

/// Snapshot of a running transfer.
///
/// `progress` and `seconds_remaining` are `None` whenever they cannot be
/// computed (unknown or zero total, zero speed), so NaN and infinity never
/// reach a display layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferState {
    /// Expected body size from `Content-Length`, if the server sent one.
    pub bytes_total: Option<u64>,
    /// Bytes written to disk so far.
    pub bytes_read: u64,
    /// Fraction complete in `[0, 1]`.
    pub progress: Option<f64>,
    /// Cumulative average speed in bytes per second.
    pub speed: f64,
    /// Estimated seconds until completion.
    pub seconds_remaining: Option<f64>,
    /// Wall-clock time since the body started streaming.
    pub elapsed: Duration,
}

impl TransferState {
    /// Creates the initial state for a body of the given expected size.
    #[must_use]
    pub fn new(bytes_total: Option<u64>) -> Self {
        Self {
            bytes_total,
            ..Self::default()
        }
    }

    /// Records `n` freshly written bytes and recomputes the derived figures.
    ///
    /// Speed is a cumulative average over `max(elapsed, 1s)`; the floor keeps
    /// the first second from reporting absurd rates.
    #[allow(clippy::cast_precision_loss)]
    pub fn record_chunk(&mut self, n: u64, elapsed: Duration) {
        self.bytes_read = self.bytes_read.saturating_add(n);
        self.elapsed = elapsed;

        let elapsed_secs = elapsed.as_secs_f64().max(MIN_ELAPSED_SECS);
        self.speed = self.bytes_read as f64 / elapsed_secs;

        let total = self.bytes_total.filter(|total| *total > 0);
        self.progress = total.map(|total| (self.bytes_read as f64 / total as f64).min(1.0));
        self.seconds_remaining = match total {
            Some(total) if self.speed > 0.0 => {
                Some(total.saturating_sub(self.bytes_read) as f64 / self.speed)
            }
            _ => None,
        };
    }
}

/// Receives progress and the terminal result of one download.
pub trait TransferObserver {
    /// Called after every chunk written to `path`.
    fn on_progress(&mut self, path: &Path, state: &TransferState);

    /// Called once when the body has been fully written to `path`.
    fn on_success(&mut self, path: &Path, state: &TransferState);

    /// Called once when reading or writing the body fails.
    fn on_failure(&mut self, path: &Path, state: &TransferState, error: &TransferError);
}

/// Adapts three closures into a [`TransferObserver`].
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use grabfile_core::{Callbacks, TransferError, TransferState};
///
/// let observer = Callbacks::new(
///     |path: &Path, state: &TransferState| println!("{}: {} bytes", path.display(), state.bytes_read),
///     |path: &Path, _state: &TransferState| println!("saved {}", path.display()),
///     |_path: &Path, _state: &TransferState, error: &TransferError| eprintln!("{error}"),
/// );
/// # drop(observer);
/// ```
pub struct Callbacks<P, S, F> {
    on_progress: P,
    on_success: S,
    on_failure: F,
}

impl<P, S, F> Callbacks<P, S, F>
where
    P: FnMut(&Path, &TransferState),
    S: FnMut(&Path, &TransferState),
    F: FnMut(&Path, &TransferState, &TransferError),
{
    /// Builds an observer from progress, success and failure closures.
    pub fn new(on_progress: P, on_success: S, on_failure: F) -> Self {
        Self {
            on_progress,
            on_success,
            on_failure,
        }
    }
}

impl<P, S, F> TransferObserver for Callbacks<P, S, F>
where
    P: FnMut(&Path, &TransferState),
    S: FnMut(&Path, &TransferState),
    F: FnMut(&Path, &TransferState, &TransferError),
{
    fn on_progress(&mut self, path: &Path, state: &TransferState) {
        (self.on_progress)(path, state);
    }

    fn on_success(&mut self, path: &Path, state: &TransferState) {
        (self.on_success)(path, state);
    }

    fn on_failure(&mut self, path: &Path, state: &TransferState, error: &TransferError) {
        (self.on_failure)(path, state, error);
    }
}

/// Answers the "overwrite existing file?" question.
pub trait Confirm {
    /// Returns true to proceed.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Confirmer that always overwrites (non-interactive callers).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

/// Confirmer that never overwrites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _question: &str) -> bool {
        false
    }
}
