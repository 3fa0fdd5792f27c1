//! Terminal output: human-readable figures, log lines, the overwrite prompt
//! and the progress reporter.
//!
//! Nothing here touches the network or the destination file; the engine
//! hands over [`TransferState`](crate::TransferState) snapshots and this
//! module only renders them.

use std::time::Duration;

use indicatif::{HumanBytes, HumanDuration};

mod config;
mod prompt;
mod reporter;
mod terminal;

pub use config::DisplayConfig;
pub use prompt::{Prompter, parse_answer};
pub use reporter::{TerminalReporter, failure_message, progress_message, success_message};
pub use terminal::{Console, Level};

/// Placeholder for figures that cannot be computed.
pub const UNKNOWN: &str = "?";

/// Formats a byte count with binary (IEC) units, e.g. `3.00 MiB`.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    HumanBytes(bytes).to_string()
}

/// Formats an optional total, `?` when the server did not send one.
#[must_use]
pub fn format_total(bytes_total: Option<u64>) -> String {
    bytes_total.map_or_else(|| UNKNOWN.to_string(), format_bytes)
}

/// Formats a transfer rate, e.g. `1.50 MiB/s`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(bytes_per_second: f64) -> String {
    if !bytes_per_second.is_finite() || bytes_per_second < 0.0 {
        return format!("{UNKNOWN}/s");
    }
    format!("{}/s", HumanBytes(bytes_per_second.round() as u64))
}

/// Formats a remaining-time estimate, rounded to the largest sensible unit.
#[must_use]
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(secs) if secs.is_finite() && secs >= 0.0 => {
            HumanDuration(Duration::from_secs_f64(secs)).to_string()
        }
        _ => UNKNOWN.to_string(),
    }
}
