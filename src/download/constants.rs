//! Constants for the download module (buffer sizing, timeouts).

/// Largest number of body bytes handled per read/write/progress step (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// HTTP connect timeout (30 seconds). No read or overall timeout is set.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Lower bound applied to elapsed time before computing speed (1 second).
pub const MIN_ELAPSED_SECS: f64 = 1.0;
