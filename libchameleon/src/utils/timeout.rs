//! Timing constants shared by the link and device layers.

use std::time::Duration;

/// How long a command waits for its response before giving up.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 2000;

/// Sleep between response-queue scans while waiting.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_response_timeout() -> Duration {
    ms(DEFAULT_RESPONSE_TIMEOUT_MS)
}
