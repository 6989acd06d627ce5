// libchameleon/src/link/config.rs

use std::time::Duration;

use crate::constants::{RESPONSE_QUEUE_CAPACITY, RX_BUFFER_CAPACITY};
use crate::utils::timeout::{DEFAULT_RESPONSE_TIMEOUT_MS, POLL_INTERVAL_MS, ms};

/// Tunables for one link instance. `Default` reproduces the device
/// reference behaviour (1024-byte rx buffer, 8 queued responses, 10 ms
/// polling, 2 s response timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Bytes the reassembly buffer may hold before it is wiped. Values below
    /// the largest frame (522 bytes) make maximum-size frames undeliverable.
    pub rx_capacity: usize,
    /// Decoded responses kept before the oldest is evicted.
    pub queue_capacity: usize,
    /// Sleep between queue scans in `wait_for_response`.
    pub poll_interval: Duration,
    /// Timeout used by the device layer for every command.
    pub response_timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            rx_capacity: RX_BUFFER_CAPACITY,
            queue_capacity: RESPONSE_QUEUE_CAPACITY,
            poll_interval: ms(POLL_INTERVAL_MS),
            response_timeout: ms(DEFAULT_RESPONSE_TIMEOUT_MS),
        }
    }
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rx_capacity(mut self, bytes: usize) -> Self {
        self.rx_capacity = bytes.max(1);
        self
    }

    pub fn with_queue_capacity(mut self, entries: usize) -> Self {
        self.queue_capacity = entries.max(1);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }
}
