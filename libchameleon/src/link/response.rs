// libchameleon/src/link/response.rs

use std::time::Instant;

use crate::protocol::Frame;
use crate::{Error, Result};

/// One decoded device response. Created only from a frame that passed its
/// integrity checks; cloned, never shared, when it leaves the queue.
///
/// Fields are read through accessors so a response cannot be altered after
/// it was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    command: u16,
    status: u16,
    payload: Vec<u8>,
    received_at: Instant,
    valid: bool,
}

impl Response {
    pub fn from_frame(frame: Frame) -> Self {
        Self {
            command: frame.command,
            status: frame.status,
            payload: frame.payload,
            received_at: Instant::now(),
            valid: true,
        }
    }

    pub fn command(&self) -> u16 {
        self.command
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    pub fn received_at(&self) -> Instant {
        self.received_at
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[cfg(test)]
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Return the response when its status equals `expected`, otherwise an
    /// `UnexpectedStatus` error naming the command.
    pub fn expect_status(self, expected: u16) -> Result<Self> {
        if self.status != expected {
            return Err(Error::UnexpectedStatus {
                command: self.command,
                expected,
                actual: self.status,
            });
        }
        Ok(self)
    }
}

impl From<Frame> for Response {
    fn from(frame: Frame) -> Self {
        Self::from_frame(frame)
    }
}
