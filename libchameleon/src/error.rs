// libchameleon/src/error.rs

use thiserror::Error;

/// Which of the three frame LRC bytes failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChecksumKind {
    #[display(fmt = "sof")]
    Sof,
    #[display(fmt = "header")]
    Header,
    #[display(fmt = "frame")]
    Frame,
}

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("not connected")]
    NotConnected,

    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("{kind} checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        kind: ChecksumKind,
        expected: u8,
        actual: u8,
    },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("command {command} failed: expected status {expected:#06x}, got {actual:#06x}")]
    UnexpectedStatus {
        command: u16,
        expected: u16,
        actual: u16,
    },

    #[error("timed out after {timeout_ms} ms waiting for response to command {command}")]
    Timeout { command: u16, timeout_ms: u64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
