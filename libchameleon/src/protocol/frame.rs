// libchameleon/src/protocol/frame.rs

use crate::constants::{FRAME_HEADER_LEN, FRAME_OVERHEAD, FRAME_SOF, FRAME_SOF_LRC, MAX_PAYLOAD_LEN};
use crate::error::ChecksumKind;
use crate::protocol::checksum::lrc;
use crate::{Error, Result};

/// Device frame helper. Provides encode/decode of the wire frame
/// Format: [SOF(1)] [LRC1(1)] [CMD(2)] [STATUS(2)] [LEN(2)] [LRC2(1)] [DATA(n)] [LRC3(1)]
/// Multi-byte fields are big endian. LRC2 covers CMD..LEN, LRC3 covers every
/// preceding byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: u16,
    pub status: u16,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(command: u16, status: u16, payload: Vec<u8>) -> Self {
        Self {
            command,
            status,
            payload,
        }
    }

    /// Minimum buffered bytes before `expected_len` can answer.
    pub const MIN_HEADER_LEN: usize = FRAME_HEADER_LEN;

    /// Encode a command/status/payload triple into a full wire frame
    pub fn encode(command: u16, status: u16, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.push(FRAME_SOF);
        out.push(FRAME_SOF_LRC);
        out.extend_from_slice(&command.to_be_bytes());
        out.extend_from_slice(&status.to_be_bytes());
        out.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        out.push(lrc(&out[2..8]));
        out.extend_from_slice(payload);
        out.push(lrc(&out));
        Ok(out)
    }

    /// Total frame length implied by the header at the start of `buf`, or 0
    /// when the header is not a plausible frame start (short buffer, bad
    /// SOF, bad header LRC, oversized length).
    pub fn expected_len(buf: &[u8]) -> usize {
        if buf.len() < FRAME_HEADER_LEN {
            return 0;
        }
        if buf[0] != FRAME_SOF || buf[1] != FRAME_SOF_LRC {
            return 0;
        }
        if lrc(&buf[2..8]) != buf[8] {
            return 0;
        }
        let len = u16::from_be_bytes([buf[6], buf[7]]) as usize;
        if len > MAX_PAYLOAD_LEN {
            return 0;
        }
        FRAME_OVERHEAD + len
    }

    /// Decode exactly one complete frame
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        if frame.len() < FRAME_OVERHEAD {
            return Err(Error::InvalidLength {
                expected: FRAME_OVERHEAD,
                actual: frame.len(),
            });
        }

        if frame[0] != FRAME_SOF {
            return Err(Error::FrameFormat(format!("invalid sof {:#04x}", frame[0])));
        }
        if frame[1] != FRAME_SOF_LRC {
            return Err(Error::ChecksumMismatch {
                kind: ChecksumKind::Sof,
                expected: FRAME_SOF_LRC,
                actual: frame[1],
            });
        }

        let header_expected = lrc(&frame[2..8]);
        if frame[8] != header_expected {
            return Err(Error::ChecksumMismatch {
                kind: ChecksumKind::Header,
                expected: header_expected,
                actual: frame[8],
            });
        }

        let len = u16::from_be_bytes([frame[6], frame[7]]) as usize;
        if len > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                len,
                max: MAX_PAYLOAD_LEN,
            });
        }
        let required_len = FRAME_OVERHEAD + len;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload_end = FRAME_HEADER_LEN + len;
        let frame_expected = lrc(&frame[..payload_end]);
        if frame[payload_end] != frame_expected {
            return Err(Error::ChecksumMismatch {
                kind: ChecksumKind::Frame,
                expected: frame_expected,
                actual: frame[payload_end],
            });
        }

        Ok(Frame {
            command: u16::from_be_bytes([frame[2], frame[3]]),
            status: u16::from_be_bytes([frame[4], frame[5]]),
            payload: frame[FRAME_HEADER_LEN..payload_end].to_vec(),
        })
    }

    /// Re-encode this frame to wire bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Self::encode(self.command, self.status, &self.payload)
    }
}
