// libchameleon/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;

/// Encode a raw request: host-to-device frames always carry status 0.
pub fn encode_request(command_id: u16, payload: &[u8]) -> Result<Vec<u8>> {
    Frame::encode(command_id, 0, payload)
}

/// Encode a Command into a full wire frame (with SOF/LRCs).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    encode_request(cmd.command_id(), &cmd.encode_payload())
}
