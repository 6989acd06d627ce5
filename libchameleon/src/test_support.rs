//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup: a mock that answers each
//! request frame with a canned response for its command id, and a connected
//! device built on top of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use crate::device::{Connected, Device};
use crate::link::LinkConfig;
use crate::protocol::Frame;
use crate::transport::{MockTransport, SentLog};
use crate::Result;

/// Response timeout used by mock devices; unanswered commands fail fast.
pub const MOCK_RESPONSE_TIMEOUT: Duration = Duration::from_millis(200);

/// Canned answer for one command id.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct Reply {
    pub command: u16,
    pub status: u16,
    pub payload: Vec<u8>,
}

#[doc(hidden)]
pub fn reply(command: u16, status: u16, payload: &[u8]) -> Reply {
    Reply {
        command,
        status,
        payload: payload.to_vec(),
    }
}

/// Build a MockTransport that decodes every sent frame and answers with the
/// reply registered for its command id. Commands without a reply get no
/// answer, so the caller times out.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<Reply>) -> MockTransport {
    let table: HashMap<u16, Reply> = replies.into_iter().map(|r| (r.command, r)).collect();
    let mut mock = MockTransport::new();
    mock.set_responder(move |sent| {
        let request = Frame::decode(sent).ok()?;
        let r = table.get(&request.command)?;
        Frame::encode(r.command, r.status, &r.payload).ok()
    });
    mock
}

/// Convenience: a connected Device backed by `mock_with_replies`, plus the
/// log of frames it sends.
#[doc(hidden)]
pub fn connected_mock_device(replies: Vec<Reply>) -> Result<(Device<Connected>, SentLog)> {
    let mock = mock_with_replies(replies);
    let sent = mock.sent_log();
    let config = LinkConfig::default().with_response_timeout(MOCK_RESPONSE_TIMEOUT);
    let device = Device::new(Box::new(mock), config).connect()?;
    Ok((device, sent))
}
