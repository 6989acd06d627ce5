// libchameleon/src/transport/mock.rs

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::transport::traits::{RxHandler, Transport};
use crate::types::ConnectionType;
use crate::{Error, Result};

type SharedHandler = Arc<Mutex<Option<RxHandler>>>;
type Responder = Box<dyn FnMut(&[u8]) -> Option<Vec<u8>> + Send>;

/// Shared log of every buffer passed to `send`.
pub type SentLog = Arc<Mutex<Vec<Vec<u8>>>>;

/// Mock transport for tests. Records sent buffers and answers each send with
/// the next scripted reply (or a responder's output), delivered through the
/// receive handler before `send` returns.
pub struct MockTransport {
    sent: SentLog,
    replies: VecDeque<Vec<u8>>,
    responder: Option<Responder>,
    handler: SharedHandler,
    /// Split every delivery into chunks of this size (0 delivers whole).
    chunk_size: usize,
    /// Testing hook: number of subsequent sends that fail with an I/O error
    send_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            replies: VecDeque::new(),
            responder: None,
            handler: Arc::new(Mutex::new(None)),
            chunk_size: 0,
            send_failures: 0,
        }
    }

    /// Queue raw bytes to deliver after the next send.
    pub fn push_reply(&mut self, bytes: Vec<u8>) {
        self.replies.push_back(bytes);
    }

    /// Compute replies from the sent bytes. Scripted replies take precedence.
    pub fn set_responder<F>(&mut self, responder: F)
    where
        F: FnMut(&[u8]) -> Option<Vec<u8>> + Send + 'static,
    {
        self.responder = Some(Box::new(responder));
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size;
    }

    /// Set how many subsequent sends should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Handle to the sent log that stays valid after the transport is boxed.
    pub fn sent_log(&self) -> SentLog {
        self.sent.clone()
    }

    /// Handle for pushing unsolicited bytes into the receive path.
    pub fn injector(&self) -> MockInjector {
        MockInjector {
            handler: self.handler.clone(),
        }
    }

    fn deliver(&self, bytes: &[u8]) {
        deliver_to(&self.handler, bytes, self.chunk_size);
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("sent", &self.sent.lock().len())
            .field("replies", &self.replies.len())
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

fn deliver_to(handler: &SharedHandler, bytes: &[u8], chunk_size: usize) {
    let mut guard = handler.lock();
    let Some(handler) = guard.as_mut() else {
        return;
    };
    if chunk_size == 0 {
        handler(bytes);
    } else {
        for chunk in bytes.chunks(chunk_size) {
            handler(chunk);
        }
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        self.sent.lock().push(data.to_vec());

        let reply = match self.replies.pop_front() {
            Some(reply) => Some(reply),
            None => self.responder.as_mut().and_then(|r| r(data)),
        };
        if let Some(reply) = reply {
            self.deliver(&reply);
        }
        Ok(())
    }

    fn start_rx(&mut self, handler: RxHandler) -> Result<()> {
        *self.handler.lock() = Some(handler);
        Ok(())
    }

    fn stop_rx(&mut self) -> Result<()> {
        *self.handler.lock() = None;
        Ok(())
    }

    fn connection_type(&self) -> ConnectionType {
        ConnectionType::Mock
    }
}

/// Pushes bytes into a [`MockTransport`]'s receive handler from any thread,
/// as if the device had sent them unprompted.
#[derive(Clone)]
pub struct MockInjector {
    handler: SharedHandler,
}

impl MockInjector {
    pub fn inject(&self, bytes: &[u8]) {
        deliver_to(&self.handler, bytes, 0);
    }

    pub fn inject_chunked(&self, bytes: &[u8], chunk_size: usize) {
        deliver_to(&self.handler, bytes, chunk_size);
    }
}
