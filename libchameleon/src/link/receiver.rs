// libchameleon/src/link/receiver.rs

use super::reassembly::{ReassemblyBuffer, ReceiverStats};
use super::{Response, ResponseHandler};

/// Receive-path half of the link. Owned by whatever context reads the
/// transport; it is the only writer of its reassembly buffer, so that
/// buffer needs no lock.
#[derive(Debug)]
pub struct FrameReceiver {
    buffer: ReassemblyBuffer,
    handler: ResponseHandler,
    seen_epoch: u64,
}

impl FrameReceiver {
    pub fn new(handler: ResponseHandler, rx_capacity: usize) -> Self {
        let seen_epoch = handler.reset_epoch();
        Self {
            buffer: ReassemblyBuffer::new(rx_capacity),
            handler,
            seen_epoch,
        }
    }

    /// Feed one received chunk. Every complete, valid frame is queued on the
    /// handler and announced to its notification sink before this returns.
    pub fn process_data(&mut self, data: &[u8]) {
        let epoch = self.handler.reset_epoch();
        if epoch != self.seen_epoch {
            self.buffer.reset();
            self.seen_epoch = epoch;
        }
        let handler = &self.handler;
        self.buffer
            .process(data, |frame| handler.deliver(Response::from_frame(frame)));
    }

    pub fn handler(&self) -> &ResponseHandler {
        &self.handler
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn stats(&self) -> ReceiverStats {
        self.buffer.stats()
    }
}
