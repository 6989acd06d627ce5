// libchameleon/src/link/reassembly.rs

//! Stream reassembly: turns arbitrarily chunked receive data into frames.
//!
//! The buffer holds either nothing or bytes starting at a candidate SOF.
//! Parsing is a small state machine:
//! - `AwaitingSync`: drop noise up to the next SOF byte
//! - `AwaitingHeader`: need `Frame::MIN_HEADER_LEN` bytes to size the frame
//! - `AwaitingPayload`: header accepted, need `frame_len` bytes in total
//!
//! Every corruption event consumes at least one byte, so a buffer always
//! drains in bounded time.

use log::{debug, error, trace, warn};

use crate::protocol::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingSync,
    AwaitingHeader,
    AwaitingPayload { frame_len: usize },
}

/// Counters describing what the reassembly path has seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverStats {
    pub bytes_received: u64,
    pub frames_decoded: u64,
    /// Length-plausible spans whose final check failed
    pub frames_discarded: u64,
    /// SOF bytes whose header turned out to be invalid
    pub false_syncs: u64,
    /// Bytes dropped while searching for SOF
    pub noise_bytes: u64,
    /// Whole-buffer wipes caused by capacity pressure
    pub overflow_wipes: u64,
}

/// Bounded receive buffer with frame boundary detection.
#[derive(Debug)]
pub struct ReassemblyBuffer {
    buf: Vec<u8>,
    capacity: usize,
    state: State,
    stats: ReceiverStats,
}

impl ReassemblyBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            state: State::AwaitingSync,
            stats: ReceiverStats::default(),
        }
    }

    /// Feed received bytes and hand every successfully decoded frame to
    /// `on_frame`, in stream order. Input larger than the buffer capacity is
    /// fed in capacity-sized pieces.
    pub fn process<F: FnMut(Frame)>(&mut self, data: &[u8], mut on_frame: F) {
        for chunk in data.chunks(self.capacity) {
            self.append(chunk);
            self.drain(&mut on_frame);
        }
    }

    /// Feed bytes and collect the decoded frames.
    pub fn push(&mut self, data: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        self.process(data, |f| frames.push(f));
        frames
    }

    fn append(&mut self, chunk: &[u8]) {
        if self.buf.len() + chunk.len() > self.capacity {
            warn!(
                "rx buffer overflow ({} + {} > {}), clearing",
                self.buf.len(),
                chunk.len(),
                self.capacity
            );
            self.buf.clear();
            self.state = State::AwaitingSync;
            self.stats.overflow_wipes += 1;
        }
        self.buf.extend_from_slice(chunk);
        self.stats.bytes_received += chunk.len() as u64;
    }

    fn drain<F: FnMut(Frame)>(&mut self, on_frame: &mut F) {
        loop {
            match self.state {
                State::AwaitingSync => {
                    match self.buf.iter().position(|&b| b == crate::constants::FRAME_SOF) {
                        None => {
                            if !self.buf.is_empty() {
                                debug!("no sof in {} buffered bytes, dropping", self.buf.len());
                                self.stats.noise_bytes += self.buf.len() as u64;
                                self.buf.clear();
                            }
                            return;
                        }
                        Some(idx) => {
                            if idx > 0 {
                                debug!("dropping {} noise bytes before sof", idx);
                                self.stats.noise_bytes += idx as u64;
                                self.consume(idx);
                            }
                            self.state = State::AwaitingHeader;
                        }
                    }
                }
                State::AwaitingHeader => {
                    if self.buf.len() < Frame::MIN_HEADER_LEN {
                        return;
                    }
                    let frame_len = Frame::expected_len(&self.buf);
                    if frame_len == 0 {
                        debug!("false sof, skipping one byte");
                        self.stats.false_syncs += 1;
                        self.consume(1);
                        self.state = State::AwaitingSync;
                        continue;
                    }
                    trace!("header ok, expecting {} byte frame", frame_len);
                    self.state = State::AwaitingPayload { frame_len };
                }
                State::AwaitingPayload { frame_len } => {
                    if self.buf.len() < frame_len {
                        return;
                    }
                    match Frame::decode(&self.buf[..frame_len]) {
                        Ok(frame) => {
                            self.stats.frames_decoded += 1;
                            on_frame(frame);
                        }
                        Err(e) => {
                            error!("failed to parse frame ({} bytes): {}", frame_len, e);
                            self.stats.frames_discarded += 1;
                        }
                    }
                    self.consume(frame_len);
                    self.state = State::AwaitingSync;
                }
            }
        }
    }

    fn consume(&mut self, n: usize) {
        let n = n.min(self.buf.len());
        self.buf.drain(..n);
    }

    /// Discard buffered bytes and any partial frame.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.state = State::AwaitingSync;
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffered bytes not yet consumed.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }
}
