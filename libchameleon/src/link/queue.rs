// libchameleon/src/link/queue.rs

use std::collections::VecDeque;

use log::warn;
use parking_lot::Mutex;

use super::Response;

struct QueueState {
    entries: VecDeque<Response>,
    evicted: u64,
}

/// Bounded FIFO of decoded responses, looked up by command id.
///
/// `push` and `find_and_pop` each run entirely under one lock, so the
/// receive path and any number of waiting callers can share the queue.
/// When full, `push` evicts the single oldest entry before admitting the
/// new one.
pub struct ResponseQueue {
    state: Mutex<QueueState>,
    capacity: usize,
}

impl ResponseQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            state: Mutex::new(QueueState {
                entries: VecDeque::with_capacity(capacity),
                evicted: 0,
            }),
            capacity,
        }
    }

    /// Append at the tail, evicting the oldest entry first when full.
    /// Returns the evicted response, if any.
    pub fn push(&self, response: Response) -> Option<Response> {
        let mut state = self.state.lock();
        let evicted = if state.entries.len() >= self.capacity {
            let old = state.entries.pop_front();
            state.evicted += 1;
            if let Some(old) = &old {
                warn!(
                    "response queue full, dropping oldest response (cmd={}, status={:#06x})",
                    old.command(),
                    old.status()
                );
            }
            old
        } else {
            None
        };
        state.entries.push_back(response);
        evicted
    }

    /// Remove and return the oldest valid entry for `command`, keeping the
    /// relative order of everything else.
    pub fn find_and_pop(&self, command: u16) -> Option<Response> {
        let mut state = self.state.lock();
        let idx = state
            .entries
            .iter()
            .position(|r| r.command() == command && r.is_valid())?;
        state.entries.remove(idx)
    }

    /// Drop every queued entry.
    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of entries lost to eviction since creation.
    pub fn evicted_count(&self) -> u64 {
        self.state.lock().evicted
    }

    /// Command ids currently queued, oldest first.
    pub fn pending_commands(&self) -> Vec<u16> {
        self.state.lock().entries.iter().map(Response::command).collect()
    }
}
