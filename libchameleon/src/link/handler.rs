// libchameleon/src/link/handler.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use parking_lot::RwLock;

use super::{FrameReceiver, LinkConfig, Response, ResponseQueue};

/// Callback fired for every decoded response, on the receive path's thread.
pub type NotificationSink = Arc<dyn Fn(&Response) + Send + Sync>;

struct HandlerInner {
    queue: ResponseQueue,
    sink: RwLock<Option<NotificationSink>>,
    reset_epoch: AtomicU64,
    config: LinkConfig,
}

/// Shared correlation side of the link: the response queue, the optional
/// notification sink and the blocking wait used by every command.
///
/// Cloning is cheap and every clone refers to the same queue; hand one to
/// each command-issuing caller and build the receive path with
/// [`ResponseHandler::receiver`].
#[derive(Clone)]
pub struct ResponseHandler {
    inner: Arc<HandlerInner>,
}

impl ResponseHandler {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            inner: Arc::new(HandlerInner {
                queue: ResponseQueue::new(config.queue_capacity),
                sink: RwLock::new(None),
                reset_epoch: AtomicU64::new(0),
                config,
            }),
        }
    }

    /// Build the receive-path half that feeds this handler.
    pub fn receiver(&self) -> FrameReceiver {
        FrameReceiver::new(self.clone(), self.inner.config.rx_capacity)
    }

    pub fn config(&self) -> &LinkConfig {
        &self.inner.config
    }

    /// Queue a decoded response, then fire the notification sink. The sink
    /// runs after the queue lock is released.
    pub fn deliver(&self, response: Response) {
        info!(
            "received response: cmd={}, status={:#06x}, len={}",
            response.command(),
            response.status(),
            response.payload_len()
        );
        let sink = self.inner.sink.read().clone();
        match sink {
            Some(sink) => {
                self.inner.queue.push(response.clone());
                sink(&response);
            }
            None => {
                self.inner.queue.push(response);
            }
        }
    }

    /// Register the callback invoked for every decoded response, replacing
    /// any previous one. The callback may call back into this handler.
    pub fn set_notification_sink<F>(&self, sink: F)
    where
        F: Fn(&Response) + Send + Sync + 'static,
    {
        *self.inner.sink.write() = Some(Arc::new(sink));
    }

    pub fn clear_notification_sink(&self) {
        *self.inner.sink.write() = None;
    }

    /// Non-blocking lookup: remove and return the oldest queued response for
    /// `command`.
    pub fn get_response(&self, command: u16) -> Option<Response> {
        self.inner.queue.find_and_pop(command)
    }

    /// Poll the queue for a response to `command` until one arrives or
    /// `timeout` elapses. Blocks the calling thread, sleeping for the
    /// configured poll interval between scans.
    ///
    /// Matching is by command id only: with two requests for the same
    /// command in flight, the oldest queued response goes to whichever
    /// caller scans first.
    pub fn wait_for_response(&self, command: u16, timeout: Duration) -> Option<Response> {
        let start = Instant::now();
        loop {
            if let Some(response) = self.inner.queue.find_and_pop(command) {
                debug!(
                    "matched response for cmd={} after {:?}",
                    command,
                    start.elapsed()
                );
                return Some(response);
            }
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                warn!("timeout waiting for response to cmd={}", command);
                return None;
            }
            std::thread::sleep(self.inner.config.poll_interval.min(timeout - elapsed));
        }
    }

    /// `wait_for_response` with the timeout given in milliseconds.
    pub fn wait_for_response_ms(&self, command: u16, timeout_ms: u64) -> Option<Response> {
        self.wait_for_response(command, crate::utils::ms(timeout_ms))
    }

    /// Async variant of [`wait_for_response`](Self::wait_for_response):
    /// same matching and timeout contract, sleeping on the tokio timer
    /// instead of the thread.
    #[cfg(feature = "async")]
    pub async fn wait_for_response_async(
        &self,
        command: u16,
        timeout: Duration,
    ) -> Option<Response> {
        let start = Instant::now();
        loop {
            if let Some(response) = self.inner.queue.find_and_pop(command) {
                return Some(response);
            }
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                warn!("timeout waiting for response to cmd={}", command);
                return None;
            }
            tokio::time::sleep(self.inner.config.poll_interval.min(timeout - elapsed)).await;
        }
    }

    /// Drop every queued response and ask the receive path to discard any
    /// partially reassembled frame before it handles more data.
    pub fn clear(&self) {
        self.inner.queue.clear();
        self.inner.reset_epoch.fetch_add(1, Ordering::AcqRel);
        info!("response queue cleared");
    }

    pub(crate) fn reset_epoch(&self) -> u64 {
        self.inner.reset_epoch.load(Ordering::Acquire)
    }

    pub fn queued(&self) -> usize {
        self.inner.queue.len()
    }

    pub fn evicted_count(&self) -> u64 {
        self.inner.queue.evicted_count()
    }
}

impl Default for ResponseHandler {
    fn default() -> Self {
        Self::new(LinkConfig::default())
    }
}

impl std::fmt::Debug for ResponseHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseHandler")
            .field("queued", &self.queued())
            .field("config", &self.inner.config)
            .finish()
    }
}
