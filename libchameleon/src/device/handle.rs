// libchameleon/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::link::{LinkConfig, Response, ResponseHandler};
use crate::protocol::codec;
use crate::protocol::{Command, status};
use crate::transport::Transport;
use crate::types::ConnectionType;
use crate::{Error, Result};

/// Type-state markers
pub struct Disconnected;
pub struct Connected;

/// Handle to one device. The receive path only runs in the `Connected`
/// state, so commands cannot be issued before it is wired up.
///
/// Commands take `&self`: several threads may share a connected device and
/// issue commands concurrently. The transport lock is held only while bytes
/// are written; responses are matched to callers by command id.
pub struct Device<State = Disconnected> {
    transport: Mutex<Box<dyn Transport>>,
    handler: ResponseHandler,
    response_timeout: Duration,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    fn into_state<Next>(self) -> Device<Next> {
        Device {
            transport: self.transport,
            handler: self.handler,
            response_timeout: self.response_timeout,
            _state: PhantomData,
        }
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.transport.lock().connection_type()
    }

    /// Shared correlation state; clones see the same response queue.
    pub fn handler(&self) -> &ResponseHandler {
        &self.handler
    }

    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }
}

impl Device<Disconnected> {
    pub fn new(transport: Box<dyn Transport>, config: LinkConfig) -> Self {
        let response_timeout = config.response_timeout;
        Self {
            transport: Mutex::new(transport),
            handler: ResponseHandler::new(config),
            response_timeout,
            _state: PhantomData,
        }
    }

    /// Start the transport's receive path, feeding a fresh frame receiver.
    pub fn connect(mut self) -> Result<Device<Connected>> {
        let mut receiver = self.handler.receiver();
        let transport = self.transport.get_mut();
        transport.start_rx(Box::new(move |chunk| receiver.process_data(chunk)))?;
        info!("connected over {}", transport.connection_type());
        Ok(self.into_state())
    }
}

impl Device<Connected> {
    /// Stop the receive path and drop every queued response.
    pub fn disconnect(mut self) -> Result<Device<Disconnected>> {
        self.transport.get_mut().stop_rx()?;
        self.handler.clear();
        info!("disconnected");
        Ok(self.into_state())
    }

    /// Send one request frame without waiting for its response.
    pub fn send_command(&self, command_id: u16, payload: &[u8]) -> Result<()> {
        let frame = codec::encode_request(command_id, payload)?;
        self.send_raw(command_id, &frame)
    }

    fn send_raw(&self, command_id: u16, frame: &[u8]) -> Result<()> {
        debug!("sending cmd={} ({} bytes)", command_id, frame.len());
        self.transport.lock().send(frame).map_err(|e| {
            warn!("send failed for cmd={}: {}", command_id, e);
            e
        })
    }

    /// Wait for the oldest queued response to `command_id`.
    pub fn wait_for_response(&self, command_id: u16, timeout: Duration) -> Option<Response> {
        self.handler.wait_for_response(command_id, timeout)
    }

    /// Encode, send, wait for the matching response and check its status
    /// against the command's success status.
    pub fn execute(&self, cmd: &Command, timeout: Duration) -> Result<Response> {
        let command_id = cmd.command_id();
        let frame = codec::encode_command_frame(cmd)?;
        self.send_raw(command_id, &frame)?;

        let response = self
            .handler
            .wait_for_response(command_id, timeout)
            .ok_or(Error::Timeout {
                command: command_id,
                timeout_ms: timeout.as_millis() as u64,
            })?;

        let expected = cmd.success_status();
        if response.status() != expected {
            debug!(
                "cmd={} answered {:#06x} ({})",
                command_id,
                response.status(),
                status::describe(response.status())
            );
        }
        response.expect_status(expected)
    }

    /// `execute` with the configured response timeout.
    pub fn request(&self, cmd: &Command) -> Result<Response> {
        self.execute(cmd, self.response_timeout)
    }

    /// Observe every decoded response, including unsolicited ones.
    ///
    /// The sink runs on the receive path. Transports that deliver bytes
    /// synchronously from `send` (such as [`MockTransport`]) call it while this
    /// device's transport lock is held, so the sink must not issue commands on
    /// the same device: `send_command`, `execute` and `request` would deadlock.
    /// Reading the [`ResponseHandler`] from the sink is fine. Hand work that
    /// needs the device to another thread, for example over a channel.
    ///
    /// [`MockTransport`]: crate::transport::MockTransport
    pub fn set_notification_sink<F>(&self, sink: F)
    where
        F: Fn(&Response) + Send + Sync + 'static,
    {
        self.handler.set_notification_sink(sink);
    }

    pub fn clear_notification_sink(&self) {
        self.handler.clear_notification_sink();
    }
}

impl<State> std::fmt::Debug for Device<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("state", &std::any::type_name::<State>())
            .field("handler", &self.handler)
            .finish()
    }
}
