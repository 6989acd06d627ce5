// libchameleon/src/device/builder.rs

use std::time::Duration;

use crate::device::handle::{Connected, Device, Disconnected};
use crate::link::LinkConfig;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional link configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: LinkConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the byte pipe (serial, BLE or a MockTransport).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: LinkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_response_timeout(timeout);
        self
    }

    /// Consume the builder and return a disconnected Device. Requires a
    /// transport to be provided.
    pub fn build(self) -> Result<Device<Disconnected>> {
        match self.transport {
            Some(t) => Ok(Device::new(t, self.config)),
            None => Err(Error::InvalidArgument("no transport configured".into())),
        }
    }

    /// `build` followed by `connect`.
    pub fn connect(self) -> Result<Device<Connected>> {
        self.build()?.connect()
    }
}
