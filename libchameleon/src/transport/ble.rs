// libchameleon/src/transport/ble.rs

use log::warn;

use crate::constants::{NUS_RX_CHAR_UUID, NUS_SERVICE_UUID, NUS_TX_CHAR_UUID};
use crate::transport::traits::{RxHandler, Transport};
use crate::types::ConnectionType;
use crate::{Error, Result};

/// Placeholder for the wireless channel. The device exposes the Nordic UART
/// Service: the host writes frames to the RX characteristic and subscribes
/// to notifications on the TX characteristic. No BLE stack is linked in, so
/// every I/O call fails.
#[derive(Debug, Default, Clone)]
pub struct BleTransport {
    address: Option<String>,
}

impl BleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Discover advertising devices.
    pub fn scan(&self) -> Result<Vec<String>> {
        Err(Error::UnsupportedOperation(
            "BLE scanning is not available in this build".into(),
        ))
    }

    pub fn service_uuid() -> &'static str {
        NUS_SERVICE_UUID
    }

    /// Characteristic the host writes requests to.
    pub fn write_char_uuid() -> &'static str {
        NUS_RX_CHAR_UUID
    }

    /// Characteristic the device notifies responses on.
    pub fn notify_char_uuid() -> &'static str {
        NUS_TX_CHAR_UUID
    }
}

impl Transport for BleTransport {
    fn send(&mut self, _data: &[u8]) -> Result<()> {
        Err(Error::NotConnected)
    }

    fn start_rx(&mut self, _handler: RxHandler) -> Result<()> {
        warn!("BLE receive requested but no BLE stack is available");
        Err(Error::NotConnected)
    }

    fn stop_rx(&mut self) -> Result<()> {
        Ok(())
    }

    fn connection_type(&self) -> ConnectionType {
        ConnectionType::Ble
    }
}
