// libchameleon/src/transport/traits.rs

use crate::Result;
use crate::types::ConnectionType;

/// Receive callback installed by [`Transport::start_rx`]. Called with each
/// chunk exactly as it arrived; chunk boundaries carry no meaning.
pub type RxHandler = Box<dyn FnMut(&[u8]) + Send>;

/// Byte pipe to the device. Framing, correlation and retries live above
/// this trait; a transport only moves bytes.
pub trait Transport: Send {
    /// Write raw bytes to the device.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Start delivering received bytes to `handler`. Bytes arrive on the
    /// transport's own receive context, never on the caller's thread.
    fn start_rx(&mut self, handler: RxHandler) -> Result<()>;

    /// Stop delivering received bytes. The handler is not called after this
    /// returns, apart from a chunk already being handled.
    fn stop_rx(&mut self) -> Result<()>;

    fn connection_type(&self) -> ConnectionType;
}
