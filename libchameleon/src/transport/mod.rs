// libchameleon/src/transport/mod.rs

pub mod ble;
pub mod mock;
pub mod stream;
pub mod traits;

pub use ble::BleTransport;
pub use mock::{MockInjector, MockTransport, SentLog};
pub use stream::{ReaderSource, SerialTransport, StreamTransport, open_serial};
pub use traits::{RxHandler, Transport};
