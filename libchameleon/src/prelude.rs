// libchameleon/src/prelude.rs

pub use crate::device::operations;
pub use crate::device::{Connected, Device, DeviceBuilder, Disconnected};
pub use crate::link::{LinkConfig, Response, ResponseHandler};
pub use crate::protocol::{Command, Frame};
pub use crate::transport::{MockTransport, SerialTransport, StreamTransport, Transport, open_serial};
pub use crate::{
    AppVersion, BlockData, ConnectionType, DeviceInfo, DeviceMode, DeviceModel, Em410xId, Error,
    Hf14aTag, KeyType, MifareKey, Result, SenseType, SlotInfo, TagType, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_response_timeout, ms, parse_hex};
