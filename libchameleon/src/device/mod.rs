// libchameleon/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod operations;

pub use builder::DeviceBuilder;
pub use handle::{Connected, Device, Disconnected};
