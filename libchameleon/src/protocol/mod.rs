// libchameleon/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use checksum::{lrc, lrc_ok};
pub use codec::{encode_command_frame, encode_request};
pub use commands::{Command, ids};
pub use frame::Frame;
