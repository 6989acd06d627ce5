// libchameleon/src/protocol/responses/mod.rs
//! Typed decoders for response payloads. Each decoder receives the payload
//! of a `link::Response` whose status already matched the command's success
//! status, and returns an error (never panics) on malformed input.

pub mod device;
pub mod hf;
pub mod lf;

pub use device::{
    decode_active_slot, decode_app_version, decode_chip_id, decode_device_mode,
    decode_device_model, decode_slot_info, decode_slot_nick,
};
pub use hf::{decode_hf14a_scan, decode_mf1_block};
pub use lf::decode_em410x_id;
