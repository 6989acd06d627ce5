// libchameleon/src/protocol/commands/device.rs

use crate::types::{DeviceMode, SenseType};

/// CHANGE_DEVICE_MODE payload: mode(1)
pub fn encode_change_device_mode(mode: DeviceMode) -> Vec<u8> {
    vec![mode as u8]
}

/// SET_ACTIVE_SLOT payload: slot(1)
pub fn encode_set_active_slot(slot: u8) -> Vec<u8> {
    vec![slot]
}

/// SET_SLOT_TAG_NICK payload: slot(1) + sense(1) + name(n)
pub fn encode_set_slot_nick(slot: u8, sense: SenseType, name: &str) -> Vec<u8> {
    let mut v = Vec::with_capacity(2 + name.len());
    v.push(slot);
    v.push(sense as u8);
    v.extend_from_slice(name.as_bytes());
    v
}

/// GET_SLOT_TAG_NICK payload: slot(1) + sense(1)
pub fn encode_get_slot_nick(slot: u8, sense: SenseType) -> Vec<u8> {
    vec![slot, sense as u8]
}
