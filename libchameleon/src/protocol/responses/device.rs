// libchameleon/src/protocol/responses/device.rs

use crate::constants::SLOT_COUNT;
use crate::protocol::parser::{be_u16_at, be_u64_at, byte_at, ensure_len};
use crate::types::{AppVersion, DeviceMode, DeviceModel, SlotInfo, TagType};
use crate::{Error, Result};

/// GET_APP_VERSION: major(1) + minor(1)
pub fn decode_app_version(data: &[u8]) -> Result<AppVersion> {
    ensure_len(data, 2)?;
    Ok(AppVersion {
        major: data[0],
        minor: data[1],
    })
}

/// GET_DEVICE_CHIP_ID: 8-byte big-endian id
pub fn decode_chip_id(data: &[u8]) -> Result<u64> {
    be_u64_at(data, 0)
}

/// GET_DEVICE_MODEL: model(1)
pub fn decode_device_model(data: &[u8]) -> Result<DeviceModel> {
    DeviceModel::try_from(byte_at(data, 0)?)
}

/// GET_DEVICE_MODE: mode(1)
pub fn decode_device_mode(data: &[u8]) -> Result<DeviceMode> {
    DeviceMode::try_from(byte_at(data, 0)?)
}

/// GET_SLOT_INFO: for each of the 8 slots, hf(u16 BE) + lf(u16 BE)
pub fn decode_slot_info(data: &[u8]) -> Result<Vec<SlotInfo>> {
    let slots = SLOT_COUNT as usize;
    ensure_len(data, slots * 4)?;
    (0..slots)
        .map(|i| {
            Ok(SlotInfo {
                hf: TagType::new(be_u16_at(data, i * 4)?),
                lf: TagType::new(be_u16_at(data, i * 4 + 2)?),
            })
        })
        .collect()
}

/// GET_ACTIVE_SLOT: slot(1)
pub fn decode_active_slot(data: &[u8]) -> Result<u8> {
    let slot = byte_at(data, 0)?;
    if slot >= SLOT_COUNT {
        return Err(Error::FrameFormat(format!("slot {} out of range", slot)));
    }
    Ok(slot)
}

/// GET_SLOT_TAG_NICK: raw UTF-8 name; invalid sequences are replaced
pub fn decode_slot_nick(data: &[u8]) -> Result<String> {
    Ok(String::from_utf8_lossy(data).into_owned())
}
