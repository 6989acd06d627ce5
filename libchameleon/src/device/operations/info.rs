use log::debug;

use crate::constants::{MAX_NICKNAME_LEN, SLOT_COUNT};
use crate::device::{Connected, Device};
use crate::protocol::Command;
use crate::protocol::responses::{
    decode_active_slot, decode_app_version, decode_chip_id, decode_device_mode,
    decode_device_model, decode_slot_info, decode_slot_nick,
};
use crate::types::{AppVersion, DeviceInfo, DeviceMode, DeviceModel, SenseType, SlotInfo};
use crate::{Error, Result};

/// Query version, chip id, model and mode. Only the version is required;
/// the other fields are `None` when their query fails.
pub fn device_info(device: &Device<Connected>) -> Result<DeviceInfo> {
    let version = app_version(device)?;
    let chip_id = chip_id(device)
        .map_err(|e| debug!("chip id unavailable: {}", e))
        .ok();
    let model = device_model(device)
        .map_err(|e| debug!("device model unavailable: {}", e))
        .ok();
    let mode = device_mode(device)
        .map_err(|e| debug!("device mode unavailable: {}", e))
        .ok();
    Ok(DeviceInfo {
        version,
        chip_id,
        model,
        mode,
    })
}

pub fn app_version(device: &Device<Connected>) -> Result<AppVersion> {
    let resp = device.request(&Command::GetAppVersion)?;
    decode_app_version(resp.payload())
}

pub fn chip_id(device: &Device<Connected>) -> Result<u64> {
    let resp = device.request(&Command::GetDeviceChipId)?;
    decode_chip_id(resp.payload())
}

pub fn device_model(device: &Device<Connected>) -> Result<DeviceModel> {
    let resp = device.request(&Command::GetDeviceModel)?;
    decode_device_model(resp.payload())
}

pub fn device_mode(device: &Device<Connected>) -> Result<DeviceMode> {
    let resp = device.request(&Command::GetDeviceMode)?;
    decode_device_mode(resp.payload())
}

pub fn change_device_mode(device: &Device<Connected>, mode: DeviceMode) -> Result<()> {
    device.request(&Command::ChangeDeviceMode { mode })?;
    Ok(())
}

/// Tag types of all eight slots, in slot order.
pub fn slots_info(device: &Device<Connected>) -> Result<Vec<SlotInfo>> {
    let resp = device.request(&Command::GetSlotInfo)?;
    decode_slot_info(resp.payload())
}

pub fn active_slot(device: &Device<Connected>) -> Result<u8> {
    let resp = device.request(&Command::GetActiveSlot)?;
    decode_active_slot(resp.payload())
}

fn check_slot(slot: u8) -> Result<()> {
    if slot >= SLOT_COUNT {
        return Err(Error::InvalidArgument(format!(
            "slot {} out of range (0..{})",
            slot, SLOT_COUNT
        )));
    }
    Ok(())
}

pub fn set_active_slot(device: &Device<Connected>, slot: u8) -> Result<()> {
    check_slot(slot)?;
    device.request(&Command::SetActiveSlot { slot })?;
    Ok(())
}

pub fn set_slot_nickname(
    device: &Device<Connected>,
    slot: u8,
    sense: SenseType,
    name: &str,
) -> Result<()> {
    check_slot(slot)?;
    if name.len() > MAX_NICKNAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "nickname is {} bytes (max {})",
            name.len(),
            MAX_NICKNAME_LEN
        )));
    }
    device.request(&Command::SetSlotTagNick {
        slot,
        sense,
        name: name.to_owned(),
    })?;
    Ok(())
}

pub fn slot_nickname(device: &Device<Connected>, slot: u8, sense: SenseType) -> Result<String> {
    check_slot(slot)?;
    let resp = device.request(&Command::GetSlotTagNick { slot, sense })?;
    decode_slot_nick(resp.payload())
}
