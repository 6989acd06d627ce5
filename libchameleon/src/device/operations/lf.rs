use crate::device::{Connected, Device};
use crate::protocol::Command;
use crate::protocol::responses::decode_em410x_id;
use crate::types::Em410xId;
use crate::Result;

pub fn em410x_scan(device: &Device<Connected>) -> Result<Em410xId> {
    let resp = device.request(&Command::Em410xScan)?;
    decode_em410x_id(resp.payload())
}

/// Clone `id` onto a T55xx tag, unlocking it with each of `old_keys` and
/// protecting it with `new_key`. See `constants::T55XX_DEFAULT_*` for the
/// usual keys.
pub fn em410x_write_to_t55xx(
    device: &Device<Connected>,
    id: &Em410xId,
    new_key: [u8; 4],
    old_keys: &[[u8; 4]],
) -> Result<()> {
    device.request(&Command::Em410xWriteToT55xx {
        id: *id,
        new_key,
        old_keys: old_keys.to_vec(),
    })?;
    Ok(())
}

pub fn em410x_set_emu_id(device: &Device<Connected>, id: &Em410xId) -> Result<()> {
    device.request(&Command::Em410xSetEmuId { id: *id })?;
    Ok(())
}

pub fn em410x_get_emu_id(device: &Device<Connected>) -> Result<Em410xId> {
    let resp = device.request(&Command::Em410xGetEmuId)?;
    decode_em410x_id(resp.payload())
}
