use crate::device::{Connected, Device};
use crate::protocol::Command;
use crate::protocol::responses::{decode_hf14a_scan, decode_mf1_block};
use crate::types::{BlockData, Hf14aTag, KeyType, MifareKey};
use crate::{Error, Result};

/// Scan the HF field for ISO14443-A tags. The device must be in reader mode.
pub fn hf14a_scan(device: &Device<Connected>) -> Result<Vec<Hf14aTag>> {
    let resp = device.request(&Command::Hf14aScan)?;
    decode_hf14a_scan(resp.payload())
}

pub fn mf1_read_block(
    device: &Device<Connected>,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
) -> Result<BlockData> {
    let resp = device.request(&Command::Mf1ReadOneBlock {
        key_type,
        block,
        key: *key,
    })?;
    decode_mf1_block(resp.payload())
}

pub fn mf1_write_block(
    device: &Device<Connected>,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
    data: &BlockData,
) -> Result<()> {
    device.request(&Command::Mf1WriteOneBlock {
        key_type,
        block,
        key: *key,
        data: *data,
    })?;
    Ok(())
}

/// Load consecutive blocks into the active emulation slot, starting at
/// `start_block`.
pub fn mf1_write_emu_block(
    device: &Device<Connected>,
    start_block: u8,
    blocks: &[BlockData],
) -> Result<()> {
    if blocks.is_empty() {
        return Err(Error::InvalidArgument("no blocks to write".into()));
    }
    device.request(&Command::Mf1WriteEmuBlockData {
        start_block,
        blocks: blocks.to_vec(),
    })?;
    Ok(())
}
