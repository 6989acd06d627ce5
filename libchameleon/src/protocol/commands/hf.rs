// libchameleon/src/protocol/commands/hf.rs

use crate::types::{BlockData, KeyType, MifareKey};

/// MF1_READ_ONE_BLOCK payload: key_type(1) + block(1) + key(6)
pub fn encode_mf1_read_block(key_type: KeyType, block: u8, key: &MifareKey) -> Vec<u8> {
    let mut v = Vec::with_capacity(8);
    v.push(key_type as u8);
    v.push(block);
    v.extend_from_slice(key.as_bytes());
    v
}

/// MF1_WRITE_ONE_BLOCK payload: key_type(1) + block(1) + key(6) + data(16)
pub fn encode_mf1_write_block(
    key_type: KeyType,
    block: u8,
    key: &MifareKey,
    data: &BlockData,
) -> Vec<u8> {
    let mut v = encode_mf1_read_block(key_type, block, key);
    v.extend_from_slice(data.as_bytes());
    v
}

/// MF1_WRITE_EMU_BLOCK_DATA payload: start_block(1) + data(16 * n)
pub fn encode_mf1_write_emu_blocks(start_block: u8, blocks: &[BlockData]) -> Vec<u8> {
    let mut v = Vec::with_capacity(1 + blocks.len() * 16);
    v.push(start_block);
    for b in blocks {
        v.extend_from_slice(b.as_bytes());
    }
    v
}
