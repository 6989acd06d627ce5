// libchameleon/src/protocol/responses/hf.rs

use crate::constants::MF1_BLOCK_SIZE;
use crate::protocol::parser::{byte_at, ensure_exact_len, slice_at};
use crate::types::{BlockData, Hf14aTag, Uid};
use crate::{Error, Result};

/// HF14A_SCAN: repeated uid_len(1) + uid(n) + atqa(2) + sak(1) + ats_len(1) + ats(m)
pub fn decode_hf14a_scan(data: &[u8]) -> Result<Vec<Hf14aTag>> {
    let mut tags = Vec::new();
    let mut pos = 0usize;
    while pos < data.len() {
        let uid_len = byte_at(data, pos)? as usize;
        if uid_len == 0 || uid_len > Uid::MAX_LEN {
            return Err(Error::FrameFormat(format!("invalid uid length {}", uid_len)));
        }
        pos += 1;
        let uid = Uid::try_from(slice_at(data, pos, uid_len)?)?;
        pos += uid_len;
        let atqa_s = slice_at(data, pos, 2)?;
        let atqa = [atqa_s[0], atqa_s[1]];
        pos += 2;
        let sak = byte_at(data, pos)?;
        pos += 1;
        let ats_len = byte_at(data, pos)? as usize;
        pos += 1;
        let ats = slice_at(data, pos, ats_len)?.to_vec();
        pos += ats_len;
        tags.push(Hf14aTag {
            uid,
            atqa,
            sak,
            ats,
        });
    }
    if tags.is_empty() {
        return Err(Error::InvalidLength {
            expected: 8,
            actual: 0,
        });
    }
    Ok(tags)
}

/// MF1_READ_ONE_BLOCK: exactly one 16-byte block
pub fn decode_mf1_block(data: &[u8]) -> Result<BlockData> {
    ensure_exact_len(data, MF1_BLOCK_SIZE)?;
    BlockData::try_from(data)
}
