// libchameleon/src/protocol/commands/lf.rs

use crate::types::Em410xId;

/// EM410X_SET_EMU_ID payload: id(5)
pub fn encode_em410x_set_emu_id(id: &Em410xId) -> Vec<u8> {
    id.as_bytes().to_vec()
}

/// EM410X_WRITE_TO_T55XX payload: id(5) + new_key(4) + old_keys(4 * n)
pub fn encode_em410x_write_t55xx(id: &Em410xId, new_key: [u8; 4], old_keys: &[[u8; 4]]) -> Vec<u8> {
    let mut v = Vec::with_capacity(9 + old_keys.len() * 4);
    v.extend_from_slice(id.as_bytes());
    v.extend_from_slice(&new_key);
    for k in old_keys {
        v.extend_from_slice(k);
    }
    v
}
