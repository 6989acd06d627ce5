// libchameleon/src/protocol/responses/lf.rs

use crate::constants::EM410X_ID_LEN;
use crate::protocol::parser::ensure_exact_len;
use crate::types::Em410xId;
use crate::Result;

/// EM410X_SCAN / EM410X_GET_EMU_ID: exactly 5 bytes
pub fn decode_em410x_id(data: &[u8]) -> Result<Em410xId> {
    ensure_exact_len(data, EM410X_ID_LEN)?;
    Em410xId::try_from(data)
}
