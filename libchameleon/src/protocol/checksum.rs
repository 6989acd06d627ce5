// libchameleon/src/protocol/checksum.rs

/// Longitudinal redundancy check used by every frame check byte.
/// LRC = 0x100 - (sum(bytes) & 0xff)
pub fn lrc(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// True when `bytes` followed by `check` sums to zero modulo 256.
pub fn lrc_ok(bytes: &[u8], check: u8) -> bool {
    lrc(bytes) == check
}
