//! Hex formatting for log lines and `Display` impls, plus a forgiving parser
//! for ids and keys typed on a command line.

use std::fmt::Write;

/// Uppercase hex without separators, as UIDs and EM410x ids are usually
/// written: `&[0xde, 0xad]` -> `"DEAD"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Lowercase hex with one space between bytes, used when logging raw frames:
/// `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes. Whitespace, `:` separators and an optional
/// `0x` prefix are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}

/// Parse exactly `N` bytes of hex, e.g. a 6-byte MIFARE key.
pub fn parse_hex_array<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let bytes = parse_hex(s)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| format!("expected {} bytes, got {}", N, bytes.len()))
}
