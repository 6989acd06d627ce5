// libchameleon/src/protocol/status.rs
//! Device status codes. Success is command-family specific: HF reader
//! commands answer `HF_TAG_OK`, LF reader commands `LF_TAG_OK`, everything
//! else `SUCCESS`.

pub const HF_TAG_OK: u16 = 0x00;
pub const HF_TAG_NO: u16 = 0x01;
pub const HF_ERR_STAT: u16 = 0x02;
pub const HF_ERR_CRC: u16 = 0x03;
pub const HF_COLLISION: u16 = 0x04;
pub const HF_ERR_BCC: u16 = 0x05;
pub const MF_ERR_AUTH: u16 = 0x06;
pub const HF_ERR_PARITY: u16 = 0x07;
pub const HF_ERR_ATS: u16 = 0x08;

pub const LF_TAG_OK: u16 = 0x40;
pub const LF_TAG_NO_FOUND: u16 = 0x41;

pub const PAR_ERR: u16 = 0x60;
pub const DEVICE_MODE_ERROR: u16 = 0x66;
pub const INVALID_CMD: u16 = 0x67;
pub const SUCCESS: u16 = 0x68;
pub const NOT_IMPLEMENTED: u16 = 0x69;
pub const FLASH_WRITE_FAIL: u16 = 0x70;
pub const FLASH_READ_FAIL: u16 = 0x71;
pub const INVALID_SLOT_TYPE: u16 = 0x72;

/// Human readable name for a status code, for logs.
pub fn describe(status: u16) -> &'static str {
    match status {
        HF_TAG_OK => "HF tag ok",
        HF_TAG_NO => "no HF tag",
        HF_ERR_STAT => "HF status error",
        HF_ERR_CRC => "HF crc error",
        HF_COLLISION => "HF collision",
        HF_ERR_BCC => "HF bcc error",
        MF_ERR_AUTH => "MIFARE auth failed",
        HF_ERR_PARITY => "HF parity error",
        HF_ERR_ATS => "HF ats error",
        LF_TAG_OK => "LF tag ok",
        LF_TAG_NO_FOUND => "no LF tag",
        PAR_ERR => "parameter error",
        DEVICE_MODE_ERROR => "wrong device mode",
        INVALID_CMD => "invalid command",
        SUCCESS => "success",
        NOT_IMPLEMENTED => "not implemented",
        FLASH_WRITE_FAIL => "flash write failed",
        FLASH_READ_FAIL => "flash read failed",
        INVALID_SLOT_TYPE => "invalid slot type",
        _ => "unknown status",
    }
}
