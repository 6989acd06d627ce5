// libchameleon/src/types.rs

use crate::Error;
use crate::constants::{EM410X_ID_LEN, MF1_BLOCK_SIZE};
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ISO14443-A UID - Newtype Pattern (4, 7 or 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub const MAX_LEN: usize = 10;

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MAX_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// MIFARE Classic block (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockData([u8; MF1_BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MF1_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MF1_BLOCK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != MF1_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: MF1_BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MF1_BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// EM410X card identifier (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Em410xId([u8; EM410X_ID_LEN]);

impl Em410xId {
    pub fn from_bytes(bytes: [u8; EM410X_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; EM410X_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Em410xId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != EM410X_ID_LEN {
            return Err(Error::InvalidLength {
                expected: EM410X_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; EM410X_ID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default key FF FF FF FF FF FF
    pub const DEFAULT: Self = Self([0xff; 6]);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// MIFARE authentication key selector as sent on the wire
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyType {
    A = 0x60,
    B = 0x61,
}

/// Whether the device emulates tags or acts as a reader
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceMode {
    #[display(fmt = "tag")]
    Tag = 0,
    #[display(fmt = "reader")]
    Reader = 1,
}

impl TryFrom<u8> for DeviceMode {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Tag),
            1 => Ok(Self::Reader),
            other => Err(Error::FrameFormat(format!("unknown device mode {}", other))),
        }
    }
}

/// Hardware model
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceModel {
    #[display(fmt = "Ultra")]
    Ultra = 0,
    #[display(fmt = "Lite")]
    Lite = 1,
}

impl TryFrom<u8> for DeviceModel {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Ultra),
            1 => Ok(Self::Lite),
            other => Err(Error::FrameFormat(format!("unknown device model {}", other))),
        }
    }
}

/// Which antenna a slot setting refers to
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SenseType {
    Lf = 1,
    Hf = 2,
}

/// Tag type configured in an emulation slot (u16 on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagType(u16);

impl TagType {
    pub const UNDEFINED: Self = Self(0);
    pub const EM410X: Self = Self(100);
    pub const MIFARE_MINI: Self = Self(1000);
    pub const MIFARE_1024: Self = Self(1001);
    pub const MIFARE_2048: Self = Self(1002);
    pub const MIFARE_4096: Self = Self(1003);
    pub const NTAG_213: Self = Self(1100);
    pub const NTAG_215: Self = Self(1101);
    pub const NTAG_216: Self = Self(1102);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_defined(&self) -> bool {
        self.0 != 0
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Self::UNDEFINED => "undefined",
            Self::EM410X => "EM410X",
            Self::MIFARE_MINI => "MIFARE Mini",
            Self::MIFARE_1024 => "MIFARE Classic 1K",
            Self::MIFARE_2048 => "MIFARE Classic 2K",
            Self::MIFARE_4096 => "MIFARE Classic 4K",
            Self::NTAG_213 => "NTAG213",
            Self::NTAG_215 => "NTAG215",
            Self::NTAG_216 => "NTAG216",
            _ => "unknown",
        }
    }
}

/// Tag types configured in one emulation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotInfo {
    pub hf: TagType,
    pub lf: TagType,
}

/// Firmware application version
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{}.{}", major, minor)]
pub struct AppVersion {
    pub major: u8,
    pub minor: u8,
}

/// Aggregate of the device identification queries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceInfo {
    pub version: AppVersion,
    pub chip_id: Option<u64>,
    pub model: Option<DeviceModel>,
    pub mode: Option<DeviceMode>,
}

/// One ISO14443-A tag reported by an HF scan
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hf14aTag {
    pub uid: Uid,
    pub atqa: [u8; 2],
    pub sak: u8,
    pub ats: Vec<u8>,
}

/// Physical link the device is reached over
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConnectionType {
    #[display(fmt = "usb")]
    Usb,
    #[display(fmt = "ble")]
    Ble,
    #[display(fmt = "mock")]
    Mock,
}
