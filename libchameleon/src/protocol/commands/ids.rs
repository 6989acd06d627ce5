// libchameleon/src/protocol/commands/ids.rs
//! Command identifiers (16-bit, big endian on the wire)

pub const GET_APP_VERSION: u16 = 1000;
pub const CHANGE_DEVICE_MODE: u16 = 1001;
pub const GET_DEVICE_MODE: u16 = 1002;
pub const SET_ACTIVE_SLOT: u16 = 1003;
pub const SET_SLOT_TAG_NICK: u16 = 1007;
pub const GET_SLOT_TAG_NICK: u16 = 1008;
pub const GET_DEVICE_CHIP_ID: u16 = 1011;
pub const GET_ACTIVE_SLOT: u16 = 1018;
pub const GET_SLOT_INFO: u16 = 1019;
pub const GET_DEVICE_MODEL: u16 = 1033;

pub const HF14A_SCAN: u16 = 2000;
pub const MF1_READ_ONE_BLOCK: u16 = 2008;
pub const MF1_WRITE_ONE_BLOCK: u16 = 2009;

pub const EM410X_SCAN: u16 = 3000;
pub const EM410X_WRITE_TO_T55XX: u16 = 3001;

pub const MF1_WRITE_EMU_BLOCK_DATA: u16 = 4000;

pub const EM410X_SET_EMU_ID: u16 = 5000;
pub const EM410X_GET_EMU_ID: u16 = 5001;
