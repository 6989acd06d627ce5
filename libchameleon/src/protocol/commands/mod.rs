// libchameleon/src/protocol/commands/mod.rs

pub mod device;
pub mod hf;
pub mod ids;
pub mod lf;

pub use device::{
    encode_change_device_mode, encode_get_slot_nick, encode_set_active_slot, encode_set_slot_nick,
};
pub use hf::{encode_mf1_read_block, encode_mf1_write_block, encode_mf1_write_emu_blocks};
pub use lf::{encode_em410x_set_emu_id, encode_em410x_write_t55xx};

use crate::protocol::status;
use crate::types::{BlockData, DeviceMode, Em410xId, KeyType, MifareKey, SenseType};

/// High-level Command enum. New commands should be added here and
/// their payload encoder placed in `protocol::commands::<family>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetAppVersion,
    ChangeDeviceMode {
        mode: DeviceMode,
    },
    GetDeviceMode,
    SetActiveSlot {
        slot: u8,
    },
    SetSlotTagNick {
        slot: u8,
        sense: SenseType,
        name: String,
    },
    GetSlotTagNick {
        slot: u8,
        sense: SenseType,
    },
    GetDeviceChipId,
    GetActiveSlot,
    GetSlotInfo,
    GetDeviceModel,
    Hf14aScan,
    Mf1ReadOneBlock {
        key_type: KeyType,
        block: u8,
        key: MifareKey,
    },
    Mf1WriteOneBlock {
        key_type: KeyType,
        block: u8,
        key: MifareKey,
        data: BlockData,
    },
    Em410xScan,
    Em410xWriteToT55xx {
        id: Em410xId,
        new_key: [u8; 4],
        old_keys: Vec<[u8; 4]>,
    },
    Mf1WriteEmuBlockData {
        start_block: u8,
        blocks: Vec<BlockData>,
    },
    Em410xSetEmuId {
        id: Em410xId,
    },
    Em410xGetEmuId,
}

impl Command {
    /// Return the 16-bit command identifier.
    pub fn command_id(&self) -> u16 {
        match self {
            Self::GetAppVersion => ids::GET_APP_VERSION,
            Self::ChangeDeviceMode { .. } => ids::CHANGE_DEVICE_MODE,
            Self::GetDeviceMode => ids::GET_DEVICE_MODE,
            Self::SetActiveSlot { .. } => ids::SET_ACTIVE_SLOT,
            Self::SetSlotTagNick { .. } => ids::SET_SLOT_TAG_NICK,
            Self::GetSlotTagNick { .. } => ids::GET_SLOT_TAG_NICK,
            Self::GetDeviceChipId => ids::GET_DEVICE_CHIP_ID,
            Self::GetActiveSlot => ids::GET_ACTIVE_SLOT,
            Self::GetSlotInfo => ids::GET_SLOT_INFO,
            Self::GetDeviceModel => ids::GET_DEVICE_MODEL,
            Self::Hf14aScan => ids::HF14A_SCAN,
            Self::Mf1ReadOneBlock { .. } => ids::MF1_READ_ONE_BLOCK,
            Self::Mf1WriteOneBlock { .. } => ids::MF1_WRITE_ONE_BLOCK,
            Self::Em410xScan => ids::EM410X_SCAN,
            Self::Em410xWriteToT55xx { .. } => ids::EM410X_WRITE_TO_T55XX,
            Self::Mf1WriteEmuBlockData { .. } => ids::MF1_WRITE_EMU_BLOCK_DATA,
            Self::Em410xSetEmuId { .. } => ids::EM410X_SET_EMU_ID,
            Self::Em410xGetEmuId => ids::EM410X_GET_EMU_ID,
        }
    }

    /// Status the device answers with when this command succeeds.
    pub fn success_status(&self) -> u16 {
        match self {
            Self::Hf14aScan | Self::Mf1ReadOneBlock { .. } | Self::Mf1WriteOneBlock { .. } => {
                status::HF_TAG_OK
            }
            Self::Em410xScan | Self::Em410xWriteToT55xx { .. } => status::LF_TAG_OK,
            _ => status::SUCCESS,
        }
    }

    /// Encode the command parameters into the frame payload.
    pub fn encode_payload(&self) -> Vec<u8> {
        match self {
            Self::ChangeDeviceMode { mode } => encode_change_device_mode(*mode),
            Self::SetActiveSlot { slot } => encode_set_active_slot(*slot),
            Self::SetSlotTagNick { slot, sense, name } => encode_set_slot_nick(*slot, *sense, name),
            Self::GetSlotTagNick { slot, sense } => encode_get_slot_nick(*slot, *sense),
            Self::Mf1ReadOneBlock {
                key_type,
                block,
                key,
            } => encode_mf1_read_block(*key_type, *block, key),
            Self::Mf1WriteOneBlock {
                key_type,
                block,
                key,
                data,
            } => encode_mf1_write_block(*key_type, *block, key, data),
            Self::Em410xWriteToT55xx {
                id,
                new_key,
                old_keys,
            } => encode_em410x_write_t55xx(id, *new_key, &old_keys[..]),
            Self::Mf1WriteEmuBlockData {
                start_block,
                blocks,
            } => encode_mf1_write_emu_blocks(*start_block, &blocks[..]),
            Self::Em410xSetEmuId { id } => encode_em410x_set_emu_id(id),
            Self::GetAppVersion
            | Self::GetDeviceMode
            | Self::GetDeviceChipId
            | Self::GetActiveSlot
            | Self::GetSlotInfo
            | Self::GetDeviceModel
            | Self::Hf14aScan
            | Self::Em410xScan
            | Self::Em410xGetEmuId => Vec::new(),
        }
    }
}
