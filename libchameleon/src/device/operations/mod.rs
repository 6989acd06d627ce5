pub mod hf;
pub mod info;
pub mod lf;

// Re-export every operation at the operations root so callers can write
// `operations::hf14a_scan(&device)`.
pub use hf::{hf14a_scan, mf1_read_block, mf1_write_block, mf1_write_emu_block};
pub use info::{
    active_slot, app_version, change_device_mode, chip_id, device_info, device_mode,
    device_model, set_active_slot, set_slot_nickname, slot_nickname, slots_info,
};
pub use lf::{em410x_get_emu_id, em410x_scan, em410x_set_emu_id, em410x_write_to_t55xx};
