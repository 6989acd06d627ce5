// fixtures.rs: commonly used frames and payloads

use libchameleon::protocol::{Frame, ids, status};

/// GET_APP_VERSION request exactly as the host puts it on the wire.
pub fn app_version_request() -> Vec<u8> {
    hex::decode("11ef03e8000000001500").unwrap()
}

pub fn response_frame(command: u16, status: u16, payload: &[u8]) -> Vec<u8> {
    Frame::encode(command, status, payload).unwrap()
}

/// SET_ACTIVE_SLOT acknowledgement carrying a 7-byte payload; split points
/// inside the header and inside the payload exercise reassembly.
pub fn set_slot_ack() -> Vec<u8> {
    response_frame(
        ids::SET_ACTIVE_SLOT,
        status::SUCCESS,
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07],
    )
}

pub fn slot_info_payload() -> Vec<u8> {
    // slot 0: MIFARE 1K / EM410X, slot 1: NTAG215 / none, others empty
    let mut p = hex::decode("03e90064044d0000").unwrap();
    p.resize(32, 0);
    p
}

/// HF14A scan payload with one 4-byte UID tag and no ATS.
pub fn hf14a_single_tag_payload() -> Vec<u8> {
    hex::decode("04deadbeef00040800").unwrap()
}
