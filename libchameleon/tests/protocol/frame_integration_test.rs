#[path = "../common/mod.rs"]
mod common;

use libchameleon::Error;
use libchameleon::constants::{FRAME_OVERHEAD, MAX_PAYLOAD_LEN};
use libchameleon::error::ChecksumKind;
use libchameleon::protocol::{Frame, ids, status};

#[test]
fn app_version_request_matches_fixture() {
    let encoded = Frame::encode(ids::GET_APP_VERSION, 0, &[]).unwrap();
    assert_eq!(encoded, common::fixtures::app_version_request());
}

#[test]
fn decode_fixture_frame() -> anyhow::Result<()> {
    let bytes = common::fixtures::set_slot_ack();
    assert_eq!(Frame::expected_len(&bytes), bytes.len());
    let frame = Frame::decode(&bytes)?;
    assert_eq!(frame.command, ids::SET_ACTIVE_SLOT);
    assert_eq!(frame.status, status::SUCCESS);
    assert_eq!(frame.payload, vec![1, 2, 3, 4, 5, 6, 7]);
    Ok(())
}

#[test]
fn max_payload_boundary() {
    let full = vec![0x5a; MAX_PAYLOAD_LEN];
    let bytes = Frame::encode(ids::MF1_WRITE_EMU_BLOCK_DATA, 0, &full).unwrap();
    assert_eq!(bytes.len(), MAX_PAYLOAD_LEN + FRAME_OVERHEAD);
    assert!(matches!(
        Frame::encode(1, 0, &vec![0; MAX_PAYLOAD_LEN + 1]),
        Err(Error::PayloadTooLarge { .. })
    ));
}

#[test]
fn corrupted_trailer_reports_frame_checksum() {
    let mut bytes = common::fixtures::set_slot_ack();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;
    match Frame::decode(&bytes) {
        Err(Error::ChecksumMismatch { kind, .. }) => assert_eq!(kind, ChecksumKind::Frame),
        other => panic!("expected frame checksum error, got: {:?}", other),
    }
}

#[test]
fn oversized_length_field_is_not_a_header() {
    // LEN = 0x0201 (513) with a correct header LRC.
    let mut header = vec![0x11, 0xef, 0x03, 0xe8, 0x00, 0x00, 0x02, 0x01];
    let lrc2 = libchameleon::protocol::lrc(&header[2..8]);
    header.push(lrc2);
    assert_eq!(Frame::expected_len(&header), 0);
}
