#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use libchameleon::Error;
use libchameleon::constants::{T55XX_DEFAULT_NEW_KEY, T55XX_DEFAULT_OLD_KEYS};
use libchameleon::device::Device;
use libchameleon::device::operations::*;
use libchameleon::link::LinkConfig;
use libchameleon::protocol::{Command, Frame, encode_command_frame, ids, status};
use libchameleon::test_support::{connected_mock_device, mock_with_replies, reply};
use libchameleon::types::{
    BlockData, DeviceMode, DeviceModel, Em410xId, KeyType, MifareKey, SenseType, TagType,
};

#[test]
fn full_device_info() -> anyhow::Result<()> {
    let (dev, sent) = connected_mock_device(vec![
        reply(ids::GET_APP_VERSION, status::SUCCESS, &[2, 0]),
        reply(
            ids::GET_DEVICE_CHIP_ID,
            status::SUCCESS,
            &[0, 0, 0, 0, 0xde, 0xad, 0xbe, 0xef],
        ),
        reply(ids::GET_DEVICE_MODEL, status::SUCCESS, &[0]),
        reply(ids::GET_DEVICE_MODE, status::SUCCESS, &[0]),
    ])?;
    let info = device_info(&dev)?;
    assert_eq!(info.chip_id, Some(0xdead_beef));
    assert_eq!(info.model, Some(DeviceModel::Ultra));
    assert_eq!(info.mode, Some(DeviceMode::Tag));
    assert_eq!(sent.lock().len(), 4);
    Ok(())
}

#[test]
fn version_failure_fails_device_info() {
    let (dev, _) = connected_mock_device(vec![]).unwrap();
    assert!(matches!(device_info(&dev), Err(Error::Timeout { command, .. }) if command == ids::GET_APP_VERSION));
}

#[test]
fn slot_management() -> anyhow::Result<()> {
    let (dev, sent) = connected_mock_device(vec![
        reply(ids::GET_SLOT_INFO, status::SUCCESS, &common::fixtures::slot_info_payload()),
        reply(ids::GET_ACTIVE_SLOT, status::SUCCESS, &[3]),
        reply(ids::SET_ACTIVE_SLOT, status::SUCCESS, &[]),
        reply(ids::SET_SLOT_TAG_NICK, status::SUCCESS, &[]),
        reply(ids::GET_SLOT_TAG_NICK, status::SUCCESS, b"office"),
        reply(ids::CHANGE_DEVICE_MODE, status::SUCCESS, &[]),
    ])?;

    let slots = slots_info(&dev)?;
    assert_eq!(slots[0].hf, TagType::MIFARE_1024);
    assert_eq!(active_slot(&dev)?, 3);
    set_active_slot(&dev, 7)?;
    set_slot_nickname(&dev, 7, SenseType::Hf, "office")?;
    assert_eq!(slot_nickname(&dev, 7, SenseType::Hf)?, "office");
    change_device_mode(&dev, DeviceMode::Reader)?;

    let log = sent.lock();
    let set_slot = Frame::decode(&log[2])?;
    assert_eq!(set_slot.command, ids::SET_ACTIVE_SLOT);
    assert_eq!(set_slot.payload, vec![7]);
    Ok(())
}

#[test]
fn hf_reader_operations() -> anyhow::Result<()> {
    let (dev, sent) = connected_mock_device(vec![
        reply(ids::HF14A_SCAN, status::HF_TAG_OK, &common::fixtures::hf14a_single_tag_payload()),
        reply(ids::MF1_WRITE_ONE_BLOCK, status::HF_TAG_OK, &[]),
        reply(ids::MF1_WRITE_EMU_BLOCK_DATA, status::SUCCESS, &[]),
    ])?;
    let tags = hf14a_scan(&dev)?;
    assert_eq!(tags[0].sak, 0x08);

    let data = BlockData::from_bytes([0x42; 16]);
    mf1_write_block(&dev, 1, KeyType::A, &MifareKey::DEFAULT, &data)?;
    mf1_write_emu_block(&dev, 0, &[data, data])?;

    let expected = encode_command_frame(&Command::Mf1WriteOneBlock {
        key_type: KeyType::A,
        block: 1,
        key: MifareKey::DEFAULT,
        data,
    })?;
    assert_eq!(sent.lock()[1], expected);
    Ok(())
}

#[test]
fn lf_operations() -> anyhow::Result<()> {
    let id = Em410xId::from_bytes([0x01, 0x23, 0x45, 0x67, 0x89]);
    let (dev, sent) = connected_mock_device(vec![
        reply(ids::EM410X_SET_EMU_ID, status::SUCCESS, &[]),
        reply(ids::EM410X_GET_EMU_ID, status::SUCCESS, id.as_bytes()),
        reply(ids::EM410X_WRITE_TO_T55XX, status::LF_TAG_OK, &[]),
    ])?;
    em410x_set_emu_id(&dev, &id)?;
    assert_eq!(em410x_get_emu_id(&dev)?, id);
    em410x_write_to_t55xx(&dev, &id, T55XX_DEFAULT_NEW_KEY, &T55XX_DEFAULT_OLD_KEYS)?;

    let t55 = Frame::decode(&sent.lock()[2])?;
    assert_eq!(t55.payload.len(), 5 + 4 + 8);
    assert_eq!(&t55.payload[5..9], &T55XX_DEFAULT_NEW_KEY);
    Ok(())
}

#[test]
fn device_mode_error_status_surfaces() {
    let (dev, _) = connected_mock_device(vec![reply(
        ids::HF14A_SCAN,
        status::DEVICE_MODE_ERROR,
        &[],
    )])
    .unwrap();
    match hf14a_scan(&dev) {
        Err(Error::UnexpectedStatus {
            command, actual, ..
        }) => {
            assert_eq!(command, ids::HF14A_SCAN);
            assert_eq!(actual, status::DEVICE_MODE_ERROR);
        }
        other => panic!("expected UnexpectedStatus, got: {:?}", other),
    }
}

#[test]
fn send_failure_fails_fast_and_device_recovers() -> anyhow::Result<()> {
    common::init_logging();
    let mut mock = mock_with_replies(vec![reply(ids::GET_APP_VERSION, status::SUCCESS, &[2, 1])]);
    mock.set_send_failures(1);
    let sent = mock.sent_log();
    let config = LinkConfig::default().with_response_timeout(Duration::from_secs(2));
    let dev = Device::new(Box::new(mock), config).connect()?;

    let started = Instant::now();
    match app_version(&dev) {
        Err(Error::Io(_)) => {}
        other => panic!("expected Io error, got: {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_millis(500));
    assert_eq!(dev.handler().queued(), 0);

    let version = app_version(&dev)?;
    assert_eq!((version.major, version.minor), (2, 1));
    assert_eq!(sent.lock().len(), 1);
    Ok(())
}
