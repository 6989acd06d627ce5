#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libchameleon::Error;
use libchameleon::device::Device;
use libchameleon::link::LinkConfig;
use libchameleon::protocol::{Command, ids, status};
use libchameleon::transport::MockTransport;

#[test]
fn byte_at_a_time_delivery() -> anyhow::Result<()> {
    let mut mock = MockTransport::new();
    mock.set_chunk_size(1);
    mock.push_reply(common::fixtures::response_frame(
        ids::GET_DEVICE_MODEL,
        status::SUCCESS,
        &[1],
    ));
    let dev = Device::new(Box::new(mock), LinkConfig::default()).connect()?;
    let r = dev.execute(&Command::GetDeviceModel, Duration::from_millis(200))?;
    assert_eq!(r.payload(), &[1]);
    Ok(())
}

#[test]
fn send_failure_propagates() -> anyhow::Result<()> {
    let mut mock = MockTransport::new();
    mock.set_send_failures(1);
    let dev = Device::new(Box::new(mock), LinkConfig::default()).connect()?;
    assert!(matches!(
        dev.execute(&Command::GetAppVersion, Duration::from_millis(50)),
        Err(Error::Io(_))
    ));
    Ok(())
}

#[test]
fn unsolicited_frame_reaches_sink_and_queue() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    let injector = mock.injector();
    let dev = Device::new(Box::new(mock), LinkConfig::default()).connect()?;

    let (tx, rx) = std::sync::mpsc::channel();
    let tx = std::sync::Mutex::new(tx);
    dev.set_notification_sink(move |r| {
        let _ = tx.lock().unwrap().send(r.command());
    });
    injector.inject_chunked(
        &common::fixtures::response_frame(ids::GET_DEVICE_MODE, status::SUCCESS, &[1]),
        3,
    );
    assert_eq!(rx.recv_timeout(Duration::from_millis(200))?, ids::GET_DEVICE_MODE);
    assert!(dev.wait_for_response(ids::GET_DEVICE_MODE, Duration::from_millis(50)).is_some());
    Ok(())
}
