#[path = "../common/mod.rs"]
mod common;

use libchameleon::device::DeviceBuilder;
use libchameleon::protocol::{ids, status};
use libchameleon::test_support::{mock_with_replies, reply};
use libchameleon::types::ConnectionType;

#[test]
fn connect_disconnect_roundtrip() -> anyhow::Result<()> {
    common::init_logging();
    let mock = mock_with_replies(vec![reply(ids::GET_APP_VERSION, status::SUCCESS, &[2, 1])]);
    let device = DeviceBuilder::new().with_transport(Box::new(mock)).build()?;
    assert_eq!(device.connection_type(), ConnectionType::Mock);

    let connected = device.connect()?;
    let v = libchameleon::device::operations::app_version(&connected)?;
    assert_eq!(v.to_string(), "2.1");

    let disconnected = connected.disconnect()?;
    // The same transport can be wired up again.
    let again = disconnected.connect()?;
    assert_eq!(libchameleon::device::operations::app_version(&again)?.major, 2);
    Ok(())
}
