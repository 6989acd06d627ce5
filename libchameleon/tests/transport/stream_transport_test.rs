#[path = "../common/mod.rs"]
mod common;

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use libchameleon::device::Device;
use libchameleon::link::LinkConfig;
use libchameleon::protocol::{ids, status};
use libchameleon::transport::StreamTransport;
use libchameleon::types::ConnectionType;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn reader_thread_feeds_device() -> anyhow::Result<()> {
    common::init_logging();
    let mut input = vec![0x00, 0x01];
    input.extend(common::fixtures::response_frame(
        ids::GET_ACTIVE_SLOT,
        status::SUCCESS,
        &[6],
    ));
    let out = Captured::default();
    let transport = StreamTransport::new(Cursor::new(input), out.clone(), ConnectionType::Usb);
    let dev = Device::new(Box::new(transport), LinkConfig::default()).connect()?;

    let r = dev
        .wait_for_response(ids::GET_ACTIVE_SLOT, Duration::from_millis(1000))
        .expect("response from reader thread");
    assert_eq!(r.payload(), &[6]);

    dev.send_command(ids::GET_APP_VERSION, &[])?;
    assert_eq!(*out.0.lock().unwrap(), common::fixtures::app_version_request());
    dev.disconnect()?;
    Ok(())
}

/// Reconnecting a device over the same stream keeps receiving frames.
#[cfg(unix)]
#[test]
fn reconnect_receives_after_disconnect() -> anyhow::Result<()> {
    use std::os::unix::net::UnixStream;

    common::init_logging();
    let (ours, mut peer) = UnixStream::pair()?;
    ours.set_read_timeout(Some(Duration::from_millis(20)))?;
    let transport = StreamTransport::new(ours.try_clone()?, ours, ConnectionType::Usb);
    let dev = Device::new(Box::new(transport), LinkConfig::default()).connect()?;

    let dev = dev.disconnect()?.connect()?;
    peer.write_all(&common::fixtures::response_frame(
        ids::GET_ACTIVE_SLOT,
        status::SUCCESS,
        &[3],
    ))?;
    let r = dev
        .wait_for_response(ids::GET_ACTIVE_SLOT, Duration::from_millis(1000))
        .expect("response after reconnect");
    assert_eq!(r.payload(), &[3]);
    dev.disconnect()?;
    Ok(())
}

/// XON/XOFF and CR/LF bytes cross a real tty in both directions unchanged.
#[cfg(unix)]
#[test]
fn serial_port_is_raw() -> anyhow::Result<()> {
    use std::io::Read;
    use std::sync::mpsc;

    use libchameleon::protocol::Frame;
    use libchameleon::transport::{Transport, open_serial};
    use serialport::{SerialPort, TTYPort};

    common::init_logging();
    let (mut master, slave) = TTYPort::pair()?;
    let slave_path = slave
        .name()
        .ok_or_else(|| anyhow::anyhow!("pty slave has no path"))?;
    drop(slave);

    let mut transport = open_serial(&slave_path)?;
    let (tx, rx) = mpsc::channel();
    transport.start_rx(Box::new(move |chunk| {
        let _ = tx.send(chunk.to_vec());
    }))?;

    let inbound = Frame::encode(ids::GET_APP_VERSION, status::SUCCESS, &[0x0a, 0x11, 0x13, 0x0d])?;
    assert_eq!(inbound[0], 0x11);
    master.write_all(&inbound)?;
    let mut got = Vec::new();
    while got.len() < inbound.len() {
        got.extend(rx.recv_timeout(Duration::from_secs(2))?);
    }
    assert_eq!(got, inbound);

    let outbound = Frame::encode(ids::SET_SLOT_TAG_NICK, 0, &[0x0a, 0x0d, 0x11, 0x13])?;
    transport.send(&outbound)?;
    let mut echoed = Vec::new();
    let mut buf = [0u8; 64];
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while echoed.len() < outbound.len() && std::time::Instant::now() < deadline {
        match master.read(&mut buf) {
            Ok(n) => echoed.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
            Err(e) => return Err(e.into()),
        }
    }
    assert_eq!(echoed, outbound);

    transport.stop_rx()?;
    Ok(())
}
