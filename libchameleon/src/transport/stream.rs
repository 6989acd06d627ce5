// libchameleon/src/transport/stream.rs

use std::io::{self, ErrorKind, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, trace, warn};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::constants::{SERIAL_BAUD_RATE, SERIAL_READ_TIMEOUT_MS};
use crate::transport::traits::{RxHandler, Transport};
use crate::types::ConnectionType;
use crate::utils::{POLL_INTERVAL_MS, bytes_to_hex_spaced, ms};
use crate::{Error, Result};

const READ_CHUNK: usize = 256;

/// How long `stop_rx` waits for the reader thread to hand its reader back.
const STOP_GRACE: Duration = Duration::from_millis(5 * SERIAL_READ_TIMEOUT_MS);

/// Produces a fresh read half when the previous one stayed with a detached
/// reader thread.
pub type ReaderSource<R> = Box<dyn FnMut() -> io::Result<R> + Send>;

/// Stream transport over a serial port opened by [`open_serial`].
pub type SerialTransport = StreamTransport<Box<dyn SerialPort>, Box<dyn SerialPort>>;

/// Transport over any blocking byte stream: a read half pumped by a
/// dedicated reader thread and a write half used directly by `send`.
///
/// The reader should time out periodically (`TimedOut`/`WouldBlock`) so the
/// thread can see a stop request and return the reader for the next
/// `start_rx`. A reader that blocks indefinitely is detached on `stop_rx`;
/// the next `start_rx` then needs a [`ReaderSource`].
///
/// The device's USB interface enumerates as a CDC-ACM serial port, so
/// [`open_serial`] over `/dev/ttyACM*` is the usual way to build one.
pub struct StreamTransport<R, W> {
    reader: Option<R>,
    reader_source: Option<ReaderSource<R>>,
    writer: W,
    connection: ConnectionType,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<Option<R>>>,
}

/// Open a serial port in raw 8N1 mode with no flow control, so every byte
/// value (including XON/XOFF and CR/LF) passes through untouched.
pub fn open_serial(path: &str) -> Result<SerialTransport> {
    let port = serialport::new(path, SERIAL_BAUD_RATE)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(ms(SERIAL_READ_TIMEOUT_MS))
        .open()
        .map_err(|e| {
            error!("failed to open serial device {}: {}", path, e);
            Error::Io(e.into())
        })?;
    let reader = port.try_clone().map_err(io::Error::from)?;
    let source = port.try_clone().map_err(io::Error::from)?;
    info!("opened serial device {} at {} baud", path, SERIAL_BAUD_RATE);
    Ok(StreamTransport::new(reader, port, ConnectionType::Usb)
        .with_reader_source(move || source.try_clone().map_err(io::Error::from)))
}

impl<R, W> StreamTransport<R, W>
where
    R: Read + Send + 'static,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W, connection: ConnectionType) -> Self {
        Self {
            reader: Some(reader),
            reader_source: None,
            writer,
            connection,
            stop: Arc::new(AtomicBool::new(false)),
            thread: None,
        }
    }

    pub fn with_reader_source<F>(mut self, source: F) -> Self
    where
        F: FnMut() -> io::Result<R> + Send + 'static,
    {
        self.reader_source = Some(Box::new(source));
        self
    }

    fn take_reader(&mut self) -> Result<R> {
        if let Some(reader) = self.reader.take() {
            return Ok(reader);
        }
        let source = self.reader_source.as_mut().ok_or_else(|| {
            Error::UnsupportedOperation(
                "stream reader is held by a detached reader thread".into(),
            )
        })?;
        debug!("reopening stream reader");
        Ok(source()?)
    }
}

fn pump<R: Read>(mut reader: R, mut handler: RxHandler, stop: Arc<AtomicBool>) -> Option<R> {
    let mut buf = [0u8; READ_CHUNK];
    loop {
        if stop.load(Ordering::Acquire) {
            return Some(reader);
        }
        match reader.read(&mut buf) {
            Ok(0) => {
                debug!("stream reached end of input");
                return Some(reader);
            }
            Ok(n) => {
                if stop.load(Ordering::Acquire) {
                    return Some(reader);
                }
                trace!("rx {} bytes: {}", n, bytes_to_hex_spaced(&buf[..n]));
                handler(&buf[..n]);
            }
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
                ) =>
            {
                continue;
            }
            Err(e) => {
                error!("stream read failed: {}", e);
                return None;
            }
        }
    }
}

impl<R, W> Transport for StreamTransport<R, W>
where
    R: Read + Send + 'static,
    W: Write + Send,
{
    fn send(&mut self, data: &[u8]) -> Result<()> {
        trace!("tx {} bytes: {}", data.len(), bytes_to_hex_spaced(data));
        self.writer
            .write_all(data)
            .and_then(|_| self.writer.flush())
            .map_err(|e| {
                error!("stream write failed: {}", e);
                Error::Io(e)
            })
    }

    fn start_rx(&mut self, handler: RxHandler) -> Result<()> {
        if let Some(handle) = self.thread.take() {
            if !handle.is_finished() {
                self.thread = Some(handle);
                return Err(Error::UnsupportedOperation(
                    "receive path already running".into(),
                ));
            }
            // Reader thread ended on its own (end of input); reuse its reader.
            if let Ok(Some(reader)) = handle.join() {
                self.reader = Some(reader);
            }
        }
        let reader = self.take_reader()?;
        // Fresh flag per run: a detached thread keeps its own, already set.
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = stop.clone();
        let handle = thread::Builder::new()
            .name("chameleon-rx".into())
            .spawn(move || pump(reader, handler, stop))?;
        self.thread = Some(handle);
        Ok(())
    }

    fn stop_rx(&mut self) -> Result<()> {
        self.stop.store(true, Ordering::Release);
        let Some(handle) = self.thread.take() else {
            return Ok(());
        };
        let deadline = Instant::now() + STOP_GRACE;
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(ms(POLL_INTERVAL_MS));
        }
        if handle.is_finished() {
            match handle.join() {
                Ok(reader) => self.reader = reader,
                Err(_) => error!("reader thread panicked"),
            }
        } else {
            warn!(
                "reader thread still blocked after {:?}, detaching",
                STOP_GRACE
            );
        }
        Ok(())
    }

    fn connection_type(&self) -> ConnectionType {
        self.connection
    }
}

impl<R, W> Drop for StreamTransport<R, W> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}

impl<R, W> std::fmt::Debug for StreamTransport<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamTransport")
            .field("connection", &self.connection)
            .field("receiving", &self.thread.is_some())
            .field("reopenable", &self.reader_source.is_some())
            .finish()
    }
}
