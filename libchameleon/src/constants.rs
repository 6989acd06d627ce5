// libchameleon/src/constants.rs
//! Common protocol constants used across the crate

/// Start-of-frame marker that opens every wire frame
pub const FRAME_SOF: u8 = 0x11;

/// LRC of the SOF byte; always the second byte of a frame
pub const FRAME_SOF_LRC: u8 = 0xEF;

/// Bytes needed before the total frame length can be computed:
/// SOF(1) LRC1(1) CMD(2) STATUS(2) LEN(2) LRC2(1)
pub const FRAME_HEADER_LEN: usize = 9;

/// Header plus the trailing LRC3 byte
pub const FRAME_OVERHEAD: usize = FRAME_HEADER_LEN + 1;

/// Largest payload the device accepts or produces in one frame
pub const MAX_PAYLOAD_LEN: usize = 512;

/// Capacity of the receive-side reassembly buffer
pub const RX_BUFFER_CAPACITY: usize = 1024;

/// Number of decoded responses held before the oldest is evicted
pub const RESPONSE_QUEUE_CAPACITY: usize = 8;

/// Number of emulation slots on the device
pub const SLOT_COUNT: u8 = 8;

/// Maximum slot nickname length in bytes
pub const MAX_NICKNAME_LEN: usize = 32;

/// Size of one MIFARE Classic block
pub const MF1_BLOCK_SIZE: usize = 16;

/// Size of an EM410X identifier
pub const EM410X_ID_LEN: usize = 5;

/// Nordic UART Service UUIDs exposed by the device over BLE
pub const NUS_SERVICE_UUID: &str = "6E400001-B5A3-F393-E0A9-E50E24DCCA9E";
pub const NUS_RX_CHAR_UUID: &str = "6E400002-B5A3-F393-E0A9-E50E24DCCA9E";
pub const NUS_TX_CHAR_UUID: &str = "6E400003-B5A3-F393-E0A9-E50E24DCCA9E";

/// Password written to a T55xx when cloning an EM410X id
pub const T55XX_DEFAULT_NEW_KEY: [u8; 4] = [0x20, 0x20, 0x66, 0x66];

/// Passwords tried to unlock a T55xx before it is rewritten
pub const T55XX_DEFAULT_OLD_KEYS: [[u8; 4]; 2] = [[0x51, 0x24, 0x36, 0x48], [0x19, 0x92, 0x04, 0x27]];

/// Line rate for the USB CDC-ACM port; the device ignores it but the tty
/// layer needs one
pub const SERIAL_BAUD_RATE: u32 = 115_200;

/// Serial read timeout; bounds how long the reader thread takes to notice
/// a stop request
pub const SERIAL_READ_TIMEOUT_MS: u64 = 100;
