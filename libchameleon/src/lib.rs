// libchameleon/src/lib.rs

//! libchameleon
//!
//! Host-side driver for Chameleon Ultra / Lite NFC emulators: the binary
//! frame codec, a receive path that reassembles frames from arbitrarily
//! fragmented bytes, request/response correlation by command id, and typed
//! device operations over serial or mock transports.

pub mod constants;
pub mod device;
pub mod error;
pub mod link;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;
