//! Small helpers shared across the crate: hex formatting and timing.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
