// libchameleon/src/link/mod.rs

//! Device link layer: reassembly of received bytes into frames, a bounded
//! response queue, and request/response correlation by command id.
//!
//! Data flow: transport bytes -> [`FrameReceiver::process_data`] ->
//! [`ReassemblyBuffer`] -> `Frame::decode` -> [`ResponseQueue`] push and
//! notification sink -> [`ResponseHandler::wait_for_response`].

pub mod config;
pub mod handler;
pub mod queue;
pub mod reassembly;
pub mod receiver;
pub mod response;

pub use config::LinkConfig;
pub use handler::{NotificationSink, ResponseHandler};
pub use queue::ResponseQueue;
pub use reassembly::{ReassemblyBuffer, ReceiverStats};
pub use receiver::FrameReceiver;
pub use response::Response;
