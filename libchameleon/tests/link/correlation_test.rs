#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use libchameleon::link::ResponseHandler;
use libchameleon::protocol::{ids, status};
use serial_test::serial;

#[test]
#[serial]
fn wait_returns_frame_delivered_from_another_thread() {
    common::init_logging();
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    let bytes = common::fixtures::set_slot_ack();

    let feeder = thread::spawn(move || {
        thread::sleep(Duration::from_millis(30));
        rx.process_data(&bytes[..5]);
        thread::sleep(Duration::from_millis(10));
        rx.process_data(&bytes[5..12]);
        thread::sleep(Duration::from_millis(10));
        rx.process_data(&bytes[12..]);
    });

    let start = Instant::now();
    let r = handler
        .wait_for_response(ids::SET_ACTIVE_SLOT, Duration::from_millis(1000))
        .expect("response");
    assert_eq!(r.payload(), &[1, 2, 3, 4, 5, 6, 7]);
    assert!(start.elapsed() < Duration::from_millis(900));
    feeder.join().unwrap();
}

#[test]
#[serial]
fn empty_payload_frame_split_mid_header_from_feeder_thread() {
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    let bytes = common::fixtures::response_frame(0x1003, 0x0000, &[]);
    assert_eq!(bytes.len(), 10);

    let feeder = thread::spawn(move || {
        rx.process_data(&bytes[..4]);
        thread::sleep(Duration::from_millis(20));
        rx.process_data(&bytes[4..]);
    });
    let r = handler
        .wait_for_response(0x1003, Duration::from_millis(1000))
        .expect("response before timeout");
    assert_eq!(r.status(), 0x0000);
    assert!(r.payload().is_empty());
    feeder.join().unwrap();
}

#[test]
#[serial]
fn wait_times_out_without_matching_response() {
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    rx.process_data(&common::fixtures::response_frame(
        ids::GET_APP_VERSION,
        status::SUCCESS,
        &[1, 0],
    ));

    let start = Instant::now();
    assert!(handler.wait_for_response(ids::GET_DEVICE_MODE, Duration::from_millis(100)).is_none());
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(400));
    // The unrelated response is still queued.
    assert_eq!(handler.queued(), 1);
}

#[test]
fn oldest_of_same_command_is_returned_first() {
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    rx.process_data(&common::fixtures::response_frame(ids::GET_ACTIVE_SLOT, status::SUCCESS, &[1]));
    rx.process_data(&common::fixtures::response_frame(ids::GET_ACTIVE_SLOT, status::SUCCESS, &[2]));

    let first = handler.wait_for_response_ms(ids::GET_ACTIVE_SLOT, 100).unwrap();
    let second = handler.wait_for_response_ms(ids::GET_ACTIVE_SLOT, 100).unwrap();
    assert_eq!(first.payload(), &[1]);
    assert_eq!(second.payload(), &[2]);
    assert!(first.received_at() <= second.received_at());
}

#[test]
fn error_status_is_still_delivered() {
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    rx.process_data(&common::fixtures::response_frame(ids::HF14A_SCAN, status::HF_TAG_NO, &[]));
    let r = handler.get_response(ids::HF14A_SCAN).unwrap();
    assert_eq!(r.status(), status::HF_TAG_NO);
}

#[test]
fn sink_fires_for_unsolicited_frames() {
    let handler = ResponseHandler::default();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    handler.set_notification_sink(move |r| {
        if r.command() == ids::GET_DEVICE_MODE {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    let mut rx = handler.receiver();
    rx.process_data(&common::fixtures::response_frame(ids::GET_DEVICE_MODE, status::SUCCESS, &[0]));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_wait_matches_blocking_contract() {
    let handler = ResponseHandler::default();
    let mut rx = handler.receiver();
    let bytes = common::fixtures::set_slot_ack();
    let feeder = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        rx.process_data(&bytes);
    });
    let r = handler
        .wait_for_response_async(ids::SET_ACTIVE_SLOT, Duration::from_millis(1000))
        .await;
    assert!(r.is_some());
    assert!(
        handler
            .wait_for_response_async(ids::SET_ACTIVE_SLOT, Duration::from_millis(30))
            .await
            .is_none()
    );
    feeder.join().unwrap();
}
