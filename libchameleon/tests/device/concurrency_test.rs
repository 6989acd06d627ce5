#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use libchameleon::device::operations::{active_slot, app_version};
use libchameleon::protocol::{ids, status};
use libchameleon::test_support::{connected_mock_device, reply};

#[test]
fn threads_share_one_connected_device() -> anyhow::Result<()> {
    let (dev, sent) = connected_mock_device(vec![
        reply(ids::GET_APP_VERSION, status::SUCCESS, &[2, 5]),
        reply(ids::GET_ACTIVE_SLOT, status::SUCCESS, &[4]),
    ])?;
    let dev = Arc::new(dev);

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let dev = dev.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    if i % 2 == 0 {
                        assert_eq!(app_version(&dev).unwrap().minor, 5);
                    } else {
                        assert_eq!(active_slot(&dev).unwrap(), 4);
                    }
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(sent.lock().len(), 20);
    Ok(())
}
