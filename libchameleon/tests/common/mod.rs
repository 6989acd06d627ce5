// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`, so not every helper is used by
// every file.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

static LOGGER: Once = Once::new();

/// Route `log` output through env_logger; honours RUST_LOG.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
