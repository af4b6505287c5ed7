//! Routes standard tracing macros through the leveled logger.
//!
//! Run with `cargo run --example tracing_demo --features tracing`.

use logging::{init_tracing, Logger};
use std::sync::{Arc, Mutex};

fn main() {
    let logger = Arc::new(Mutex::new(Logger::new()));
    if let Ok(mut log) = logger.lock() {
        log.set_verbose_level(1);
        log.set_debug_level(1);
    }

    init_tracing(Arc::clone(&logger));

    tracing::error!("errors are always written");
    tracing::warn!("warnings too");
    tracing::info!("info needs verbose level 1");
    tracing::debug!("debug needs debug level 1");
    tracing::trace!("trace needs debug level 2, so this stays hidden");

    if let Ok(mut log) = logger.lock() {
        log.set_debug_level(2);
    }
    tracing::trace!("now visible at debug level 2");
}
