//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled logger.
//!
//! This module provides a tracing-subscriber layer that routes tracing
//! events through a shared [`Logger`], so code written against the standard
//! `tracing` macros participates in the same threshold gating and fan-out
//! delivery as direct logger calls.
//!
//! # Mapping
//!
//! - `ERROR` and `WARN` events are emitted unconditionally.
//! - `INFO` events go to the verbosity channel at level 1.
//! - `DEBUG` events go to the debug channel at level 1.
//! - `TRACE` events go to the debug channel at level 2.
//!
//! This system has no named categories, so the mapping is by event level
//! only; the event's `message` field becomes the emitted text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{init_tracing, Logger};
//! use std::sync::{Arc, Mutex};
//!
//! let logger = Arc::new(Mutex::new(Logger::new()));
//! logger.lock().unwrap().set_verbose_level(1);
//! init_tracing(Arc::clone(&logger));
//!
//! tracing::info!("visible at verbose level 1");
//! tracing::trace!("needs debug level 2");
//! ```

use std::sync::{Arc, Mutex};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;

/// A tracing layer that forwards events into a shared [`Logger`].
///
/// The layer locks the logger once per event; events arriving while the
/// mutex is poisoned are dropped, matching the logger's fire-and-forget
/// contract.
pub struct LoggerLayer {
    logger: Arc<Mutex<Logger>>,
}

impl LoggerLayer {
    /// Creates a layer that writes through `logger`.
    #[must_use]
    pub fn new(logger: Arc<Mutex<Logger>>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let Ok(mut logger) = self.logger.lock() else {
            return;
        };
        match *event.metadata().level() {
            Level::ERROR | Level::WARN => logger.emit(&[&message]),
            Level::INFO => logger.verbose(1, &[&message]),
            Level::DEBUG => logger.debug(1, &[&message]),
            Level::TRACE => logger.debug(2, &[&message]),
        }
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that writes through `logger`.
///
/// The logger's thresholds keep working after installation; adjusting them
/// through the shared handle changes which bridged events reach the outputs.
///
/// # Panics
///
/// Panics if a global subscriber is already installed, mirroring
/// `tracing_subscriber`'s own `init` behavior.
pub fn init_tracing(logger: Arc<Mutex<Logger>>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn shared_logger(verbose: u8, debug: u8) -> (Arc<Mutex<Logger>>, SharedBuf) {
        let buffer = SharedBuf::default();
        let mut logger = Logger::with_outputs(vec![Box::new(buffer.clone())]);
        logger.set_verbose_level(verbose);
        logger.set_debug_level(debug);
        (Arc::new(Mutex::new(logger)), buffer)
    }

    #[test]
    fn error_and_warn_events_bypass_gating() {
        let (logger, buffer) = shared_logger(0, 0);
        let subscriber =
            tracing_subscriber::registry().with(LoggerLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("broken");
            tracing::warn!("wobbly");
        });

        assert_eq!(buffer.text(), "broken\nwobbly\n");
    }

    #[test]
    fn info_events_require_verbose_level_one() {
        let (logger, buffer) = shared_logger(0, 0);
        let subscriber =
            tracing_subscriber::registry().with(LoggerLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("suppressed");
        });
        assert!(buffer.text().is_empty());

        logger.lock().expect("logger lock").set_verbose_level(1);
        let subscriber =
            tracing_subscriber::registry().with(LoggerLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("shown");
        });
        assert_eq!(buffer.text(), "shown\n");
    }

    #[test]
    fn debug_and_trace_events_use_debug_channel() {
        let (logger, buffer) = shared_logger(0, 1);
        let subscriber =
            tracing_subscriber::registry().with(LoggerLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("level one diagnostic");
            tracing::trace!("level two diagnostic");
        });

        // Debug threshold 1 admits DEBUG (level 1) but not TRACE (level 2).
        assert_eq!(buffer.text(), "level one diagnostic\n");
    }
}
