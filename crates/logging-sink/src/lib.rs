#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destination side of the oc-log workspace: an
//! ordered list of opaque writable handles plus an optional always-written
//! mirror, and the fan-out write that sends one formatted message to all of
//! them. The level-gating logic lives in the sibling `logging` crate; this
//! crate only knows how to deliver text that a higher layer already decided
//! to emit.
//!
//! # Design
//!
//! The crate exposes [`FanoutSink`], which owns a `Vec` of [`Destination`]
//! handles and an optional mirror [`Destination`]. Writes are sequential and
//! unbuffered; each call streams the message bytes (and, depending on the
//! selected [`LineMode`], a trailing newline) straight into every handle.
//! The output list is replaceable wholesale, never entry by entry, matching
//! how command-line tools reconfigure their diagnostics once at startup.
//!
//! # Invariants
//!
//! - The sink never closes or flushes a destination implicitly; handle
//!   lifecycle belongs to the caller.
//! - An empty output list silently discards output-list writes while the
//!   mirror, when present, still receives every message.
//! - A failing destination does not stop delivery to the destinations after
//!   it; the first error is reported once all of them have been attempted.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writers. Callers that treat diagnostics as fire-and-forget are
//! expected to discard them, which is exactly what the `logging` crate does.
//!
//! # Examples
//!
//! Fan one message out to two in-memory buffers:
//!
//! ```
//! use logging_sink::{FanoutSink, LineMode};
//! use std::io::Write;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Clone, Default)]
//! struct SharedBuf(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for SharedBuf {
//!     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let first = SharedBuf::default();
//! let second = SharedBuf::default();
//! let mut sink = FanoutSink::new(vec![
//!     Box::new(first.clone()),
//!     Box::new(second.clone()),
//! ]);
//!
//! sink.write_outputs("ready", LineMode::WithNewline)?;
//!
//! assert_eq!(*first.0.lock().unwrap(), b"ready\n");
//! assert_eq!(*second.0.lock().unwrap(), b"ready\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - The `logging` crate for threshold gating, emission macros, and the
//!   context carrier built on top of this sink.

mod fanout;
mod line_mode;

pub use fanout::{Destination, FanoutSink};
pub use line_mode::LineMode;
