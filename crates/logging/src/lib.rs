#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the level-gating half of the oc-log workspace: a small,
//! embeddable logger for command-line tools that decides per call whether a
//! message is written, based on two independent integer thresholds, and
//! hands the formatted text to a `logging-sink` fan-out for delivery. It is
//! deliberately not an observability pipeline — no categories, no
//! timestamps, no rotation, no buffering.
//!
//! # Design
//!
//! [`Logger`] holds a verbosity threshold, a debug threshold, and a
//! [`FanoutSink`]. Each emission operation combines one gating check with
//! one fan-out write. The gating contract is inclusive: a message requested
//! at level `n` is written to the outputs iff `n` is at or below the
//! matching threshold. A configured mirror destination sits outside the
//! gate entirely and observes every emission call that is reached.
//!
//! Two emission styles exist for every channel: a joined-values style that
//! renders a `&[&dyn Display]` sequence separated by single spaces with a
//! trailing newline, and a template style that takes `format_args!` output
//! verbatim. The [`emit_log!`]/[`verbose_log!`]/[`debug_log!`]/[`fatal_log!`]
//! macro family (plus their `*_logf!` counterparts) provides variadic
//! front-ends over both.
//!
//! Ambient attachment is explicit: [`LogContext`] is an optional-typed
//! carrier that callers pass where they need it. There is no global
//! registry, and looking up an unattached context yields `None` rather than
//! aborting.
//!
//! # Invariants
//!
//! - The verbosity and debug thresholds never interact; each channel is
//!   gated only against its own threshold.
//! - The mirror receives exactly one write per emission call, regardless of
//!   the gating outcome against the output list.
//! - Emission never fails from the caller's perspective; destination write
//!   errors are swallowed. The only non-local effect is [`Logger::fatal`],
//!   which terminates the process with status 1 after its fan-out write.
//!
//! # Errors
//!
//! Configuration cannot fail and emission reports nothing. Callers that need
//! delivery guarantees are outside this facility's contract and should write
//! to their streams directly.
//!
//! # Examples
//!
//! ```
//! use logging::{verbose_log, Logger};
//!
//! let mut log = Logger::new();
//! log.set_verbose_level(2);
//!
//! // Written: requested level 1 is within the threshold of 2.
//! verbose_log!(log, 1, "transferred", 42, "files");
//!
//! // Suppressed: requested level 3 exceeds the threshold.
//! verbose_log!(log, 3, "per-block checksum detail");
//! ```
//!
//! # See also
//!
//! - The `logging-sink` crate for the destination list, mirror, and newline
//!   policy this logger writes through.

mod config;
mod context;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use context::LogContext;
pub use logger::Logger;
pub use logging_sink::{Destination, FanoutSink, LineMode};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, LoggerLayer};
