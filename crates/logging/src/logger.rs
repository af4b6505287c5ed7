//! crates/logging/src/logger.rs
//! The level-gated writer: threshold state plus emission operations.

use std::fmt::{self, Display, Write as _};
use std::panic::Location;
use std::process;

use logging_sink::{Destination, FanoutSink, LineMode};

/// Exit status used by the fatal emission path.
const FATAL_EXIT_STATUS: i32 = 1;

/// Level-gated multi-stream writer.
///
/// Holds two independent thresholds and a [`FanoutSink`]. Informational
/// messages are gated against the verbosity threshold, diagnostic messages
/// against the debug threshold; a message requested at level `n` reaches the
/// output list iff `n <= threshold`. Lower levels are more important —
/// level 0 is always shown — and raising a threshold reveals progressively
/// more output on that channel. A configured mirror destination bypasses
/// gating entirely and observes every emission call.
///
/// A new logger writes to standard error. Configuration is expected to
/// happen once at startup; the type carries no synchronization, so sharing
/// an instance across threads requires external mutual exclusion (for
/// example `Mutex<Logger>`).
///
/// # Examples
///
/// ```
/// use logging::Logger;
///
/// let mut log = Logger::new();
/// log.set_verbose_level(1);
///
/// log.emit(&[&"starting", &3, &"workers"]); // always written
/// log.verbose(1, &[&"worker pool ready"]);  // within threshold
/// log.verbose(2, &[&"scheduler detail"]);   // suppressed
/// ```
#[derive(Debug)]
pub struct Logger {
    verbose: u8,
    debug: u8,
    debug_origin: bool,
    sink: FanoutSink,
}

impl Logger {
    /// Creates a logger with both thresholds at zero, writing to standard
    /// error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_outputs(vec![Box::new(std::io::stderr())])
    }

    /// Creates a logger writing to the supplied destinations.
    #[must_use]
    pub fn with_outputs(outputs: Vec<Destination>) -> Self {
        Self {
            verbose: 0,
            debug: 0,
            debug_origin: false,
            sink: FanoutSink::new(outputs),
        }
    }

    /// Creates a standard-error logger with thresholds taken from `config`.
    #[must_use]
    pub fn from_config(config: crate::VerbosityConfig) -> Self {
        let mut logger = Self::new();
        logger.apply_config(config);
        logger
    }

    /// Replaces both thresholds from a configuration snapshot.
    pub fn apply_config(&mut self, config: crate::VerbosityConfig) {
        self.verbose = config.verbose;
        self.debug = config.debug;
    }

    /// Returns the current thresholds as a configuration snapshot.
    #[must_use]
    pub const fn config(&self) -> crate::VerbosityConfig {
        crate::VerbosityConfig::new(self.verbose, self.debug)
    }

    /// Returns the current verbosity threshold.
    #[must_use]
    pub const fn verbose_level(&self) -> u8 {
        self.verbose
    }

    /// Returns the current debug threshold.
    #[must_use]
    pub const fn debug_level(&self) -> u8 {
        self.debug
    }

    /// Sets the verbosity threshold.
    pub fn set_verbose_level(&mut self, level: u8) {
        self.verbose = level;
    }

    /// Sets the debug threshold.
    pub fn set_debug_level(&mut self, level: u8) {
        self.debug = level;
    }

    /// Replaces the entire output list.
    ///
    /// Previously configured destinations are simply dropped without a
    /// flush; see [`FanoutSink::set_outputs`].
    pub fn set_outputs(&mut self, outputs: Vec<Destination>) {
        self.sink.set_outputs(outputs);
    }

    /// Replaces the mirror destination, or removes it with `None`.
    pub fn set_mirror(&mut self, mirror: Option<Destination>) {
        self.sink.set_mirror(mirror);
    }

    /// Enables or disables call-site annotation on the debug channel.
    ///
    /// When enabled, debug emissions are prefixed with the `file:line` of
    /// the logging call. This is per-instance configuration, fixed between
    /// calls; there is no per-write toggle to revert.
    pub fn set_debug_origin(&mut self, enabled: bool) {
        self.debug_origin = enabled;
    }

    /// Reports whether a verbose message at `level` would reach the outputs.
    ///
    /// Useful for skipping expensive argument construction when the message
    /// would be gated out anyway. Note that a mirror, when configured, still
    /// observes calls this predicate rejects.
    #[must_use]
    pub const fn verbose_gte(&self, level: u8) -> bool {
        self.verbose >= level
    }

    /// Reports whether a debug message at `level` would reach the outputs.
    #[must_use]
    pub const fn debug_gte(&self, level: u8) -> bool {
        self.debug >= level
    }

    /// Flushes all destinations, reporting the first failure.
    ///
    /// Emission never flushes; this exists for callers interleaving logger
    /// output with their own writes on a shared stream.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.sink.flush()
    }

    /// Writes the space-joined `values` plus a newline, unconditionally.
    ///
    /// Every destination in the output list receives the line, as does the
    /// mirror when one is configured.
    pub fn emit(&mut self, values: &[&dyn Display]) {
        let text = join_values(values);
        self.dispatch(true, &text, LineMode::WithNewline);
    }

    /// Writes a formatted template, unconditionally and verbatim.
    ///
    /// No newline is appended; the template controls its own line
    /// termination.
    pub fn emit_fmt(&mut self, args: fmt::Arguments<'_>) {
        let text = fmt::format(args);
        self.dispatch(true, &text, LineMode::WithoutNewline);
    }

    /// Writes the space-joined `values` plus a newline, then terminates the
    /// process with a non-zero status.
    ///
    /// The fan-out write is best-effort; termination happens regardless of
    /// delivery. This never returns.
    pub fn fatal(&mut self, values: &[&dyn Display]) -> ! {
        let text = join_values(values);
        self.dispatch(true, &text, LineMode::WithNewline);
        process::exit(FATAL_EXIT_STATUS);
    }

    /// Writes a formatted template verbatim, then terminates the process
    /// with a non-zero status.
    pub fn fatal_fmt(&mut self, args: fmt::Arguments<'_>) -> ! {
        let text = fmt::format(args);
        self.dispatch(true, &text, LineMode::WithoutNewline);
        process::exit(FATAL_EXIT_STATUS);
    }

    /// Writes the space-joined `values` plus a newline when `level` is at or
    /// below the verbosity threshold.
    ///
    /// The mirror, when configured, receives the line regardless of the
    /// gating outcome.
    pub fn verbose(&mut self, level: u8, values: &[&dyn Display]) {
        let gated_in = self.verbose_gte(level);
        if !gated_in && !self.sink.has_mirror() {
            return;
        }
        let text = join_values(values);
        self.dispatch(gated_in, &text, LineMode::WithNewline);
    }

    /// Writes a formatted template verbatim when `level` is at or below the
    /// verbosity threshold; the mirror observes the call unconditionally.
    pub fn verbose_fmt(&mut self, level: u8, args: fmt::Arguments<'_>) {
        let gated_in = self.verbose_gte(level);
        if !gated_in && !self.sink.has_mirror() {
            return;
        }
        let text = fmt::format(args);
        self.dispatch(gated_in, &text, LineMode::WithoutNewline);
    }

    /// Writes the space-joined `values` plus a newline when `level` is at or
    /// below the debug threshold.
    ///
    /// With call-site annotation enabled the line is prefixed with the
    /// `file:line` of the logging call; the `debug_log!` macro forwards its
    /// own call site here. Mirror semantics match [`verbose`](Self::verbose).
    #[track_caller]
    pub fn debug(&mut self, level: u8, values: &[&dyn Display]) {
        let caller = Location::caller();
        let gated_in = self.debug_gte(level);
        if !gated_in && !self.sink.has_mirror() {
            return;
        }
        let text = self.annotate(caller, join_values(values));
        self.dispatch(gated_in, &text, LineMode::WithNewline);
    }

    /// Writes a formatted template verbatim when `level` is at or below the
    /// debug threshold, with the same call-site annotation and mirror
    /// semantics as [`debug`](Self::debug).
    #[track_caller]
    pub fn debug_fmt(&mut self, level: u8, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        let gated_in = self.debug_gte(level);
        if !gated_in && !self.sink.has_mirror() {
            return;
        }
        let text = self.annotate(caller, fmt::format(args));
        self.dispatch(gated_in, &text, LineMode::WithoutNewline);
    }

    fn annotate(&self, caller: &Location<'_>, text: String) -> String {
        if self.debug_origin {
            format!("{}:{}: {}", caller.file(), caller.line(), text)
        } else {
            text
        }
    }

    // Single choke point for every emission: the gate applies to the output
    // list only, the mirror observes every call that reaches this far.
    fn dispatch(&mut self, gated_in: bool, text: &str, mode: LineMode) {
        if gated_in {
            let _ = self.sink.write_outputs(text, mode);
        }
        let _ = self.sink.write_mirror(text, mode);
    }
}

impl Default for Logger {
    /// Equivalent to [`Logger::new`].
    fn default() -> Self {
        Self::new()
    }
}

fn join_values(values: &[&dyn Display]) -> String {
    let mut text = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        let _ = write!(text, "{value}");
    }
    text
}
