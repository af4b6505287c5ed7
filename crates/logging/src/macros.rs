//! crates/logging/src/macros.rs
//! Variadic front-ends over the logger's emission operations.
//!
//! The `*_log!` macros take a comma-separated sequence of displayable values
//! and forward to the joined-values methods (single-space separators plus a
//! trailing newline). The `*_logf!` macros take a format template and
//! forward to the template methods (no implicit newline).

/// Writes the space-joined values plus a newline, unconditionally.
///
/// # Example
///
/// ```
/// use logging::{emit_log, Logger};
///
/// let mut log = Logger::new();
/// emit_log!(log, "copied", 12, "files");
/// ```
#[macro_export]
macro_rules! emit_log {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.emit(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes a formatted template verbatim, unconditionally.
///
/// # Example
///
/// ```
/// use logging::{emit_logf, Logger};
///
/// let mut log = Logger::new();
/// emit_logf!(log, "sent {} of {} bytes\n", 512, 2048);
/// ```
#[macro_export]
macro_rules! emit_logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_fmt(::std::format_args!($($arg)*))
    };
}

/// Writes the space-joined values plus a newline when the requested level is
/// at or below the verbosity threshold; the mirror observes the call
/// unconditionally.
///
/// # Example
///
/// ```
/// use logging::{verbose_log, Logger};
///
/// let mut log = Logger::new();
/// log.set_verbose_level(1);
/// verbose_log!(log, 1, "scanning", "src/");
/// ```
#[macro_export]
macro_rules! verbose_log {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.verbose($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes a formatted template verbatim when the requested level is at or
/// below the verbosity threshold.
///
/// # Example
///
/// ```
/// use logging::{verbose_logf, Logger};
///
/// let mut log = Logger::new();
/// verbose_logf!(log, 2, "throughput {:.1} MB/s\n", 81.4);
/// ```
#[macro_export]
macro_rules! verbose_logf {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.verbose_fmt($level, ::std::format_args!($($arg)*))
    };
}

/// Writes the space-joined values plus a newline when the requested level is
/// at or below the debug threshold. Call-site annotation, when enabled on
/// the logger, names the macro invocation site.
///
/// # Example
///
/// ```
/// use logging::{debug_log, Logger};
///
/// let mut log = Logger::new();
/// log.set_debug_level(1);
/// debug_log!(log, 1, "retry", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.debug($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes a formatted template verbatim when the requested level is at or
/// below the debug threshold.
///
/// # Example
///
/// ```
/// use logging::{debug_logf, Logger};
///
/// let mut log = Logger::new();
/// debug_logf!(log, 2, "frame {:#06x}\n", 0x1f2);
/// ```
#[macro_export]
macro_rules! debug_logf {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.debug_fmt($level, ::std::format_args!($($arg)*))
    };
}

/// Writes the space-joined values plus a newline, then terminates the
/// process with a non-zero status. Never returns.
///
/// # Example
///
/// ```no_run
/// use logging::{fatal_log, Logger};
///
/// let mut log = Logger::new();
/// fatal_log!(log, "cannot open", "state.db");
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.fatal(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes a formatted template verbatim, then terminates the process with a
/// non-zero status. Never returns.
///
/// # Example
///
/// ```no_run
/// use logging::{fatal_logf, Logger};
///
/// let mut log = Logger::new();
/// fatal_logf!(log, "unrecoverable: {}\n", "checksum mismatch");
/// ```
#[macro_export]
macro_rules! fatal_logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal_fmt(::std::format_args!($($arg)*))
    };
}
