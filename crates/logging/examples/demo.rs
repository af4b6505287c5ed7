//! Walkthrough of the leveled logger: thresholds, gating, and the mirror.
//!
//! Run with `cargo run --example demo`.

use logging::{debug_log, emit_log, verbose_log, verbose_logf, Logger};

fn main() {
    let mut log = Logger::new();

    // Baseline output is always written.
    emit_log!(log, "demo starting");

    // Nothing below is shown yet: both thresholds default to zero.
    verbose_log!(log, 1, "hidden until -v");
    debug_log!(log, 1, "hidden until --debug");

    // Opt in to the first verbosity level and one debug level.
    log.set_verbose_level(1);
    log.set_debug_level(1);

    verbose_log!(log, 1, "scanning", 3, "directories");
    verbose_logf!(log, 1, "throughput {:.1} MB/s\n", 42.5);

    log.set_debug_origin(true);
    debug_log!(log, 1, "annotated with this file and line");

    // Level 2 stays above both thresholds.
    verbose_log!(log, 2, "still hidden");
    debug_log!(log, 2, "still hidden");

    emit_log!(log, "demo finished");
}
