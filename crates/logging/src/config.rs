//! crates/logging/src/config.rs
//! Threshold configuration snapshot for the verbosity and debug channels.

/// Combined threshold configuration for the two gating channels.
///
/// A plain-data snapshot of a [`Logger`](crate::Logger)'s thresholds,
/// suitable for carrying through option parsing or a config file before the
/// logger itself exists. Defaults to zero for both channels, which shows
/// level-0 messages only.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Verbosity threshold; higher reveals more informational output.
    pub verbose: u8,
    /// Debug threshold; higher reveals more diagnostic output. Independent
    /// of `verbose`.
    pub debug: u8,
}

impl VerbosityConfig {
    /// Creates a configuration with the given thresholds.
    #[must_use]
    pub const fn new(verbose: u8, debug: u8) -> Self {
        Self { verbose, debug }
    }
}
