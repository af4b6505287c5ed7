use std::fmt;
use std::io::{self, Write};

use crate::line_mode::LineMode;

/// An opaque owned destination handle.
///
/// Anything that accepts a sequence of bytes qualifies: standard error,
/// standard output, an open file, an in-memory buffer, or a network-backed
/// writer. The sink never buffers, flushes, or closes a destination on its
/// own; replacing the output list simply drops the sink's handles while the
/// caller-held side of each destination stays open.
pub type Destination = Box<dyn Write + Send>;

/// Fan-out writer over an ordered destination list plus an optional mirror.
///
/// The sink delivers one already-formatted message to every destination in
/// `outputs`, in order, and to the mirror when one is configured. Delivery is
/// best-effort: a destination that fails to accept the message does not stop
/// delivery to the destinations after it, and the first error is reported
/// only after all of them have been attempted. Higher layers decide *whether*
/// a message is written at all; the sink only decides *where*.
///
/// The sink carries no synchronization. A single logical owner drives it;
/// concurrent callers sharing one instance must add their own mutual
/// exclusion around each write or interleaved output can result.
///
/// # Examples
///
/// Collect diagnostics into an in-memory buffer:
///
/// ```
/// use logging_sink::{FanoutSink, LineMode};
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Clone, Default)]
/// struct SharedBuf(Arc<Mutex<Vec<u8>>>);
///
/// impl Write for SharedBuf {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.lock().unwrap().extend_from_slice(buf);
///         Ok(buf.len())
///     }
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let buffer = SharedBuf::default();
/// let mut sink = FanoutSink::new(vec![Box::new(buffer.clone())]);
/// sink.write_outputs("partial transfer", LineMode::WithNewline)?;
///
/// assert_eq!(*buffer.0.lock().unwrap(), b"partial transfer\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FanoutSink {
    outputs: Vec<Destination>,
    mirror: Option<Destination>,
}

impl FanoutSink {
    /// Creates a sink that writes to the supplied destinations, in order.
    #[must_use]
    pub fn new(outputs: Vec<Destination>) -> Self {
        Self {
            outputs,
            mirror: None,
        }
    }

    /// Creates a sink with a single standard-error destination.
    ///
    /// This is the default wiring for command-line diagnostics and the
    /// starting configuration of `logging::Logger`.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(vec![Box::new(io::stderr())])
    }

    /// Replaces the entire output list.
    ///
    /// Previously configured destinations are simply dropped; the sink
    /// performs no flush or shutdown handshake on them, and anything they
    /// wrap (a shared buffer, a cloned file handle) stays usable on the
    /// caller's side. Individual entries are not addressable —
    /// reconfiguration is always wholesale.
    pub fn set_outputs(&mut self, outputs: Vec<Destination>) {
        self.outputs = outputs;
    }

    /// Replaces the mirror destination, or removes it with `None`.
    pub fn set_mirror(&mut self, mirror: Option<Destination>) {
        self.mirror = mirror;
    }

    /// Reports whether a mirror destination is configured.
    #[must_use]
    pub const fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }

    /// Returns the number of configured output destinations.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Writes `text` to every output destination, in order.
    ///
    /// With [`LineMode::WithNewline`] a `\n` terminator follows the text on
    /// each destination. An empty output list is not an error; the call is a
    /// silent no-op. Delivery continues past per-destination failures and the
    /// first error encountered is returned once every destination has been
    /// attempted.
    pub fn write_outputs(&mut self, text: &str, mode: LineMode) -> io::Result<()> {
        let mut first_error = None;
        for output in &mut self.outputs {
            if let Err(error) = write_one(output.as_mut(), text, mode) {
                first_error.get_or_insert(error);
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Writes `text` to the mirror destination, when one is configured.
    ///
    /// Returns `Ok(())` without side effects when no mirror is set. The
    /// mirror sits outside the output list on purpose: level gating applies
    /// to the outputs only, so callers route every message they reach through
    /// this method regardless of the gating outcome.
    pub fn write_mirror(&mut self, text: &str, mode: LineMode) -> io::Result<()> {
        match &mut self.mirror {
            Some(mirror) => write_one(mirror.as_mut(), text, mode),
            None => Ok(()),
        }
    }

    /// Flushes every output destination and the mirror.
    ///
    /// Best-effort like the write paths: all destinations are flushed and the
    /// first error is reported. The sink never flushes implicitly; this
    /// exists for callers that interleave the logger's output with their own
    /// writes to a shared stream.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut first_error = None;
        for output in &mut self.outputs {
            if let Err(error) = output.flush() {
                first_error.get_or_insert(error);
            }
        }
        if let Some(mirror) = &mut self.mirror {
            if let Err(error) = mirror.flush() {
                first_error.get_or_insert(error);
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for FanoutSink {
    /// Equivalent to [`FanoutSink::stderr`].
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutSink")
            .field("outputs", &self.outputs.len())
            .field("mirror", &self.mirror.is_some())
            .finish_non_exhaustive()
    }
}

fn write_one<W: Write + ?Sized>(writer: &mut W, text: &str, mode: LineMode) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if mode.append_newline() {
        writer.write_all(b"\n")?;
    }
    Ok(())
}
