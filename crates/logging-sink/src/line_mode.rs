/// Controls whether a [`FanoutSink`](crate::FanoutSink) write appends a trailing newline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after the message text.
    WithNewline,
    /// Emit the message text exactly as supplied.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether this mode appends a trailing newline.
    ///
    /// The joined-values emission style writes one diagnostic per line and
    /// therefore selects [`LineMode::WithNewline`]; the template style leaves
    /// line termination to the caller's format string and selects
    /// [`LineMode::WithoutNewline`]. Exposing the distinction as a method
    /// lets integrations mirror the sink's newline policy without pattern
    /// matching on the enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean "append a newline" flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`] and `false` to
    /// [`LineMode::WithoutNewline`], so call sites that already compute
    /// newline behaviour as a boolean can adopt the sink without branching on
    /// the variants themselves.
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into its boolean "append a newline" form.
    ///
    /// Delegates to [`LineMode::append_newline`] so the mapping stays
    /// consistent with the sink's own behaviour.
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
