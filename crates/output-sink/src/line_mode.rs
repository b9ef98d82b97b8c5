use std::borrow::Cow;

/// Selects the terminator a [`MessageSink`](crate::MessageSink) appends after each non-empty message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a `\n` terminator after each rendered message.
    WithNewline,
    /// Emit the rendered message without any terminator.
    WithoutNewline,
    /// Append a caller-provided terminator.
    Terminator(Cow<'static, str>),
}

impl LineMode {
    /// Builds a [`LineMode::Terminator`] from any string-like value.
    ///
    /// An empty terminator behaves exactly like [`LineMode::WithoutNewline`].
    ///
    /// # Examples
    ///
    /// ```
    /// use output_sink::LineMode;
    ///
    /// assert_eq!(LineMode::terminator("\r\n").as_str(), "\r\n");
    /// assert!(!LineMode::terminator("").appends_terminator());
    /// ```
    pub fn terminator(end: impl Into<Cow<'static, str>>) -> Self {
        Self::Terminator(end.into())
    }

    /// Returns the terminator text for this mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WithNewline => "\n",
            Self::WithoutNewline => "",
            Self::Terminator(end) => end.as_ref(),
        }
    }

    /// Reports whether the mode writes anything after a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use output_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.appends_terminator());
    /// assert!(!LineMode::WithoutNewline.appends_terminator());
    /// ```
    #[must_use]
    pub fn appends_terminator(&self) -> bool {
        !self.as_str().is_empty()
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`], `false` to [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<&'static str> for LineMode {
    fn from(end: &'static str) -> Self {
        match end {
            "\n" => Self::WithNewline,
            "" => Self::WithoutNewline,
            other => Self::Terminator(Cow::Borrowed(other)),
        }
    }
}

impl From<String> for LineMode {
    fn from(end: String) -> Self {
        match end.as_str() {
            "\n" => Self::WithNewline,
            "" => Self::WithoutNewline,
            _ => Self::Terminator(Cow::Owned(end)),
        }
    }
}

#[cfg(test)]
mod tests;
