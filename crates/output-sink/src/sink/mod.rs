use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;

mod shared_buffer;
mod writing;

pub use shared_buffer::SharedBuffer;

/// Writer handle shared between every clone of a [`MessageSink`].
type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Output sink used by printer bindings.
///
/// The sink owns a shared writer together with the [`LineMode`] that picks
/// the terminator and a flag that controls whether the writer is flushed after
/// every message. Cloning a sink is cheap and the clones write into the same
/// destination.
///
/// # Examples
///
/// ```
/// use output_sink::{LineMode, MessageSink, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let sink = MessageSink::with_line_mode(buffer.clone(), LineMode::WithoutNewline)
///     .with_flush(false);
///
/// sink.write_message("ready")?;
/// assert_eq!(buffer.contents(), b"ready".to_vec());
/// assert_eq!(buffer.flushes(), 0);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink {
    writer: SharedWriter,
    line_mode: LineMode,
    flush: bool,
}

impl MessageSink {
    /// Creates a sink that appends a newline and flushes after each message.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    pub fn with_line_mode<W>(writer: W, line_mode: LineMode) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            line_mode,
            flush: true,
        }
    }

    /// Creates a sink streaming into the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Replaces the [`LineMode`] used for subsequent writes.
    pub fn with_terminator(mut self, line_mode: impl Into<LineMode>) -> Self {
        self.line_mode = line_mode.into();
        self
    }

    /// Enables or disables flushing after each message.
    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> &LineMode {
        &self.line_mode
    }

    /// Reports whether the writer is flushed after each message.
    #[must_use]
    pub const fn flush_on_write(&self) -> bool {
        self.flush
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MessageSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("line_mode", &self.line_mode)
            .field("flush", &self.flush)
            .finish_non_exhaustive()
    }
}
