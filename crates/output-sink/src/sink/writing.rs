use super::MessageSink;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl MessageSink {
    /// Writes a rendered message using the sink's current [`LineMode`].
    ///
    /// The text is handed to the writer even when it is empty. The terminator
    /// follows only non-empty text. The writer is flushed afterwards when the
    /// sink was configured to flush on write.
    pub fn write_message(&self, text: &str) -> io::Result<()> {
        self.write_message_with_mode(text, &self.line_mode)
    }

    /// Writes `text` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_message_with_mode(&self, text: &str, line_mode: &LineMode) -> io::Result<()> {
        let mut writer = self.lock();

        if text.is_empty() {
            // zero-length write still reaches the writer
            let _ = writer.write(&[])?;
        } else {
            writer.write_all(text.as_bytes())?;
            if line_mode.appends_terminator() {
                writer.write_all(line_mode.as_str().as_bytes())?;
            }
        }

        if self.flush {
            writer.flush()?;
        }
        Ok(())
    }

    /// Writes each message from the iterator, honouring the sink's policy for every item.
    pub fn write_all<I, S>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for message in messages {
            self.write_message(message.as_ref())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}
