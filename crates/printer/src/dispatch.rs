//! crates/printer/src/dispatch.rs
//! Emits a single [`Message`] for one point of a call's lifecycle.

use std::io;

use output_sink::MessageSink;
use thiserror::Error;

use crate::args::CallArgs;
use crate::format::{FormatError, render};
use crate::message::{BoxError, ErrorRef, Message};
use crate::trace;

/// Failure while emitting a message.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Writing or flushing the sink failed.
    #[error("failed to write message: {0}")]
    Io(#[from] io::Error),
    /// A format message could not be rendered.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A message callback returned an error.
    #[error("message callback failed: {0}")]
    Callback(#[source] BoxError),
}

/// Emits `message` for a call made with `args`.
///
/// `error` is the failure of the wrapped call when dispatching the `except`
/// message and `None` otherwise. Format messages are rendered against `args`
/// and written to `sink`; callbacks receive the error and, depending on the
/// form, either `args` or their own fixed arguments.
///
/// # Errors
///
/// Returns [`DispatchError::Format`] when a template does not render,
/// [`DispatchError::Io`] when the sink fails and [`DispatchError::Callback`]
/// when a callback reports an error.
///
/// # Examples
///
/// ```
/// use output_sink::{MessageSink, SharedBuffer};
/// use printer::{Message, call_args, dispatch};
///
/// let buffer = SharedBuffer::new();
/// let sink = MessageSink::new(buffer.clone());
/// dispatch(&Message::from("copied {} files"), &call_args![3], None, &sink).unwrap();
/// assert_eq!(buffer.to_string_lossy(), "copied 3 files\n");
/// ```
pub fn dispatch(
    message: &Message,
    args: &CallArgs,
    error: Option<ErrorRef<'_>>,
    sink: &MessageSink,
) -> Result<(), DispatchError> {
    trace::dispatching(message.kind(), error.is_some());

    let result = match message {
        Message::None => Ok(()),
        Message::Callback(callback) => callback(error).map_err(DispatchError::Callback),
        Message::Format(template) => render(template, args)
            .map_err(DispatchError::from)
            .and_then(|text| sink.write_message(&text).map_err(DispatchError::from)),
        Message::Forward(callback) => callback(error, args).map_err(DispatchError::Callback),
        Message::Fixed(callback, fixed) => callback(error, fixed).map_err(DispatchError::Callback),
    };

    if let Err(failure) = &result {
        trace::dispatch_failed(message.kind(), failure);
    }
    result
}
