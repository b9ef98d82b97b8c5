#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/printer/src/lib.rs
//!
//! # Overview
//!
//! `printer` wraps functions in level-gated bindings. A [`Printer`] names a
//! verbosity level and up to three messages: `before` the call, `after` a
//! successful call and `except` when the call fails. When the registry's
//! active level equals the printer's level the messages are emitted around
//! the call; otherwise the call runs untouched.
//!
//! # Design
//!
//! Messages are a tagged union ([`Message`]): a format template rendered
//! against the call arguments, a callback receiving the error context, a
//! callback receiving the call arguments, or a callback with arguments fixed
//! at binding time. [`dispatch`] emits one message; [`Decorated::call`]
//! sequences them around the wrapped function.
//!
//! Wrapped functions take a [`CallArgs`] bundle of positional and named
//! [`ArgValue`]s and return a `Result`. Bindings compose by wrapping a
//! closure that calls an inner [`Decorated`]; each layer checks the level
//! and applies its own suspension independently.
//!
//! A printer built with `bubble(false)` suspends the registry while its
//! function runs, so bindings nested inside stay silent. The saved level is
//! restored before `after` or `except` is emitted, on every exit path.
//!
//! # Errors
//!
//! Failures of the wrapped function come back as [`CallError::Wrapped`]
//! unless an `except` message swallows them. Any failure to emit a message
//! aborts the sequence with [`CallError::Dispatch`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use output_sink::{MessageSink, SharedBuffer};
//! use printer::{CallArgs, Printer, call_args};
//! use verbosity::{Level, Registry};
//!
//! let registry = Arc::new(Registry::new());
//! registry.set(Level::INFO);
//! let buffer = SharedBuffer::new();
//!
//! let parse = Printer::with_registry(Arc::clone(&registry), Level::INFO)
//!     .before("parsing {}")
//!     .except("could not parse {}")
//!     .sink(MessageSink::new(buffer.clone()))
//!     .wrap(|args: &CallArgs| {
//!         let text = args.get(0).and_then(|v| v.as_str()).unwrap_or_default();
//!         text.parse::<i64>()
//!     });
//!
//! assert_eq!(parse.call(&call_args!["12"]).unwrap(), Some(12));
//! assert_eq!(parse.call(&call_args!["x"]).unwrap(), None);
//! assert_eq!(
//!     buffer.to_string_lossy(),
//!     "parsing 12\nparsing x\ncould not parse x\n"
//! );
//! ```

mod args;
mod dispatch;
mod format;
mod message;
mod printer;
mod trace;

pub use args::{ArgValue, CallArgs};
pub use dispatch::{DispatchError, dispatch};
pub use format::{FormatError, render};
pub use message::{
    ArgsCallback, BoxError, Callback, CallbackResult, ErrorRef, Message, PARAMETERS, Parameters,
};
pub use printer::{CallError, Decorated, Printer};
