#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/output-sink/src/lib.rs
//!
//! # Overview
//!
//! `output-sink` provides the byte sink that printer bindings write their
//! lifecycle messages into. A [`MessageSink`] pairs a shared writer with the
//! line terminator chosen through [`LineMode`] and a flush-on-write flag.
//!
//! # Design
//!
//! The writer is stored behind `Arc<Mutex<..>>` so a sink can be cloned into
//! several bindings while all of them stream into the same destination. Each
//! write locks the writer once, emits the rendered text, appends the
//! terminator when the text is non-empty, and flushes when requested.
//!
//! # Invariants
//!
//! - The rendered text always reaches the writer, even when it is empty.
//! - The terminator is never written after an empty message.
//! - A poisoned writer lock is recovered rather than propagated as a panic.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values from the underlying writer.
//!
//! # Examples
//!
//! ```
//! use output_sink::{LineMode, MessageSink, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let sink = MessageSink::new(buffer.clone());
//! sink.write_message("start").unwrap();
//! sink.write_message("").unwrap();
//!
//! let custom = MessageSink::with_line_mode(buffer.clone(), LineMode::terminator(" | "));
//! custom.write_message("done").unwrap();
//!
//! assert_eq!(buffer.to_string_lossy(), "start\ndone | ");
//! ```

mod line_mode;
mod sink;

pub use line_mode::LineMode;
pub use sink::{MessageSink, SharedBuffer};
