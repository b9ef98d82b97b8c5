#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `verbosity-printer` bundles the workspace crates behind one dependency:
//!
//! - [`verbosity`] owns the level registry and the active level;
//! - [`output_sink`] provides the writers messages are emitted into;
//! - [`printer`] wraps functions in level-gated bindings.
//!
//! The most common items are re-exported at the root.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use verbosity_printer::{CallArgs, Level, MessageSink, Printer, Registry, SharedBuffer};
//!
//! let registry = Arc::new(Registry::new());
//! registry.add("TRACE", 4);
//! registry.set("TRACE");
//!
//! let buffer = SharedBuffer::new();
//! let step = Printer::with_registry(Arc::clone(&registry), Level::new(4))
//!     .before("step")
//!     .sink(MessageSink::new(buffer.clone()))
//!     .wrap(|_: &CallArgs| Ok::<_, std::io::Error>(()));
//!
//! step.call(&CallArgs::new()).unwrap();
//! assert_eq!(buffer.to_string_lossy(), "step\n");
//! ```

pub use output_sink;
pub use printer;
pub use verbosity;

pub use output_sink::{LineMode, MessageSink, SharedBuffer};
pub use printer::{
    ArgValue, CallArgs, CallError, Decorated, DispatchError, FormatError, Message, PARAMETERS,
    Printer, call_args, dispatch, render,
};
pub use verbosity::{
    ConfigError, Level, LevelRef, LevelTable, Registry, RegistryError, SuspendGuard,
    VerbosityConfig,
};
#[cfg(feature = "tracing")]
pub use verbosity::{init_tracing, level_filter};
