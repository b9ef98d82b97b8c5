//! crates/printer/src/printer.rs
//! Level-gated bindings that emit lifecycle messages around a wrapped call.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use output_sink::{LineMode, MessageSink};
use verbosity::{Level, Registry};

use crate::args::CallArgs;
use crate::dispatch::{DispatchError, dispatch};
use crate::message::Message;
use crate::trace;

/// A binding of a target verbosity level to `before`, `after` and `except`
/// messages.
///
/// A printer is configured once with the builder methods and then turned
/// into a [`Decorated`] function with [`wrap`](Self::wrap). Whenever the
/// registry's active level equals the printer's level, calls through the
/// decorated function emit the configured messages; otherwise they run
/// untouched.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use output_sink::{MessageSink, SharedBuffer};
/// use printer::{ArgValue, CallArgs, Printer, call_args};
/// use verbosity::{Level, Registry};
///
/// let registry = Arc::new(Registry::new());
/// registry.set(Level::INFO);
///
/// let buffer = SharedBuffer::new();
/// let sum = Printer::with_registry(Arc::clone(&registry), Level::INFO)
///     .before("adding {} and {}")
///     .after("added")
///     .sink(MessageSink::new(buffer.clone()))
///     .wrap(|args: &CallArgs| {
///         let total: i64 = args.positional().iter().filter_map(ArgValue::as_i64).sum();
///         Ok::<_, std::io::Error>(total)
///     });
///
/// assert_eq!(sum.call(&call_args![40, 2]).unwrap(), Some(42));
/// assert_eq!(buffer.to_string_lossy(), "adding 40 and 2\nadded\n");
/// ```
#[derive(Clone, Debug)]
pub struct Printer {
    registry: Arc<Registry>,
    verb: Level,
    before: Message,
    after: Message,
    except: Message,
    rethrow: Option<bool>,
    bubble: bool,
    sink: MessageSink,
}

impl Printer {
    /// Creates a printer for `verb` bound to [`Registry::global`].
    #[must_use]
    pub fn new(verb: impl Into<Level>) -> Self {
        Self::with_registry(Registry::global(), verb)
    }

    /// Creates a printer for `verb` bound to `registry`.
    #[must_use]
    pub fn with_registry(registry: Arc<Registry>, verb: impl Into<Level>) -> Self {
        Self {
            registry,
            verb: verb.into(),
            before: Message::format(""),
            after: Message::format(""),
            except: Message::None,
            rethrow: None,
            bubble: true,
            sink: MessageSink::stdout(),
        }
    }

    /// Sets the message emitted before the wrapped call.
    #[must_use]
    pub fn before(mut self, message: impl Into<Message>) -> Self {
        self.before = message.into();
        self
    }

    /// Sets the message emitted after the wrapped call succeeds.
    #[must_use]
    pub fn after(mut self, message: impl Into<Message>) -> Self {
        self.after = message.into();
        self
    }

    /// Sets the message emitted when the wrapped call fails.
    #[must_use]
    pub fn except(mut self, message: impl Into<Message>) -> Self {
        self.except = message.into();
        self
    }

    /// Chooses whether a failure is returned after `except` has run.
    ///
    /// Only meaningful together with an `except` message; without one the
    /// failure is always returned.
    #[must_use]
    pub const fn rethrow(mut self, rethrow: bool) -> Self {
        self.rethrow = Some(rethrow);
        self
    }

    /// Chooses whether bindings nested inside the wrapped call stay active.
    ///
    /// With `false` the registry is suspended for the duration of the call.
    #[must_use]
    pub const fn bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn sink(mut self, sink: MessageSink) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the terminator written after non-empty format messages.
    #[must_use]
    pub fn terminator(mut self, line_mode: impl Into<LineMode>) -> Self {
        self.sink = self.sink.with_terminator(line_mode);
        self
    }

    /// Chooses whether the sink is flushed after every format message.
    #[must_use]
    pub fn flush(mut self, flush: bool) -> Self {
        self.sink = self.sink.with_flush(flush);
        self
    }

    /// The level this printer responds to.
    #[must_use]
    pub const fn verb(&self) -> Level {
        self.verb
    }

    /// The configured output sink.
    #[must_use]
    pub const fn output(&self) -> &MessageSink {
        &self.sink
    }

    /// Reports whether nested bindings stay active during the call.
    #[must_use]
    pub const fn bubbles(&self) -> bool {
        self.bubble
    }

    /// Whether a failure is returned once `except` has been dispatched.
    ///
    /// Without an `except` message this is always `true`. With one, an unset
    /// flag means the failure is swallowed.
    #[must_use]
    pub const fn resolved_rethrow(&self) -> bool {
        if self.except.is_none() {
            true
        } else {
            matches!(self.rethrow, Some(true))
        }
    }

    /// Reports whether the registry's active level selects this printer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.active() == self.verb
    }

    /// Binds the printer to `func`.
    pub fn wrap<F, T, E>(self, func: F) -> Decorated<F>
    where
        F: Fn(&CallArgs) -> Result<T, E>,
    {
        Decorated {
            printer: self,
            func,
        }
    }
}

/// A function wrapped by a [`Printer`].
#[derive(Clone)]
pub struct Decorated<F> {
    printer: Printer,
    func: F,
}

impl<F> Decorated<F> {
    /// Calls the wrapped function with `args`.
    ///
    /// When the printer is inactive the function runs directly and its
    /// result is passed through. Otherwise `before` is emitted, the function
    /// runs (with the registry suspended when the printer does not bubble),
    /// and `after` or `except` is emitted depending on the outcome. A failure
    /// handled by `except` without rethrow yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Wrapped`] with the function's error when it is
    /// rethrown, and [`CallError::Dispatch`] when emitting a message fails.
    /// A dispatch failure stops the sequence at that point.
    pub fn call<T, E>(&self, args: &CallArgs) -> Result<Option<T>, CallError<E>>
    where
        F: Fn(&CallArgs) -> Result<T, E>,
        E: Error + 'static,
    {
        let printer = &self.printer;
        let active = printer.registry.active();
        if active != printer.verb {
            trace::call_skipped(printer.verb, active);
            return (self.func)(args).map(Some).map_err(CallError::Wrapped);
        }

        let rethrow = printer.resolved_rethrow();
        dispatch(&printer.before, args, None, &printer.sink)?;

        let outcome = {
            let _suspended = (!printer.bubble).then(|| printer.registry.suspend());
            (self.func)(args)
        };

        match outcome {
            Ok(value) => {
                dispatch(&printer.after, args, None, &printer.sink)?;
                Ok(Some(value))
            }
            Err(error) => {
                trace::call_failed(printer.verb, rethrow);
                dispatch(&printer.except, args, Some(&error), &printer.sink)?;
                if rethrow {
                    Err(CallError::Wrapped(error))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

impl<F> fmt::Debug for Decorated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("printer", &self.printer)
            .finish_non_exhaustive()
    }
}

/// Failure of a [`Decorated::call`].
#[derive(Debug)]
pub enum CallError<E> {
    /// The wrapped function failed and the failure was not swallowed.
    Wrapped(E),
    /// Emitting a message failed.
    Dispatch(DispatchError),
}

impl<E> CallError<E> {
    /// Returns the wrapped function's error, if that is what failed.
    #[must_use]
    pub const fn wrapped(&self) -> Option<&E> {
        match self {
            Self::Wrapped(error) => Some(error),
            Self::Dispatch(_) => None,
        }
    }

    /// Consumes the error, returning the wrapped function's error if any.
    pub fn into_wrapped(self) -> Option<E> {
        match self {
            Self::Wrapped(error) => Some(error),
            Self::Dispatch(_) => None,
        }
    }

    /// Reports whether emitting a message failed.
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }
}

impl<E> From<DispatchError> for CallError<E> {
    fn from(error: DispatchError) -> Self {
        Self::Dispatch(error)
    }
}

impl<E: fmt::Display> fmt::Display for CallError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapped(error) => write!(f, "wrapped call failed: {error}"),
            Self::Dispatch(error) => write!(f, "message dispatch failed: {error}"),
        }
    }
}

impl<E: Error + 'static> Error for CallError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Wrapped(error) => Some(error),
            Self::Dispatch(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests;
