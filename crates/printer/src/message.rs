//! crates/printer/src/message.rs
//! The three message representations a printer binding can carry.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::args::CallArgs;

/// Boxed error returned by message callbacks.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Error context handed to messages dispatched for a failed call.
pub type ErrorRef<'a> = &'a (dyn Error + 'static);

/// Result returned by message callbacks.
pub type CallbackResult = Result<(), BoxError>;

/// Callback that receives only the optional error context.
pub type Callback = Arc<dyn Fn(Option<ErrorRef<'_>>) -> CallbackResult + Send + Sync>;

/// Callback that receives the optional error context and an argument bundle.
pub type ArgsCallback =
    Arc<dyn Fn(Option<ErrorRef<'_>>, &CallArgs) -> CallbackResult + Send + Sync>;

/// Marker selecting the argument-forwarding form when building a message from a tuple.
///
/// `Message::from((PARAMETERS, f))` is the same as [`Message::forward(f)`](Message::forward).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Parameters;

/// The shared [`Parameters`] marker.
pub const PARAMETERS: Parameters = Parameters;

/// What a binding emits at one point of a call's lifecycle.
///
/// # Examples
///
/// ```
/// use std::error::Error;
///
/// use printer::{CallArgs, CallbackResult, Message, PARAMETERS, call_args};
///
/// let plain: Message = "copying {}".into();
/// let lazy = Message::callback(|_err| Ok(()));
/// let forwarded = Message::from((
///     PARAMETERS,
///     |_err: Option<&(dyn Error + 'static)>, args: &CallArgs| -> CallbackResult {
///         assert_eq!(args.positional().len(), 1);
///         Ok(())
///     },
/// ));
/// let fixed = Message::fixed(
///     |_err, args| {
///         assert!(args.get(0).is_some());
///         Ok(())
///     },
///     call_args!["fixed"],
/// );
///
/// assert!(matches!(plain, Message::Format(_)));
/// assert!(!lazy.is_none() && !forwarded.is_none() && !fixed.is_none());
/// ```
#[derive(Clone, Default)]
pub enum Message {
    /// Emit nothing.
    #[default]
    None,
    /// Invoke a callback with the error context only; call arguments are not forwarded.
    Callback(Callback),
    /// Render a template against the call arguments and write it to the sink.
    Format(String),
    /// Invoke a callback with the error context and the original call arguments.
    Forward(ArgsCallback),
    /// Invoke a callback with the error context and arguments fixed at binding time.
    Fixed(ArgsCallback, CallArgs),
}

impl Message {
    /// Builds a [`Message::Callback`].
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(Option<ErrorRef<'_>>) -> CallbackResult + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Builds a [`Message::Format`].
    pub fn format(template: impl Into<String>) -> Self {
        Self::Format(template.into())
    }

    /// Builds a [`Message::Forward`].
    pub fn forward<F>(f: F) -> Self
    where
        F: Fn(Option<ErrorRef<'_>>, &CallArgs) -> CallbackResult + Send + Sync + 'static,
    {
        Self::Forward(Arc::new(f))
    }

    /// Builds a [`Message::Fixed`].
    pub fn fixed<F>(f: F, args: CallArgs) -> Self
    where
        F: Fn(Option<ErrorRef<'_>>, &CallArgs) -> CallbackResult + Send + Sync + 'static,
    {
        Self::Fixed(Arc::new(f), args)
    }

    /// Reports whether this is [`Message::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Callback(_) => "callback",
            Self::Format(_) => "format",
            Self::Forward(_) => "forward",
            Self::Fixed(..) => "fixed",
        }
    }
}

impl From<&str> for Message {
    fn from(template: &str) -> Self {
        Self::Format(template.to_owned())
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Self::Format(template)
    }
}

impl<M: Into<Self>> From<Option<M>> for Message {
    fn from(message: Option<M>) -> Self {
        message.map_or(Self::None, Into::into)
    }
}

impl<F> From<(Parameters, F)> for Message
where
    F: Fn(Option<ErrorRef<'_>>, &CallArgs) -> CallbackResult + Send + Sync + 'static,
{
    fn from((_, f): (Parameters, F)) -> Self {
        Self::forward(f)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Format(template) => f.debug_tuple("Format").field(template).finish(),
            Self::Forward(_) => f.write_str("Forward(..)"),
            Self::Fixed(_, args) => f.debug_tuple("Fixed").field(&"..").field(args).finish(),
        }
    }
}
