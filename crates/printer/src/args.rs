//! crates/printer/src/args.rs
//! Call argument bundles forwarded to wrapped functions and messages.

use std::collections::BTreeMap;
use std::fmt;

/// A single call argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Text.
    Str(String),
}

impl ArgValue {
    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload as a float. Integers are converted.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub(crate) const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Str(value) => f.write_str(value),
        }
    }
}

macro_rules! int_arg {
    ($($ty:ty),*) => {$(
        impl From<$ty> for ArgValue {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        }
    )*};
}

int_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Positional and named arguments of one call.
///
/// The same bundle is handed to the wrapped function, rendered into format
/// messages and forwarded to argument-taking message callbacks.
///
/// # Examples
///
/// ```
/// use printer::{ArgValue, CallArgs, call_args};
///
/// let args = call_args!["upload.bin", 3, retries = 2];
/// assert_eq!(args.get(0), Some(&ArgValue::from("upload.bin")));
/// assert_eq!(args.get_named("retries").and_then(ArgValue::as_i64), Some(2));
/// assert_eq!(args, CallArgs::new().with("upload.bin").with(3).with_named("retries", 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<ArgValue>,
    named: BTreeMap<String, ArgValue>,
}

impl CallArgs {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn with(mut self, value: impl Into<ArgValue>) -> Self {
        self.push(value);
        self
    }

    /// Sets a named argument.
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends a positional argument in place.
    pub fn push(&mut self, value: impl Into<ArgValue>) {
        self.positional.push(value.into());
    }

    /// Sets a named argument in place, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.named.insert(name.into(), value.into())
    }

    /// Returns the positional argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArgValue> {
        self.positional.get(index)
    }

    /// Returns the named argument `name`.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&ArgValue> {
        self.named.get(name)
    }

    /// All positional arguments in call order.
    #[must_use]
    pub fn positional(&self) -> &[ArgValue] {
        &self.positional
    }

    /// All named arguments keyed by name.
    #[must_use]
    pub const fn named(&self) -> &BTreeMap<String, ArgValue> {
        &self.named
    }

    /// Reports whether the bundle holds no arguments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl<V: Into<ArgValue>> FromIterator<V> for CallArgs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }
}

/// Builds a [`CallArgs`] bundle from positional values and `name = value` pairs.
///
/// ```
/// use printer::call_args;
///
/// let args = call_args![1, "two", three = 3.0];
/// assert_eq!(args.positional().len(), 2);
/// assert!(call_args![].is_empty());
/// ```
#[macro_export]
macro_rules! call_args {
    (@acc $args:expr;) => { $args };
    (@acc $args:expr; $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::call_args!(@acc $args.with_named(stringify!($name), $value); $($($rest)*)?)
    };
    (@acc $args:expr; $value:expr $(, $($rest:tt)*)?) => {
        $crate::call_args!(@acc $args.with($value); $($($rest)*)?)
    };
    () => { $crate::CallArgs::new() };
    ($($rest:tt)+) => {
        $crate::call_args!(@acc $crate::CallArgs::new(); $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_mixes_positional_and_named() {
        let args = call_args![1, "a", flag = true, ratio = 0.5];
        assert_eq!(args.positional(), &[ArgValue::Int(1), ArgValue::from("a")]);
        assert_eq!(args.get_named("flag").and_then(ArgValue::as_bool), Some(true));
        assert_eq!(args.get(1).and_then(ArgValue::as_bool), None);
        assert_eq!(args.get_named("ratio").and_then(ArgValue::as_f64), Some(0.5));
    }

    #[test]
    fn macro_accepts_trailing_comma_and_expressions() {
        let base = 40;
        let args = call_args![base + 2, label = format!("n{}", base),];
        assert_eq!(args.get(0).and_then(ArgValue::as_i64), Some(42));
        assert_eq!(args.get_named("label").and_then(ArgValue::as_str), Some("n40"));
    }

    #[test]
    fn collected_values_are_positional() {
        let args: CallArgs = ["x", "y"].into_iter().collect();
        assert_eq!(args.positional().len(), 2);
        assert!(args.named().is_empty());
    }

    #[test]
    fn insert_replaces_named_value() {
        let mut args = CallArgs::new();
        assert_eq!(args.insert("k", 1), None);
        assert_eq!(args.insert("k", 2), Some(ArgValue::Int(1)));
    }

    #[test]
    fn display_renders_payload() {
        assert_eq!(ArgValue::from("text").to_string(), "text");
        assert_eq!(ArgValue::from(-3).to_string(), "-3");
        assert_eq!(ArgValue::from(false).to_string(), "false");
        assert_eq!(ArgValue::from(1.25).to_string(), "1.25");
    }
}
