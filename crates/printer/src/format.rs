//! crates/printer/src/format.rs
//! Runtime replacement-field formatting for string messages.
//!
//! Templates use brace fields: `{}` takes the next positional argument,
//! `{1}` a specific one and `{name}` a named argument. `{{` and `}}` produce
//! literal braces. A field may carry a spec `:[[fill]align][0][width][.precision]`
//! where `align` is `<`, `>` or `^`. Without an explicit alignment numbers are
//! right-aligned and everything else is left-aligned. A `0` before the width
//! pads with zeros, placed after the sign for numbers without an explicit
//! alignment.

use thiserror::Error;

use crate::args::{ArgValue, CallArgs};

/// Failure to render a format message.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// A `{` without a matching `}`.
    #[error("single '{{' encountered in format string")]
    UnmatchedOpen,
    /// A `}` that neither closes a field nor is doubled.
    #[error("single '}}' encountered in format string")]
    UnmatchedClose,
    /// Automatic `{}` and manual `{0}` fields in the same template.
    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,
    /// A positional field beyond the supplied arguments.
    #[error("replacement index {0} out of range for positional args")]
    MissingIndex(usize),
    /// A named field with no matching argument.
    #[error("missing named argument `{0}`")]
    MissingName(String),
    /// A field name that is neither empty, an index, nor an identifier.
    #[error("invalid field name `{0}`")]
    InvalidField(String),
    /// A spec that could not be parsed or does not apply to the value.
    #[error("invalid format spec `{0}`")]
    InvalidSpec(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Numbering {
    Unset,
    Auto(usize),
    Manual,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Align {
    Left,
    Right,
    Center,
    AfterSign,
}

#[derive(Debug, Default, Eq, PartialEq)]
struct Spec {
    fill: Option<char>,
    align: Option<Align>,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Renders `template` against `args`.
///
/// # Examples
///
/// ```
/// use printer::{call_args, render};
///
/// let args = call_args!["sync", 3, host = "mirror"];
/// assert_eq!(render("{} #{} on {host}", &args).unwrap(), "sync #3 on mirror");
/// assert_eq!(render("[{1:>4}] {{{0}}}", &args).unwrap(), "[   3] {sync}");
/// ```
pub fn render(template: &str, args: &CallArgs) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut numbering = Numbering::Unset;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(FormatError::UnmatchedOpen),
                        Some(other) => field.push(other),
                    }
                }
                render_field(&field, args, &mut numbering, &mut out)?;
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(FormatError::UnmatchedClose),
            other => out.push(other),
        }
    }

    Ok(out)
}

fn render_field(
    field: &str,
    args: &CallArgs,
    numbering: &mut Numbering,
    out: &mut String,
) -> Result<(), FormatError> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, parse_spec(spec)?),
        None => (field, Spec::default()),
    };

    let value = lookup(name, args, numbering)?;
    let text = apply_precision(value, spec.precision, field)?;
    pad(&text, value, &spec, out);
    Ok(())
}

fn lookup<'a>(
    name: &str,
    args: &'a CallArgs,
    numbering: &mut Numbering,
) -> Result<&'a ArgValue, FormatError> {
    if name.is_empty() {
        let index = match *numbering {
            Numbering::Manual => return Err(FormatError::MixedNumbering),
            Numbering::Unset => 0,
            Numbering::Auto(next) => next,
        };
        *numbering = Numbering::Auto(index + 1);
        return args.get(index).ok_or(FormatError::MissingIndex(index));
    }

    if name.bytes().all(|b| b.is_ascii_digit()) {
        if matches!(numbering, Numbering::Auto(_)) {
            return Err(FormatError::MixedNumbering);
        }
        *numbering = Numbering::Manual;
        let index: usize = name
            .parse()
            .map_err(|_| FormatError::InvalidField(name.to_owned()))?;
        return args.get(index).ok_or(FormatError::MissingIndex(index));
    }

    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric());
    if !is_identifier {
        return Err(FormatError::InvalidField(name.to_owned()));
    }

    args.get_named(name)
        .ok_or_else(|| FormatError::MissingName(name.to_owned()))
}

fn parse_spec(spec: &str) -> Result<Spec, FormatError> {
    let invalid = || FormatError::InvalidSpec(spec.to_owned());
    let chars: Vec<char> = spec.chars().collect();
    let mut parsed = Spec::default();
    let mut pos = 0;

    let align_of = |c: char| match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    };

    if let Some(align) = chars.get(1).copied().and_then(align_of) {
        parsed.fill = Some(chars[0]);
        parsed.align = Some(align);
        pos = 2;
    } else if let Some(align) = chars.first().copied().and_then(align_of) {
        parsed.align = Some(align);
        pos = 1;
    }

    if chars.get(pos) == Some(&'0') {
        parsed.zero = true;
        pos += 1;
    }

    let width_start = pos;
    while chars.get(pos).is_some_and(char::is_ascii_digit) {
        pos += 1;
    }
    if pos > width_start {
        let digits: String = chars[width_start..pos].iter().collect();
        parsed.width = Some(digits.parse().map_err(|_| invalid())?);
    }

    if chars.get(pos) == Some(&'.') {
        pos += 1;
        let precision_start = pos;
        while chars.get(pos).is_some_and(char::is_ascii_digit) {
            pos += 1;
        }
        if pos == precision_start {
            return Err(invalid());
        }
        let digits: String = chars[precision_start..pos].iter().collect();
        parsed.precision = Some(digits.parse().map_err(|_| invalid())?);
    }

    if pos != chars.len() {
        return Err(invalid());
    }
    Ok(parsed)
}

fn apply_precision(
    value: &ArgValue,
    precision: Option<usize>,
    field: &str,
) -> Result<String, FormatError> {
    let Some(precision) = precision else {
        return Ok(value.to_string());
    };

    match value {
        ArgValue::Float(number) => Ok(format!("{number:.precision$}")),
        ArgValue::Str(text) => Ok(text.chars().take(precision).collect()),
        ArgValue::Int(_) | ArgValue::Bool(_) => Err(FormatError::InvalidSpec(field.to_owned())),
    }
}

fn pad(text: &str, value: &ArgValue, spec: &Spec, out: &mut String) {
    let len = text.chars().count();
    let width = spec.width.unwrap_or(0);
    if len >= width {
        out.push_str(text);
        return;
    }

    let fill = spec.fill.unwrap_or(if spec.zero { '0' } else { ' ' });
    let align = spec.align.unwrap_or(match (value.is_numeric(), spec.zero) {
        (true, true) => Align::AfterSign,
        (true, false) => Align::Right,
        (false, _) => Align::Left,
    });
    let gap = width - len;
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right | Align::AfterSign => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };

    let (sign, digits) = match align {
        Align::AfterSign if text.starts_with(['-', '+']) => text.split_at(1),
        _ => ("", text),
    };
    out.push_str(sign);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(digits);
    out.extend(std::iter::repeat_n(fill, right));
}

#[cfg(test)]
mod tests;
