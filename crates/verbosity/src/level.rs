//! crates/verbosity/src/level.rs
//! Level identifiers, level references and the bidirectional snapshot table.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use crate::error::RegistryError;

/// Integer verbosity tier.
///
/// Any integer may be used as a provisional active level, but only values
/// other than [`Level::SUSPENDED`] can be registered under a name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Level(i64);

impl Level {
    /// No diagnostic output.
    pub const NONE: Self = Self(0);
    /// Informational output.
    pub const INFO: Self = Self(1);
    /// Debug output.
    pub const DEBUG: Self = Self(2);
    /// Everything.
    pub const TOTAL: Self = Self(3);
    /// Sentinel that matches no binding; never registrable.
    pub const SUSPENDED: Self = Self(-1);

    pub(crate) const BUILTIN: [(&'static str, Self); 4] = [
        ("NONE", Self::NONE),
        ("INFO", Self::INFO),
        ("DEBUG", Self::DEBUG),
        ("TOTAL", Self::TOTAL),
    ];

    /// Wraps a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Reports whether this is the suspension sentinel.
    #[must_use]
    pub const fn is_suspended(self) -> bool {
        self.0 == Self::SUSPENDED.0
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl TryFrom<&toml::Value> for Level {
    type Error = RegistryError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Integer(raw) => Ok(Self(*raw)),
            other => Err(RegistryError::TypeMismatch {
                expected: "integer",
                found: other.type_str(),
            }),
        }
    }
}

/// Names a level either by its registered name or by its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LevelRef {
    /// A registered level name such as `"INFO"`.
    Name(String),
    /// A level value.
    Value(Level),
}

impl From<&str> for LevelRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for LevelRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for LevelRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Level> for LevelRef {
    fn from(level: Level) -> Self {
        Self::Value(level)
    }
}

impl From<i64> for LevelRef {
    fn from(value: i64) -> Self {
        Self::Value(Level(value))
    }
}

impl From<i32> for LevelRef {
    fn from(value: i32) -> Self {
        Self::Value(Level::from(value))
    }
}

impl TryFrom<&toml::Value> for LevelRef {
    type Error = RegistryError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::String(name) => Ok(Self::Name(name.clone())),
            toml::Value::Integer(raw) => Ok(Self::Value(Level(*raw))),
            other => Err(RegistryError::TypeMismatch {
                expected: "string or integer",
                found: other.type_str(),
            }),
        }
    }
}

impl fmt::Display for LevelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Value(level) => fmt::Display::fmt(level, f),
        }
    }
}

/// Owned snapshot of every registered level, indexable in both directions.
///
/// Looking up a [`LevelRef::Name`] yields the paired value and looking up a
/// [`LevelRef::Value`] yields the paired name, mirroring a single mapping that
/// holds both directions. Snapshots compare equal exactly when they describe
/// the same registrations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelTable {
    by_name: BTreeMap<String, Level>,
    by_value: BTreeMap<Level, String>,
}

impl LevelTable {
    pub(crate) fn from_parts(
        by_name: BTreeMap<String, Level>,
        by_value: BTreeMap<Level, String>,
    ) -> Self {
        Self { by_name, by_value }
    }

    /// Returns the value registered under `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<Level> {
        self.by_name.get(name).copied()
    }

    /// Returns the name registered for `value`.
    pub fn name_of(&self, value: impl Into<Level>) -> Option<&str> {
        self.by_value.get(&value.into()).map(String::as_str)
    }

    /// Looks up the opposite side of a pairing.
    #[must_use]
    pub fn get(&self, key: &LevelRef) -> Option<LevelRef> {
        match key {
            LevelRef::Name(name) => self.value_of(name).map(LevelRef::Value),
            LevelRef::Value(value) => self.name_of(*value).map(LevelRef::from),
        }
    }

    /// Reports whether `key` is registered.
    #[must_use]
    pub fn contains(&self, key: &LevelRef) -> bool {
        self.get(key).is_some()
    }

    /// Number of registered levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    /// Reports whether no level is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Iterates over `(name, value)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> + '_ {
        self.by_value
            .iter()
            .map(|(value, name)| (name.as_str(), *value))
    }
}

impl Serialize for LevelTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.by_name.iter().map(|(name, value)| (name, value.get())))
    }
}
