//! crates/verbosity/src/config.rs
//! TOML configuration that seeds a registry at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;
use crate::registry::Registry;

/// Startup configuration for a [`Registry`].
///
/// ```toml
/// active = "TRACE"
/// verify = true
///
/// [levels]
/// TRACE = 4
/// ```
///
/// `active` may be a level name or an integer. Level values must be integers.
/// Both are checked when the configuration is applied, not when it is parsed,
/// so type errors surface as [`RegistryError::TypeMismatch`](crate::RegistryError::TypeMismatch).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbosityConfig {
    /// Level to activate once all levels are registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<toml::Value>,
    /// Whether `active` must name a registered level.
    pub verify: bool,
    /// Additional levels keyed by name.
    pub levels: BTreeMap<String, toml::Value>,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self {
            active: None,
            verify: true,
            levels: BTreeMap::new(),
        }
    }
}

impl VerbosityConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Captures the levels and active level of `registry`.
    ///
    /// The active level is recorded by name when it is registered and by
    /// value otherwise, in which case `verify` is turned off so applying the
    /// result reproduces the same active level.
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let table = registry.levels();
        let active = registry.active();
        let (active_value, verify) = match table.name_of(active) {
            Some(name) => (toml::Value::String(name.to_owned()), true),
            None => (toml::Value::Integer(active.get()), false),
        };

        Self {
            active: Some(active_value),
            verify,
            levels: table
                .iter()
                .map(|(name, value)| (name.to_owned(), toml::Value::Integer(value.get())))
                .collect(),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Registers the configured levels, then applies `active`.
    ///
    /// Levels already present in the registry are left as they are. Returns
    /// what [`Registry::set`] returned for `active`, or `None` when no active
    /// level is configured.
    pub fn apply(&self, registry: &Registry) -> Result<Option<Level>, ConfigError> {
        for (name, value) in &self.levels {
            let value = Level::try_from(value)?;
            registry.add(name.as_str(), value);
        }

        match &self.active {
            Some(active) => Ok(registry.set_value(active, self.verify)?),
            None => Ok(None),
        }
    }
}
