//! crates/verbosity/src/error.rs
//! Error kinds surfaced by registry operations and configuration loading.

use std::io;

use thiserror::Error;

/// Failure raised synchronously by a registry operation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// An argument had a type the operation does not accept.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Description of the accepted type(s).
        expected: &'static str,
        /// Type name of the rejected value.
        found: &'static str,
    },
    /// Registry state was written outside a sanctioned operation.
    #[error("can't manually modify verbosity state (attempted to assign `{attribute}`)")]
    StateProtection {
        /// Name of the constant the caller tried to assign.
        attribute: String,
    },
}

/// Failure raised while loading or applying a [`VerbosityConfig`](crate::VerbosityConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read verbosity config: {0}")]
    Io(#[from] io::Error),
    /// The configuration text is not valid TOML for this schema.
    #[error("invalid verbosity config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A configured value was rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
