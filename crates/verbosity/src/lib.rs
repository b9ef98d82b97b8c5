#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verbosity` owns the set of recognised verbosity levels and the single
//! active level that printer bindings compare themselves against. Levels are
//! integers paired with names; the built-in tiers are `NONE = 0`, `INFO = 1`,
//! `DEBUG = 2` and `TOTAL = 3`, and `-1` is reserved as the suspension
//! sentinel that matches nothing.
//!
//! # Design
//!
//! [`Registry`] is an explicit service object rather than ambient global
//! state. Tests build a fresh instance with [`Registry::new`]; production code
//! shares [`Registry::global`]. All tables live behind one mutex, and every
//! mutating operation runs inside a mutation guard that opens the state's
//! write gate for its duration. Direct writes attempted while the gate is
//! closed fail with [`RegistryError::StateProtection`].
//!
//! [`Registry::suspend`] swaps the active level to [`Level::SUSPENDED`] and
//! returns a [`SuspendGuard`] that restores the saved level on drop, which is
//! how printer bindings keep nested bindings quiet.
//!
//! # Invariants
//!
//! - The name and value tables are exact inverses at all times.
//! - `-1` is never registered.
//! - The mutation gate is closed whenever no registry operation is running.
//!
//! # Errors
//!
//! Typed operations cannot fail. The dynamically typed entry points
//! ([`Registry::set_value`], [`Registry::add_value`], [`VerbosityConfig::apply`])
//! report [`RegistryError::TypeMismatch`]. Unknown or colliding levels are not
//! errors; those calls are no-ops and say so through their return value.
//!
//! # Examples
//!
//! ```
//! use verbosity::{Level, Registry, VerbosityConfig};
//!
//! let registry = Registry::new();
//! let config = VerbosityConfig::from_toml_str("active = \"TRACE\"\n[levels]\nTRACE = 4\n")?;
//! config.apply(&registry)?;
//!
//! assert_eq!(registry.active(), Level::new(4));
//! assert_eq!(registry.levels().name_of(4), Some("TRACE"));
//! # Ok::<(), verbosity::ConfigError>(())
//! ```

mod config;
mod error;
mod guard;
mod level;
mod registry;
mod trace;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use error::{ConfigError, RegistryError};
pub use guard::SuspendGuard;
pub use level::{Level, LevelRef, LevelTable};
pub use registry::Registry;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{env_filter, init_tracing, level_filter};
