//! crates/verbosity/src/tracing_bridge.rs
//! Bridge between the registry's active level and the tracing crate.
//!
//! The registry's tiers map onto tracing's level filters so that
//! application-wide `tracing` output follows the same knob as the printer
//! bindings:
//!
//! | Active level       | Filter  |
//! |--------------------|---------|
//! | negative / `NONE`  | `OFF`   |
//! | `INFO`             | `INFO`  |
//! | `DEBUG`            | `DEBUG` |
//! | `TOTAL` and above  | `TRACE` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use verbosity::{Registry, init_tracing};
//!
//! let registry = Registry::global();
//! registry.set("DEBUG");
//! init_tracing(&registry).expect("subscriber installed");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::level::Level;
use crate::registry::Registry;

/// Maps a verbosity level to the tracing filter with the same reach.
#[must_use]
pub const fn level_filter(level: Level) -> LevelFilter {
    match level.get() {
        i64::MIN..=0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Builds an [`EnvFilter`] defaulting to the registry's active level.
///
/// Directives in `RUST_LOG` still take precedence over the default.
#[must_use]
pub fn env_filter(registry: &Registry) -> EnvFilter {
    filter_from_env(registry, EnvFilter::DEFAULT_ENV)
}

fn filter_from_env(registry: &Registry, var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(var)
        .with_default_directive(level_filter(registry.active()).into())
        .from_env_lossy()
}

/// Installs a global fmt subscriber filtered by the registry's active level.
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(
    registry: &Registry,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(registry))
        .with_target(true)
        .try_init()
}
