//! crates/verbosity/src/trace.rs
//! Tracing events emitted by registry mutations.
//!
//! Every helper compiles to a no-op when the `tracing` feature is disabled.

use crate::level::Level;

/// Target used for all registry events.
#[cfg(feature = "tracing")]
pub(crate) const REGISTRY_TARGET: &str = "verbosity::registry";

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn level_added(name: &str, value: Level) {
    tracing::debug!(target: REGISTRY_TARGET, name = %name, value = value.get(), "level registered");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn level_added(_name: &str, _value: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn level_rejected(name: &str, value: Level) {
    tracing::trace!(
        target: REGISTRY_TARGET,
        name = %name,
        value = value.get(),
        "level registration ignored"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn level_rejected(_name: &str, _value: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn level_removed(name: &str, value: Level) {
    tracing::debug!(target: REGISTRY_TARGET, name = %name, value = value.get(), "level removed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn level_removed(_name: &str, _value: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn active_changed(previous: Level, current: Level) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        previous = previous.get(),
        current = current.get(),
        "active level changed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn active_changed(_previous: Level, _current: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn set_ignored(requested: &crate::LevelRef) {
    tracing::trace!(target: REGISTRY_TARGET, requested = %requested, "unrecognised level ignored");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn set_ignored(_requested: &crate::LevelRef) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn suspended(saved: Level) {
    tracing::trace!(target: REGISTRY_TARGET, saved = saved.get(), "nested messaging suspended");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn suspended(_saved: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn restored(level: Level) {
    tracing::trace!(target: REGISTRY_TARGET, level = level.get(), "active level restored");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn restored(_level: Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn constant_write_rejected(name: &str, attempted: Level, current: Option<Level>) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        name = %name,
        attempted = attempted.get(),
        current = current.map(Level::get),
        "direct constant write rejected"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn constant_write_rejected(_name: &str, _attempted: Level, _current: Option<Level>) {}
