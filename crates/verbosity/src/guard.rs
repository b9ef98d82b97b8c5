//! crates/verbosity/src/guard.rs
//! RAII gates around registry mutation and nested-call suspension.

use crate::level::Level;
use crate::registry::{Registry, RegistryState};
use crate::trace;

/// Opens the mutation gate of a [`RegistryState`] for the guard's lifetime.
///
/// The gate closes again when the guard is dropped, which covers early
/// returns and unwinding out of a mutating operation. All writes to the level
/// tables go through the guard's methods; the state itself is only reachable
/// read-only through [`Deref`](std::ops::Deref).
#[must_use = "dropping the guard immediately closes the mutation gate"]
pub(crate) struct MutationGuard<'a> {
    state: &'a mut RegistryState,
}

impl<'a> MutationGuard<'a> {
    pub(crate) fn open(state: &'a mut RegistryState) -> Self {
        state.gate_open = true;
        Self { state }
    }

    /// Replaces the active level and returns the previous one.
    pub(crate) fn swap_active(&mut self, level: Level) -> Level {
        std::mem::replace(&mut self.state.active, level)
    }

    /// Records a new pairing in every table and publishes its constant.
    pub(crate) fn insert_level(&mut self, name: String, value: Level) {
        self.state.levels.insert(value);
        self.state.by_value.insert(value, name.clone());
        self.state.constants.insert(name.clone(), value);
        self.state.by_name.insert(name, value);
    }

    /// Drops a pairing from every table and retracts its constant.
    pub(crate) fn remove_level(&mut self, name: &str, value: Level) {
        self.state.levels.remove(&value);
        self.state.by_value.remove(&value);
        self.state.by_name.remove(name);
        self.state.constants.remove(name);
    }
}

impl std::ops::Deref for MutationGuard<'_> {
    type Target = RegistryState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.state.gate_open = false;
    }
}

/// Holds the active level at [`Level::SUSPENDED`] until dropped.
///
/// Created by [`Registry::suspend`]. Dropping the guard writes the saved
/// level back, so the level is restored whether the suspended call returned
/// normally, failed, or unwound.
///
/// # Examples
///
/// ```
/// use verbosity::{Level, Registry};
///
/// let registry = Registry::new();
/// registry.set(Level::INFO);
/// {
///     let guard = registry.suspend();
///     assert_eq!(guard.saved(), Level::INFO);
///     assert_eq!(registry.active(), Level::SUSPENDED);
/// }
/// assert_eq!(registry.active(), Level::INFO);
/// ```
#[must_use = "dropping the guard immediately restores the previous level"]
#[derive(Debug)]
pub struct SuspendGuard<'a> {
    registry: &'a Registry,
    saved: Level,
}

impl<'a> SuspendGuard<'a> {
    pub(crate) fn new(registry: &'a Registry, saved: Level) -> Self {
        trace::suspended(saved);
        Self { registry, saved }
    }

    /// Returns the level that will be restored on drop.
    #[must_use]
    pub const fn saved(&self) -> Level {
        self.saved
    }
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.registry.restore(self.saved);
    }
}
