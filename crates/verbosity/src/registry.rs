//! crates/verbosity/src/registry.rs
//! The verbosity level registry.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::RegistryError;
use crate::guard::{MutationGuard, SuspendGuard};
use crate::level::{Level, LevelRef, LevelTable};
use crate::trace;

/// Raw registry tables. Only [`MutationGuard`] writes to them.
#[derive(Debug)]
pub(crate) struct RegistryState {
    pub(crate) active: Level,
    pub(crate) levels: BTreeSet<Level>,
    pub(crate) by_name: BTreeMap<String, Level>,
    pub(crate) by_value: BTreeMap<Level, String>,
    pub(crate) constants: BTreeMap<String, Level>,
    pub(crate) gate_open: bool,
}

impl RegistryState {
    pub(crate) fn empty() -> Self {
        Self {
            active: Level::NONE,
            levels: BTreeSet::new(),
            by_name: BTreeMap::new(),
            by_value: BTreeMap::new(),
            constants: BTreeMap::new(),
            gate_open: false,
        }
    }

    fn with_builtins() -> Self {
        let mut state = Self::empty();
        {
            let mut guard = MutationGuard::open(&mut state);
            for (name, value) in Level::BUILTIN {
                guard.insert_level(name.to_owned(), value);
            }
        }
        state
    }

    fn resolve(&self, level: &LevelRef) -> Option<(String, Level)> {
        match level {
            LevelRef::Name(name) => self.by_name.get(name).map(|value| (name.clone(), *value)),
            LevelRef::Value(value) => self.by_value.get(value).map(|name| (name.clone(), *value)),
        }
    }
}

/// Registry of named verbosity levels plus the single active level.
///
/// The registry starts with `NONE = 0`, `INFO = 1`, `DEBUG = 2` and
/// `TOTAL = 3`, and the active level set to [`Level::NONE`]. Its tables are
/// only changed through [`set`](Self::set), [`add`](Self::add) and
/// [`remove`](Self::remove); each of them runs under one lock acquisition so
/// the name and value tables never disagree.
///
/// Tests build isolated registries with [`Registry::new`], while
/// [`Registry::global`] hands out the process-wide instance.
///
/// # Examples
///
/// ```
/// use verbosity::{Level, Registry};
///
/// let registry = Registry::new();
/// assert!(registry.add("TRACE", 4));
/// assert_eq!(registry.set("TRACE"), Some(Level::NONE));
/// assert_eq!(registry.active(), Level::new(4));
///
/// // unknown names are ignored
/// assert_eq!(registry.set("LOUD"), None);
/// assert_eq!(registry.remove("TRACE"), Some(("TRACE".to_owned(), Level::new(4))));
/// ```
#[derive(Debug)]
pub struct Registry {
    state: Mutex<RegistryState>,
}

impl Registry {
    /// Creates a registry holding only the built-in levels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::with_builtins()),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<R>(&self, op: impl FnOnce(&mut MutationGuard<'_>) -> R) -> R {
        let mut state = self.lock();
        let mut guard = MutationGuard::open(&mut state);
        op(&mut guard)
    }

    /// Returns a snapshot of every registered level.
    #[must_use]
    pub fn levels(&self) -> LevelTable {
        let state = self.lock();
        LevelTable::from_parts(state.by_name.clone(), state.by_value.clone())
    }

    /// Returns the active level.
    #[must_use]
    pub fn active(&self) -> Level {
        self.lock().active
    }

    /// Returns the published constant named `name`.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<Level> {
        self.lock().constants.get(name).copied()
    }

    /// Sets the active level to a registered name or value.
    ///
    /// Returns the previous level when the assignment happened and `None`
    /// when `level` is not registered, in which case nothing changes.
    pub fn set(&self, level: impl Into<LevelRef>) -> Option<Level> {
        self.set_with(level.into(), true)
    }

    /// Sets the active level without checking values against the registry.
    ///
    /// Integer values, including unregistered ones and [`Level::SUSPENDED`],
    /// are always assigned. An unknown name still has no value to assign and
    /// leaves the registry untouched.
    pub fn set_unverified(&self, level: impl Into<LevelRef>) -> Option<Level> {
        self.set_with(level.into(), false)
    }

    /// Dynamically typed form of [`set`](Self::set) and
    /// [`set_unverified`](Self::set_unverified).
    ///
    /// Fails with [`RegistryError::TypeMismatch`] unless `level` is a string
    /// or an integer.
    pub fn set_value(
        &self,
        level: &toml::Value,
        verify: bool,
    ) -> Result<Option<Level>, RegistryError> {
        let level = LevelRef::try_from(level)?;
        Ok(self.set_with(level, verify))
    }

    fn set_with(&self, level: LevelRef, verify: bool) -> Option<Level> {
        let previous = self.mutate(|state| {
            let resolved = match &level {
                LevelRef::Name(name) => *state.by_name.get(name)?,
                LevelRef::Value(value) => {
                    if verify && !state.levels.contains(value) {
                        return None;
                    }
                    *value
                }
            };
            Some((state.swap_active(resolved), resolved))
        });

        match previous {
            Some((previous, current)) => {
                trace::active_changed(previous, current);
                Some(previous)
            }
            None => {
                trace::set_ignored(&level);
                None
            }
        }
    }

    /// Registers `name` for `value` and publishes it as a constant.
    ///
    /// Returns `false` without changing anything when the name or the value
    /// is already registered, or when `value` is [`Level::SUSPENDED`].
    pub fn add(&self, name: impl Into<String>, value: impl Into<Level>) -> bool {
        let name = name.into();
        let value = value.into();
        let added = self.mutate(|state| {
            if value.is_suspended()
                || state.by_name.contains_key(&name)
                || state.by_value.contains_key(&value)
            {
                return false;
            }
            state.insert_level(name.clone(), value);
            true
        });

        if added {
            trace::level_added(&name, value);
        } else {
            trace::level_rejected(&name, value);
        }
        added
    }

    /// Dynamically typed form of [`add`](Self::add).
    ///
    /// Fails with [`RegistryError::TypeMismatch`] when `name` is not a string
    /// or `value` is not an integer.
    pub fn add_value(
        &self,
        name: &toml::Value,
        value: &toml::Value,
    ) -> Result<bool, RegistryError> {
        let toml::Value::String(name) = name else {
            return Err(RegistryError::TypeMismatch {
                expected: "string",
                found: name.type_str(),
            });
        };
        let value = Level::try_from(value)?;
        Ok(self.add(name.as_str(), value))
    }

    /// Stops recognising a level given by name or value.
    ///
    /// Returns the removed pairing, or `None` when nothing matched. Removing
    /// the same level twice is therefore harmless.
    pub fn remove(&self, level: impl Into<LevelRef>) -> Option<(String, Level)> {
        let level = level.into();
        let removed = self.mutate(|state| {
            let (name, value) = state.resolve(&level)?;
            state.remove_level(&name, value);
            Some((name, value))
        });

        if let Some((name, value)) = &removed {
            trace::level_removed(name, *value);
        }
        removed
    }

    /// Attempts to write a constant directly, outside the sanctioned operations.
    ///
    /// Constants change only through [`add`](Self::add) and
    /// [`remove`](Self::remove), so this always fails with
    /// [`RegistryError::StateProtection`] and leaves the registry untouched.
    pub fn assign_constant(
        &self,
        name: &str,
        value: impl Into<Level>,
    ) -> Result<(), RegistryError> {
        trace::constant_write_rejected(name, value.into(), self.constant(name));
        Err(RegistryError::StateProtection {
            attribute: name.to_owned(),
        })
    }

    /// Moves the active level to [`Level::SUSPENDED`] until the guard drops.
    pub fn suspend(&self) -> SuspendGuard<'_> {
        let saved = self.mutate(|state| state.swap_active(Level::SUSPENDED));
        SuspendGuard::new(self, saved)
    }

    pub(crate) fn restore(&self, level: Level) {
        self.mutate(|state| state.swap_active(level));
        trace::restored(level);
    }

    #[cfg(test)]
    pub(crate) fn gate_is_open(&self) -> bool {
        self.lock().gate_open
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
