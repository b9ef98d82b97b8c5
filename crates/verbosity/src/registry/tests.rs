use super::*;

#[test]
fn new_registry_holds_builtins_and_starts_silent() {
    let registry = Registry::new();
    let levels = registry.levels();

    assert_eq!(registry.active(), Level::NONE);
    assert_eq!(levels.len(), 4);
    for (name, value) in Level::BUILTIN {
        assert_eq!(levels.value_of(name), Some(value));
        assert_eq!(levels.name_of(value), Some(name));
        assert_eq!(registry.constant(name), Some(value));
    }
}

#[test]
fn set_by_name_returns_previous_level() {
    let registry = Registry::new();
    assert_eq!(registry.set("DEBUG"), Some(Level::NONE));
    assert_eq!(registry.set("INFO"), Some(Level::DEBUG));
    assert_eq!(registry.active(), Level::INFO);
}

#[test]
fn set_same_level_is_distinguishable_from_noop() {
    let registry = Registry::new();
    assert_eq!(registry.set(Level::NONE), Some(Level::NONE));
    assert_eq!(registry.set("MISSING"), None);
}

#[test]
fn verified_set_ignores_unregistered_values() {
    let registry = Registry::new();
    registry.set(Level::INFO);

    assert_eq!(registry.set(42), None);
    assert_eq!(registry.set(Level::SUSPENDED), None);
    assert_eq!(registry.set("VERBOSE"), None);
    assert_eq!(registry.active(), Level::INFO);
}

#[test]
fn unverified_set_assigns_any_integer() {
    let registry = Registry::new();
    assert_eq!(registry.set_unverified(42), Some(Level::NONE));
    assert_eq!(registry.active(), Level::new(42));
    assert_eq!(registry.set_unverified(Level::SUSPENDED), Some(Level::new(42)));
    assert_eq!(registry.active(), Level::SUSPENDED);
}

#[test]
fn unverified_set_still_ignores_unknown_names() {
    let registry = Registry::new();
    registry.set(Level::TOTAL);
    assert_eq!(registry.set_unverified("NOPE"), None);
    assert_eq!(registry.active(), Level::TOTAL);
}

#[test]
fn set_value_accepts_strings_and_integers() {
    let registry = Registry::new();
    let by_name = toml::Value::String("DEBUG".into());
    assert_eq!(registry.set_value(&by_name, true), Ok(Some(Level::NONE)));
    assert_eq!(
        registry.set_value(&toml::Value::Integer(9), false),
        Ok(Some(Level::DEBUG))
    );
    assert_eq!(registry.active(), Level::new(9));
}

#[test]
fn set_value_rejects_other_types() {
    let registry = Registry::new();
    let result = registry.set_value(&toml::Value::Boolean(true), true);
    assert_eq!(
        result,
        Err(RegistryError::TypeMismatch {
            expected: "string or integer",
            found: "boolean",
        })
    );
    assert_eq!(registry.active(), Level::NONE);
    assert!(!registry.gate_is_open());
}

#[test]
fn add_registers_both_directions_and_constant() {
    let registry = Registry::new();
    assert!(registry.add("TRACE", 4));

    let levels = registry.levels();
    assert_eq!(levels.value_of("TRACE"), Some(Level::new(4)));
    assert_eq!(levels.name_of(4), Some("TRACE"));
    assert_eq!(registry.constant("TRACE"), Some(Level::new(4)));
    assert_eq!(registry.set(4), Some(Level::NONE));
}

#[test]
fn add_ignores_collisions_and_sentinel() {
    let registry = Registry::new();
    let before = registry.levels();

    assert!(!registry.add("INFO", 1));
    assert!(!registry.add("INFO", 10));
    assert!(!registry.add("CHATTY", 1));
    assert!(!registry.add("SUSPEND", -1));

    assert_eq!(registry.levels(), before);
    assert_eq!(registry.constant("SUSPEND"), None);
}

#[test]
fn add_value_checks_argument_types() {
    let registry = Registry::new();
    let name = toml::Value::String("TRACE".into());

    assert_eq!(
        registry.add_value(&toml::Value::Integer(4), &toml::Value::Integer(4)),
        Err(RegistryError::TypeMismatch {
            expected: "string",
            found: "integer",
        })
    );
    assert!(matches!(
        registry.add_value(&name, &toml::Value::String("4".into())),
        Err(RegistryError::TypeMismatch { expected: "integer", .. })
    ));
    assert_eq!(registry.add_value(&name, &toml::Value::Integer(4)), Ok(true));
}

#[test]
fn remove_by_name_or_value() {
    let registry = Registry::new();
    registry.add("TRACE", 4);
    registry.add("QUIET", -5);

    assert_eq!(registry.remove("TRACE"), Some(("TRACE".into(), Level::new(4))));
    assert_eq!(registry.remove(-5), Some(("QUIET".into(), Level::new(-5))));
    assert_eq!(registry.constant("TRACE"), None);
    assert_eq!(registry.levels().name_of(-5), None);
}

#[test]
fn remove_missing_level_is_silent() {
    let registry = Registry::new();
    let before = registry.levels();
    assert_eq!(registry.remove("NOPE"), None);
    assert_eq!(registry.remove(99), None);
    assert_eq!(registry.levels(), before);
}

#[test]
fn removed_level_is_no_longer_settable() {
    let registry = Registry::new();
    registry.remove("DEBUG");
    assert_eq!(registry.set("DEBUG"), None);
    assert_eq!(registry.set(Level::DEBUG), None);
    assert_eq!(registry.set_unverified(Level::DEBUG), Some(Level::NONE));
}

#[test]
fn removing_active_level_keeps_active_value() {
    let registry = Registry::new();
    registry.set("INFO");
    registry.remove("INFO");
    assert_eq!(registry.active(), Level::INFO);
}

#[test]
fn direct_assignment_is_rejected() {
    let registry = Registry::new();
    let result = registry.assign_constant("INFO", 9);
    assert_eq!(
        result,
        Err(RegistryError::StateProtection {
            attribute: "INFO".into()
        })
    );
    assert_eq!(registry.constant("INFO"), Some(Level::INFO));
}

#[test]
fn direct_assignment_never_creates_a_constant() {
    let registry = Registry::new();
    assert!(registry.assign_constant("TRACE", 4).is_err());
    assert_eq!(registry.constant("TRACE"), None);
    assert_eq!(registry.levels().value_of("TRACE"), None);
    assert!(!registry.gate_is_open());
}

#[test]
fn gate_is_closed_after_every_operation() {
    let registry = Registry::new();
    assert!(!registry.gate_is_open());
    registry.add("TRACE", 4);
    assert!(!registry.gate_is_open());
    registry.set("TRACE");
    assert!(!registry.gate_is_open());
    registry.set("MISSING");
    assert!(!registry.gate_is_open());
    registry.remove("TRACE");
    assert!(!registry.gate_is_open());
    drop(registry.suspend());
    assert!(!registry.gate_is_open());
}

#[test]
fn suspend_swaps_to_sentinel_and_restores() {
    let registry = Registry::new();
    registry.set("DEBUG");
    let guard = registry.suspend();
    assert_eq!(registry.active(), Level::SUSPENDED);
    assert_eq!(guard.saved(), Level::DEBUG);
    drop(guard);
    assert_eq!(registry.active(), Level::DEBUG);
}

#[test]
fn nested_suspension_unwinds_in_order() {
    let registry = Registry::new();
    registry.set("INFO");
    {
        let _outer = registry.suspend();
        let inner = registry.suspend();
        assert_eq!(inner.saved(), Level::SUSPENDED);
    }
    assert_eq!(registry.active(), Level::INFO);
}

#[test]
fn global_registry_is_shared() {
    let first = Registry::global();
    let second = Registry::global();
    assert!(Arc::ptr_eq(&first, &second));
}
