use std::io;

use output_sink::SharedBuffer;

use super::*;
use crate::{ArgValue, call_args};

fn fresh(verb: Level) -> (Arc<Registry>, SharedBuffer, Printer) {
    let registry = Arc::new(Registry::new());
    let buffer = SharedBuffer::new();
    let printer = Printer::with_registry(Arc::clone(&registry), verb)
        .sink(MessageSink::new(buffer.clone()));
    (registry, buffer, printer)
}

#[test]
fn defaults_match_a_plain_binding() {
    let printer = Printer::with_registry(Arc::new(Registry::new()), Level::INFO);
    assert_eq!(printer.verb(), Level::INFO);
    assert!(printer.bubbles());
    assert!(printer.resolved_rethrow());
    assert!(matches!(&printer.before, Message::Format(t) if t.is_empty()));
    assert!(matches!(&printer.after, Message::Format(t) if t.is_empty()));
    assert!(printer.except.is_none());
    assert_eq!(printer.output().line_mode(), &LineMode::WithNewline);
    assert!(printer.output().flush_on_write());
}

#[test]
fn rethrow_always_holds_without_except() {
    let printer = Printer::with_registry(Arc::new(Registry::new()), Level::INFO);
    assert!(printer.clone().rethrow(false).resolved_rethrow());
    assert!(printer.rethrow(true).resolved_rethrow());
}

#[test]
fn rethrow_defaults_to_swallow_with_except() {
    let printer = Printer::with_registry(Arc::new(Registry::new()), Level::INFO).except("failed");
    assert!(!printer.resolved_rethrow());
    assert!(printer.clone().rethrow(true).resolved_rethrow());
    assert!(!printer.rethrow(false).resolved_rethrow());
}

#[test]
fn activity_follows_the_registry() {
    let (registry, _, printer) = fresh(Level::DEBUG);
    assert!(!printer.is_active());
    registry.set(Level::DEBUG);
    assert!(printer.is_active());
    let _suspended = registry.suspend();
    assert!(!printer.is_active());
}

#[test]
fn terminator_and_flush_adjust_the_sink() {
    let (_, buffer, printer) = fresh(Level::INFO);
    let printer = printer.terminator(" | ").flush(false);
    dispatch(&Message::from("a"), &CallArgs::new(), None, printer.output()).expect("dispatch");
    assert_eq!(buffer.to_string_lossy(), "a | ");
    assert_eq!(buffer.flushes(), 0);
}

#[test]
fn inactive_call_passes_result_through() {
    let (_, buffer, printer) = fresh(Level::INFO);
    let double = printer.before("never").wrap(|args: &CallArgs| {
        Ok::<_, io::Error>(args.get(0).and_then(ArgValue::as_i64).unwrap_or_default() * 2)
    });
    assert_eq!(double.call(&call_args![21]).expect("call succeeds"), Some(42));
    assert_eq!(buffer.writes(), 0);
}

#[test]
fn dispatch_failure_stops_before_the_call() {
    let (registry, buffer, printer) = fresh(Level::INFO);
    registry.set(Level::INFO);
    let ran = std::cell::Cell::new(false);
    let decorated = printer.before("{missing}").wrap(|_: &CallArgs| {
        ran.set(true);
        Ok::<_, io::Error>(())
    });

    let err = decorated.call(&CallArgs::new()).expect_err("before fails");
    assert!(err.is_dispatch());
    assert!(!ran.get());
    assert_eq!(buffer.writes(), 0);
}

#[test]
fn call_error_exposes_source() {
    let wrapped: CallError<io::Error> = CallError::Wrapped(io::Error::other("disk full"));
    assert_eq!(wrapped.to_string(), "wrapped call failed: disk full");
    assert_eq!(
        Error::source(&wrapped).map(ToString::to_string),
        Some("disk full".to_owned())
    );
    assert_eq!(wrapped.wrapped().map(io::Error::kind), Some(io::ErrorKind::Other));
    assert!(!wrapped.is_dispatch());

    let failed: CallError<io::Error> = DispatchError::Callback("listener gone".into()).into();
    assert!(failed.is_dispatch());
    assert!(failed.into_wrapped().is_none());
}

