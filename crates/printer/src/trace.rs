//! crates/printer/src/trace.rs
//! Tracing events for message dispatch and decorated calls.

#[cfg(feature = "tracing")]
const DISPATCH_TARGET: &str = "printer::dispatch";

#[cfg(feature = "tracing")]
const CALL_TARGET: &str = "printer::call";

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn dispatching(kind: &'static str, with_error: bool) {
    tracing::trace!(target: DISPATCH_TARGET, kind, with_error, "dispatching message");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn dispatching(_kind: &'static str, _with_error: bool) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn dispatch_failed(kind: &'static str, error: &crate::DispatchError) {
    tracing::debug!(target: DISPATCH_TARGET, kind, error = %error, "message dispatch failed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn dispatch_failed(_kind: &'static str, _error: &crate::DispatchError) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn call_skipped(verb: verbosity::Level, active: verbosity::Level) {
    tracing::trace!(
        target: CALL_TARGET,
        verb = verb.get(),
        active = active.get(),
        "binding inactive"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn call_skipped(_verb: verbosity::Level, _active: verbosity::Level) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn call_failed(verb: verbosity::Level, rethrow: bool) {
    tracing::trace!(target: CALL_TARGET, verb = verb.get(), rethrow, "wrapped call failed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn call_failed(_verb: verbosity::Level, _rethrow: bool) {}
