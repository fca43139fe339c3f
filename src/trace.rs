//! Short-circuit trace events shared by `process` and `iterate`.
//!
//! Every event carries the same two fields: `operation` names the combinator
//! and `position` is the zero-based index of the step or element that failed.
//! The error value itself is never recorded.

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn short_circuited(operation: &'static str, position: usize) {
    tracing::trace!(operation, position, "short-circuited");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn short_circuited(_operation: &'static str, _position: usize) {}
