//! Tracing for descriptor/record assignment.
//!
//! Every decision [`assign`](crate::assign) makes can be emitted as a
//! structured `tracing` event under the `errassert::match` target. The
//! functions compile to no-op inline stubs unless the `tracing` feature is
//! enabled, so instrumented call sites cost nothing in default builds.
//!
//! # Examples
//!
//! ```rust,ignore
//! use matching::debug_match::{MatchTracer, trace_assignment_summary};
//!
//! let mut tracer = MatchTracer::new();
//! tracer.record_bound();
//! tracer.record_unmet();
//! tracer.record_leftover();
//! tracer.summary();
//! ```

use crate::{ErrorDescriptor, ErrorRecord};

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const MATCH_TARGET: &str = "errassert::match";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a descriptor binding to an actual record.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_descriptor_bound(
    descriptor_index: usize,
    record_index: usize,
    descriptor: &ErrorDescriptor,
    record: &ErrorRecord,
) {
    tracing::trace!(
        target: MATCH_TARGET,
        descriptor_index = descriptor_index,
        record_index = record_index,
        descriptor = %descriptor,
        record = %record,
        "descriptor_bound"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_descriptor_bound(
    _descriptor_index: usize,
    _record_index: usize,
    _descriptor: &ErrorDescriptor,
    _record: &ErrorRecord,
) {
}

/// Traces a descriptor no remaining record satisfies.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_descriptor_unmet(
    descriptor_index: usize,
    descriptor: &ErrorDescriptor,
    pool_size: usize,
) {
    tracing::debug!(
        target: MATCH_TARGET,
        descriptor_index = descriptor_index,
        descriptor = %descriptor,
        pool_size = pool_size,
        "descriptor_unmet"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_descriptor_unmet(
    _descriptor_index: usize,
    _descriptor: &ErrorDescriptor,
    _pool_size: usize,
) {
}

/// Traces a record left over once every descriptor was processed.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_record_leftover(record_index: usize, record: &ErrorRecord) {
    tracing::debug!(
        target: MATCH_TARGET,
        record_index = record_index,
        record = %record,
        "record_leftover"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_record_leftover(_record_index: usize, _record: &ErrorRecord) {}

/// Traces the outcome of one assignment.
///
/// # Arguments
///
/// * `bound` - Number of descriptors bound to a record
/// * `unmet` - Number of descriptors left without a record
/// * `leftover` - Number of records no descriptor consumed
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_assignment_summary(bound: usize, unmet: usize, leftover: usize) {
    tracing::debug!(
        target: MATCH_TARGET,
        bound = bound,
        unmet = unmet,
        leftover = leftover,
        exact = unmet == 0 && leftover == 0,
        "assignment_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_assignment_summary(_bound: usize, _unmet: usize, _leftover: usize) {}

// ============================================================================
// MatchTracer - counts the decisions of one assignment
// ============================================================================

/// Counts the decisions of a single [`assign`](crate::assign) call.
///
/// Each call creates its own tracer and emits one summary event from it when
/// the assignment is complete.
///
/// # Examples
///
/// ```
/// # use matching::debug_match::MatchTracer;
/// let mut tracer = MatchTracer::new();
///
/// tracer.record_bound();
/// tracer.record_bound();
/// tracer.record_unmet();
///
/// assert_eq!(tracer.bound(), 2);
/// assert_eq!(tracer.unmet(), 1);
/// assert!(!tracer.is_exact());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchTracer {
    bound: usize,
    unmet: usize,
    leftover: usize,
}

impl MatchTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bound: 0,
            unmet: 0,
            leftover: 0,
        }
    }

    /// Records a descriptor bound to a record.
    pub fn record_bound(&mut self) {
        self.bound += 1;
    }

    /// Records an unmet descriptor.
    pub fn record_unmet(&mut self) {
        self.unmet += 1;
    }

    /// Records a leftover record.
    pub fn record_leftover(&mut self) {
        self.leftover += 1;
    }

    /// Emits a summary event with the accumulated counts.
    pub fn summary(&self) {
        trace_assignment_summary(self.bound, self.unmet, self.leftover);
    }

    /// Returns the number of bound descriptors.
    #[must_use]
    pub const fn bound(&self) -> usize {
        self.bound
    }

    /// Returns the number of unmet descriptors.
    #[must_use]
    pub const fn unmet(&self) -> usize {
        self.unmet
    }

    /// Returns the number of leftover records.
    #[must_use]
    pub const fn leftover(&self) -> usize {
        self.leftover
    }

    /// Returns `true` when nothing was unmet or left over.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.unmet == 0 && self.leftover == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracer_starts_exact() {
        let tracer = MatchTracer::new();
        assert_eq!(tracer.bound(), 0);
        assert!(tracer.is_exact());
    }

    #[test]
    fn counts_cover_one_assignment() {
        let mut tracer = MatchTracer::default();
        tracer.record_bound();
        tracer.record_unmet();
        tracer.record_leftover();
        tracer.record_leftover();

        assert_eq!(tracer.bound(), 1);
        assert_eq!(tracer.unmet(), 1);
        assert_eq!(tracer.leftover(), 2);
        assert!(!tracer.is_exact());
        tracer.summary();

        assert!(MatchTracer::new().is_exact());
    }

    #[test]
    fn trace_functions_do_not_panic() {
        let descriptor = ErrorDescriptor::new(1);
        let record = ErrorRecord::new(1).with_message("m");

        trace_descriptor_bound(0, 0, &descriptor, &record);
        trace_descriptor_unmet(0, &descriptor, 3);
        trace_record_leftover(2, &record);
        trace_assignment_summary(1, 0, 0);
        MatchTracer::new().summary();
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn events_emit_under_subscriber() {
        test_support::init_tracing();
        let descriptor = ErrorDescriptor::new(1);
        let record = ErrorRecord::new(2).with_message("m");

        trace_descriptor_unmet(0, &descriptor, 1);
        trace_record_leftover(0, &record);
        trace_assignment_summary(0, 1, 1);
    }
}
