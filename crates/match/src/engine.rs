use model::ApiErrorLike;

use crate::debug_match::{
    MatchTracer, trace_descriptor_bound, trace_descriptor_unmet, trace_record_leftover,
};
use crate::{ErrorDescriptor, ErrorRecord, ExpectationSet};

/// A descriptor bound to the actual error it consumed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Binding {
    /// Position of the descriptor in the expectation set.
    pub descriptor: usize,
    /// Position of the consumed error in the actual error list.
    pub record: usize,
}

/// Immutable outcome of [`assign`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment {
    bindings: Vec<Binding>,
    unmet: Vec<ErrorDescriptor>,
    leftover: Vec<ErrorRecord>,
}

impl Assignment {
    /// Returns the bindings in descriptor order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Returns the descriptors no actual error satisfied, in declaration order.
    #[must_use]
    pub fn unmet_expectations(&self) -> &[ErrorDescriptor] {
        &self.unmet
    }

    /// Returns the actual errors no descriptor consumed, in API order.
    #[must_use]
    pub fn leftover_actuals(&self) -> &[ErrorRecord] {
        &self.leftover
    }

    /// Returns `true` when every descriptor was met and every error consumed.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.unmet.is_empty() && self.leftover.is_empty()
    }
}

/// Pairs `expected` descriptors with `actual` errors, first fit.
///
/// Descriptors are visited in declaration order. Each one consumes the first
/// remaining error, in API order, that satisfies it. A descriptor nothing
/// satisfies is reported as unmet without consuming anything, and errors still
/// unconsumed at the end are reported as leftovers. Choices are never revisited,
/// so an early descriptor may take the only error a later one could have used.
pub fn assign<I>(expected: &ExpectationSet, actual: I) -> Assignment
where
    I: IntoIterator,
    I::Item: ApiErrorLike,
{
    let mut pool: Vec<(usize, ErrorRecord)> = actual
        .into_iter()
        .map(|error| ErrorRecord::from_error(&error))
        .enumerate()
        .collect();

    let mut tracer = MatchTracer::new();
    let mut bindings = Vec::with_capacity(expected.len().min(pool.len()));
    let mut unmet = Vec::new();

    for (descriptor_index, descriptor) in expected.iter().enumerate() {
        match pool
            .iter()
            .position(|(_, record)| descriptor.is_satisfied_by(record))
        {
            Some(position) => {
                let (record_index, record) = pool.remove(position);
                trace_descriptor_bound(descriptor_index, record_index, descriptor, &record);
                tracer.record_bound();
                bindings.push(Binding {
                    descriptor: descriptor_index,
                    record: record_index,
                });
            }
            None => {
                trace_descriptor_unmet(descriptor_index, descriptor, pool.len());
                tracer.record_unmet();
                unmet.push(descriptor.clone());
            }
        }
    }

    let leftover = pool
        .into_iter()
        .map(|(record_index, record)| {
            trace_record_leftover(record_index, &record);
            tracer.record_leftover();
            record
        })
        .collect();

    tracer.summary();

    Assignment {
        bindings,
        unmet,
        leftover,
    }
}
