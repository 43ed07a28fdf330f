//! Tracing for matcher evaluations, compiled out without the `tracing` feature.

use crate::{ExceptionOutcome, ResponseOutcome};

#[cfg(feature = "tracing")]
const RESPONSE_TARGET: &str = "errassert::response";

/// Traces the outcome of a response evaluation.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_response_outcome(outcome: &ResponseOutcome) {
    match outcome {
        ResponseOutcome::Null => {
            tracing::debug!(target: RESPONSE_TARGET, "response_null");
        }
        ResponseOutcome::WrongType => {
            tracing::debug!(target: RESPONSE_TARGET, "response_wrong_type");
        }
        ResponseOutcome::Evaluated(result) => {
            tracing::debug!(
                target: RESPONSE_TARGET,
                matched = result.is_match(),
                status_ok = result.status_ok(),
                actual_status = result.actual_status(),
                expected_status = ?result.expected_status(),
                unmet = result.unmatched_expectations().len(),
                leftover = result.leftover_actuals().len(),
                "response_evaluated"
            );
        }
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_response_outcome(_outcome: &ResponseOutcome) {}

/// Traces exception outcomes that never reach the response matcher.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_exception_outcome(outcome: &ExceptionOutcome) {
    match outcome {
        ExceptionOutcome::Null => tracing::debug!(target: RESPONSE_TARGET, "exception_null"),
        ExceptionOutcome::WrongType => {
            tracing::debug!(target: RESPONSE_TARGET, "exception_wrong_type");
        }
        ExceptionOutcome::MissingResponse => {
            tracing::debug!(target: RESPONSE_TARGET, "exception_without_response");
        }
        ExceptionOutcome::Response(_) => {}
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_exception_outcome(_outcome: &ExceptionOutcome) {}
