use std::any::Any;

use matching::{ErrorDescriptor, FullPattern};
use model::{ApiErrorsException, ErrorCode, ErrorLocationType, ErrorsException};

use crate::trace::trace_exception_outcome;
use crate::{Description, Matcher, ResponseMatcher, ResponseOutcome, render};

/// Expects an exception carrying an API error response that satisfies an
/// inner [`ResponseMatcher`].
///
/// The exception matcher has no matching logic of its own: it unwraps the
/// carried response and delegates. An exception without a response never
/// matches, whatever errors are expected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExceptionMatcher {
    response: ResponseMatcher,
}

impl ExceptionMatcher {
    /// Requires the carried response to have HTTP status `status`.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            response: ResponseMatcher::for_status(status),
        }
    }

    /// Wraps an already configured response matcher.
    #[must_use]
    pub const fn from_response_matcher(response: ResponseMatcher) -> Self {
        Self { response }
    }

    /// Returns the inner response matcher.
    #[must_use]
    pub const fn response_matcher(&self) -> &ResponseMatcher {
        &self.response
    }

    /// Appends a prepared descriptor.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: ErrorDescriptor) -> Self {
        self.response = self.response.with_descriptor(descriptor);
        self
    }

    /// See [`ResponseMatcher::with_error`].
    #[must_use]
    pub fn with_error(self, code: impl ErrorCode) -> Self {
        self.with_descriptor(ErrorDescriptor::new(code))
    }

    /// See [`ResponseMatcher::with_located_error`].
    #[must_use]
    pub fn with_located_error(
        self,
        code: impl ErrorCode,
        location_type: impl ErrorLocationType,
        location: impl Into<String>,
    ) -> Self {
        self.with_descriptor(ErrorDescriptor::new(code).at(location_type, location))
    }

    /// See [`ResponseMatcher::with_error_message`].
    #[must_use]
    pub fn with_error_message(
        self,
        code: impl ErrorCode,
        location_type: impl ErrorLocationType,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.with_descriptor(
            ErrorDescriptor::new(code)
                .at(location_type, location)
                .with_message(message),
        )
    }

    /// See [`ResponseMatcher::with_error_pattern`].
    #[must_use]
    pub fn with_error_pattern(
        self,
        code: impl ErrorCode,
        location_type: impl ErrorLocationType,
        location: impl Into<String>,
        pattern: FullPattern,
    ) -> Self {
        self.with_descriptor(
            ErrorDescriptor::new(code)
                .at(location_type, location)
                .with_message_pattern(pattern),
        )
    }

    /// Evaluates `exception` (`None` standing for a missing exception).
    pub fn evaluate<E: ErrorsException + ?Sized>(&self, exception: Option<&E>) -> ExceptionOutcome {
        let outcome = match exception.map(ErrorsException::error_response) {
            None => ExceptionOutcome::Null,
            Some(None) => ExceptionOutcome::MissingResponse,
            Some(Some(response)) => {
                ExceptionOutcome::Response(self.response.evaluate(Some(response)))
            }
        };
        trace_exception_outcome(&outcome);
        outcome
    }

    /// Evaluates a type-erased candidate.
    ///
    /// Accepts [`ApiErrorsException`] and `Option<ApiErrorsException>`; any
    /// other type yields [`ExceptionOutcome::WrongType`].
    pub fn evaluate_any(&self, candidate: &dyn Any) -> ExceptionOutcome {
        if let Some(exception) = candidate.downcast_ref::<ApiErrorsException>() {
            self.evaluate(Some(exception))
        } else if let Some(exception) = candidate.downcast_ref::<Option<ApiErrorsException>>() {
            self.evaluate(exception.as_ref())
        } else {
            let outcome = ExceptionOutcome::WrongType;
            trace_exception_outcome(&outcome);
            outcome
        }
    }
}

impl From<ResponseMatcher> for ExceptionMatcher {
    fn from(response: ResponseMatcher) -> Self {
        Self::from_response_matcher(response)
    }
}

/// Builds a matcher for an exception whose response has HTTP status `status`.
#[must_use]
pub const fn is_api_errors_exception(status: u16) -> ExceptionMatcher {
    ExceptionMatcher::new(status)
}

/// Result of evaluating one candidate with an [`ExceptionMatcher`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExceptionOutcome {
    /// The candidate was missing.
    Null,
    /// The candidate was not an API errors exception.
    WrongType,
    /// The exception carried no error response.
    MissingResponse,
    /// The carried response was evaluated by the inner matcher.
    Response(ResponseOutcome),
}

impl ExceptionOutcome {
    /// Returns `true` if the candidate satisfied the matcher.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Response(outcome) if outcome.is_match())
    }
}

impl<E: ErrorsException> Matcher<E> for ExceptionMatcher {
    fn matches(&self, actual: &E) -> bool {
        self.evaluate(Some(actual)).is_match()
    }

    fn describe_to(&self, description: &mut Description) {
        render::describe_exception_expectation(self, description);
    }

    fn describe_mismatch(&self, actual: &E, description: &mut Description) {
        render::describe_exception_outcome(&self.evaluate(Some(actual)), description);
    }
}

impl Matcher<dyn Any> for ExceptionMatcher {
    fn matches(&self, actual: &dyn Any) -> bool {
        self.evaluate_any(actual).is_match()
    }

    fn describe_to(&self, description: &mut Description) {
        render::describe_exception_expectation(self, description);
    }

    fn describe_mismatch(&self, actual: &dyn Any, description: &mut Description) {
        render::describe_exception_outcome(&self.evaluate_any(actual), description);
    }
}
