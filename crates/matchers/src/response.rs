use std::any::Any;

use matching::{Assignment, ErrorDescriptor, ErrorRecord, ExpectationSet, FullPattern, assign};
use model::{ApiErrorResponse, ErrorCode, ErrorLocationType, ErrorResponse};

use crate::trace::trace_response_outcome;
use crate::{Description, Matcher, render};

/// Expects an API error response with an optional HTTP status code and an
/// exact set of errors.
///
/// Errors are declared with the `with_*` methods, each appending one
/// [`ErrorDescriptor`]. A response matches when its status equals the expected
/// one (if any) and its errors correspond one-to-one with the descriptors: no
/// descriptor unmet and no error unexplained.
///
/// # Examples
///
/// ```
/// use matchers::{assert_that, is_api_error_response_with_status};
/// use model::{ApiError, ApiErrorResponse};
///
/// let response = ApiErrorResponse::new(422)
///     .with_error(ApiError::new(1000).at("json", "/name").with_message("required"));
///
/// assert_that!(
///     response,
///     is_api_error_response_with_status(422).with_error_message(1000, "json", "/name", "required")
/// );
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResponseMatcher {
    expected_status: Option<u16>,
    expectations: ExpectationSet,
}

impl ResponseMatcher {
    /// Accepts any HTTP status code.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_status: None,
            expectations: ExpectationSet::new(),
        }
    }

    /// Requires the HTTP status code to equal `status`.
    #[must_use]
    pub const fn for_status(status: u16) -> Self {
        Self {
            expected_status: Some(status),
            expectations: ExpectationSet::new(),
        }
    }

    /// Returns the expected HTTP status code, if one is required.
    #[must_use]
    pub const fn expected_status(&self) -> Option<u16> {
        self.expected_status
    }

    /// Returns the declared expectations.
    #[must_use]
    pub const fn expectations(&self) -> &ExpectationSet {
        &self.expectations
    }

    /// Appends a prepared descriptor.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: ErrorDescriptor) -> Self {
        self.expectations.push(descriptor);
        self
    }

    /// Expects an unlocated error with `code` and a non-empty message.
    #[must_use]
    pub fn with_error(self, code: impl ErrorCode) -> Self {
        self.with_descriptor(ErrorDescriptor::new(code))
    }

    /// Expects an error with `code` at `location` and a non-empty message.
    #[must_use]
    pub fn with_located_error(
        self,
        code: impl ErrorCode,
        location_type: impl ErrorLocationType,
        location: impl Into<String>,
    ) -> Self {
        self.with_descriptor(ErrorDescriptor::new(code).at(location_type, location))
    }

    /// Expects an error with `code` at `location` whose message equals `message`.
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

    /// Expects an error with `code` at `location` whose whole message matches
    /// `pattern`.
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

    /// Evaluates `response` (`None` standing for a missing response).
    ///
    /// Every call computes a fresh outcome; the matcher itself is never
    /// modified.
    pub fn evaluate<R: ErrorResponse + ?Sized>(&self, response: Option<&R>) -> ResponseOutcome {
        let outcome = match response {
            None => ResponseOutcome::Null,
            Some(response) => {
                let actual_status = response.http_status_code();
                ResponseOutcome::Evaluated(MatchResult {
                    expected_status: self.expected_status,
                    actual_status,
                    assignment: assign(&self.expectations, response.errors()),
                })
            }
        };
        trace_response_outcome(&outcome);
        outcome
    }

    /// Evaluates a type-erased candidate.
    ///
    /// [`ApiErrorResponse`] values are evaluated, `Option<ApiErrorResponse>`
    /// values are unwrapped with `None` reported as a missing response, and any
    /// other type yields [`ResponseOutcome::WrongType`].
    pub fn evaluate_any(&self, candidate: &dyn Any) -> ResponseOutcome {
        if let Some(response) = candidate.downcast_ref::<ApiErrorResponse>() {
            self.evaluate(Some(response))
        } else if let Some(response) = candidate.downcast_ref::<Option<ApiErrorResponse>>() {
            self.evaluate(response.as_ref())
        } else {
            let outcome = ResponseOutcome::WrongType;
            trace_response_outcome(&outcome);
            outcome
        }
    }
}

/// Builds a matcher accepting any HTTP status code.
#[must_use]
pub const fn is_api_error_response() -> ResponseMatcher {
    ResponseMatcher::new()
}

/// Builds a matcher requiring HTTP status `status`.
#[must_use]
pub const fn is_api_error_response_with_status(status: u16) -> ResponseMatcher {
    ResponseMatcher::for_status(status)
}

/// Result of evaluating one candidate with a [`ResponseMatcher`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResponseOutcome {
    /// The candidate was missing.
    Null,
    /// The candidate was not an error response.
    WrongType,
    /// The candidate was an error response and was compared.
    Evaluated(MatchResult),
}

impl ResponseOutcome {
    /// Returns `true` if the candidate satisfied the matcher.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Evaluated(result) if result.is_match())
    }

    /// Returns the comparison details when the candidate was a response.
    #[must_use]
    pub const fn result(&self) -> Option<&MatchResult> {
        match self {
            Self::Evaluated(result) => Some(result),
            Self::Null | Self::WrongType => None,
        }
    }
}

/// Comparison of one error response against a [`ResponseMatcher`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchResult {
    expected_status: Option<u16>,
    actual_status: u16,
    assignment: Assignment,
}

impl MatchResult {
    /// Returns `true` when no status was required or the status matched.
    #[must_use]
    pub fn status_ok(&self) -> bool {
        self.expected_status
            .is_none_or(|expected| expected == self.actual_status)
    }

    /// Returns the expected HTTP status code, if one was required.
    #[must_use]
    pub const fn expected_status(&self) -> Option<u16> {
        self.expected_status
    }

    /// Returns the HTTP status code of the response.
    #[must_use]
    pub const fn actual_status(&self) -> u16 {
        self.actual_status
    }

    /// Returns the descriptors no error satisfied.
    #[must_use]
    pub fn unmatched_expectations(&self) -> &[ErrorDescriptor] {
        self.assignment.unmet_expectations()
    }

    /// Returns the errors no descriptor consumed.
    #[must_use]
    pub fn leftover_actuals(&self) -> &[ErrorRecord] {
        self.assignment.leftover_actuals()
    }

    /// Returns the underlying descriptor/error assignment.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns `true` if the status matched and the errors correspond exactly.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.status_ok() && self.assignment.is_exact()
    }
}

impl<R: ErrorResponse> Matcher<R> for ResponseMatcher {
    fn matches(&self, actual: &R) -> bool {
        self.evaluate(Some(actual)).is_match()
    }

    fn describe_to(&self, description: &mut Description) {
        render::describe_response_expectation(self, description);
    }

    fn describe_mismatch(&self, actual: &R, description: &mut Description) {
        render::describe_response_outcome(&self.evaluate(Some(actual)), description);
    }
}

impl Matcher<dyn Any> for ResponseMatcher {
    fn matches(&self, actual: &dyn Any) -> bool {
        self.evaluate_any(actual).is_match()
    }

    fn describe_to(&self, description: &mut Description) {
        render::describe_response_expectation(self, description);
    }

    fn describe_mismatch(&self, actual: &dyn Any, description: &mut Description) {
        render::describe_response_outcome(&self.evaluate_any(actual), description);
    }
}
