//! Expectation and mismatch descriptions for the response and exception
//! matchers.
//!
//! Rendering is a pure function of a matcher's configuration or of an outcome
//! value. Status, unmet and leftover causes are all reported together so a
//! single failed assertion shows every discrepancy.

use crate::{
    Description, ExceptionMatcher, ExceptionOutcome, MatchResult, ResponseMatcher, ResponseOutcome,
};

/// Describes what a [`ResponseMatcher`] expects.
///
/// `JSON API error response with HTTP status code 422 with 1 errors: <...>`
pub fn describe_response_expectation(matcher: &ResponseMatcher, description: &mut Description) {
    description.append_text("JSON API error response");

    if let Some(status) = matcher.expected_status() {
        description.append_text(&format!(" with HTTP status code {status}"));
    }

    let expectations = matcher.expectations();
    if !expectations.is_empty() {
        description.append_value_list(
            &format!(" with {} errors: ", expectations.len()),
            ", ",
            "",
            expectations,
        );
    }
}

/// Describes why a response outcome failed.
pub fn describe_response_outcome(outcome: &ResponseOutcome, description: &mut Description) {
    match outcome {
        ResponseOutcome::Null => {
            description.append_text("response is null");
        }
        ResponseOutcome::WrongType => {
            description.append_text("value is not an API error response");
        }
        ResponseOutcome::Evaluated(result) => describe_result(result, description),
    }
}

fn describe_result(result: &MatchResult, description: &mut Description) {
    if result.is_match() {
        description.append_text("response matches");
        return;
    }

    description.append_text("response doesn't match");

    if !result.status_ok() {
        description.append_text(&format!(", has HTTP status code {}", result.actual_status()));
        if let Some(expected) = result.expected_status() {
            description.append_text(&format!(" (expected {expected})"));
        }
    }

    let unmet = result.unmatched_expectations();
    if !unmet.is_empty() {
        description.append_value_list(
            &format!(", is missing {} expected errors (", unmet.len()),
            ", ",
            ")",
            unmet,
        );
    }

    let leftover = result.leftover_actuals();
    if !leftover.is_empty() {
        description.append_value_list(
            &format!(", has {} additional unexpected errors (", leftover.len()),
            ", ",
            ")",
            leftover,
        );
    }
}

/// Describes what an [`ExceptionMatcher`] expects.
pub fn describe_exception_expectation(matcher: &ExceptionMatcher, description: &mut Description) {
    description.append_text("API errors exception with ");
    describe_response_expectation(matcher.response_matcher(), description);
}

/// Describes why an exception outcome failed.
pub fn describe_exception_outcome(outcome: &ExceptionOutcome, description: &mut Description) {
    match outcome {
        ExceptionOutcome::Null => {
            description.append_text("exception is null");
        }
        ExceptionOutcome::WrongType => {
            description.append_text("value is not an API errors exception");
        }
        ExceptionOutcome::MissingResponse => {
            description.append_text("exception has no error response");
        }
        ExceptionOutcome::Response(response) => describe_response_outcome(response, description),
    }
}
