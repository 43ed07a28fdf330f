//! End-to-end scenarios for the response matcher.
//!
//! Key behaviors verified:
//! - Exact correspondence between expected and actual errors is required
//! - Extras and deficiencies are both rejected
//! - The HTTP status is only checked when one was configured
//! - Absence of location fields is a constraint

use matchers::{Matcher, ResponseOutcome, is_api_error_response, is_api_error_response_with_status};
use matching::FullPattern;
use model::{ApiError, ApiErrorLike, ApiErrorResponse};
use test_support::{global_error, json_error, response, validation_response};

// =============================================================================
// Exact Correspondence
// =============================================================================

#[test]
fn identical_error_matches() {
    let matcher = is_api_error_response_with_status(422)
        .with_error_message(422, "json", "/name", "required");
    let actual = validation_response([json_error(422, "/name", "required")]);

    assert!(matcher.matches(&actual));
}

#[test]
fn wrong_message_leaves_one_unmet_and_one_leftover() {
    let matcher = is_api_error_response_with_status(422)
        .with_error_message(422, "json", "/name", "required");
    let actual = validation_response([json_error(422, "/name", "missing")]);

    let outcome = matcher.evaluate(Some(&actual));
    let result = outcome.result().expect("response evaluated");
    assert!(!outcome.is_match());
    assert!(result.status_ok());
    assert_eq!(result.unmatched_expectations().len(), 1);
    assert_eq!(result.leftover_actuals().len(), 1);
    assert_eq!(result.leftover_actuals()[0].message(), Some("missing"));
}

#[test]
fn extra_actual_error_is_rejected() {
    let matcher = is_api_error_response()
        .with_error_message(1, "json", "/a", "a")
        .with_error_message(2, "json", "/b", "b");
    let actual = validation_response([
        json_error(1, "/a", "a"),
        json_error(2, "/b", "b"),
        json_error(3, "/c", "c"),
    ]);

    let outcome = matcher.evaluate(Some(&actual));
    let result = outcome.result().expect("response evaluated");
    assert!(result.unmatched_expectations().is_empty());
    assert_eq!(result.leftover_actuals().len(), 1);
    assert_eq!(result.leftover_actuals()[0].code(), 3);
}

#[test]
fn missing_actual_error_is_rejected() {
    let matcher = is_api_error_response()
        .with_error_message(1, "json", "/a", "a")
        .with_error_message(2, "json", "/b", "b");
    let actual = validation_response([json_error(2, "/b", "b")]);

    let outcome = matcher.evaluate(Some(&actual));
    let result = outcome.result().expect("response evaluated");
    assert_eq!(result.unmatched_expectations().len(), 1);
    assert_eq!(result.unmatched_expectations()[0].code(), 1);
    assert!(result.leftover_actuals().is_empty());
}

#[test]
fn no_expectations_require_no_errors() {
    let matcher = is_api_error_response_with_status(404);
    assert!(matcher.matches(&ApiErrorResponse::new(404)));
    assert!(!matcher.matches(&response(404, [global_error(1, "gone")])));
}

#[test]
fn order_of_actual_errors_does_not_matter() {
    let matcher = is_api_error_response()
        .with_error_message(1, "json", "/a", "a")
        .with_error_message(2, "json", "/b", "b")
        .with_error(3);

    let forward = validation_response([
        json_error(1, "/a", "a"),
        json_error(2, "/b", "b"),
        global_error(3, "c"),
    ]);
    let backward = validation_response([
        global_error(3, "c"),
        json_error(2, "/b", "b"),
        json_error(1, "/a", "a"),
    ]);

    assert!(matcher.matches(&forward));
    assert!(matcher.matches(&backward));
}

// =============================================================================
// Status Codes
// =============================================================================

#[test]
fn unconfigured_status_accepts_anything() {
    let matcher = is_api_error_response().with_error(1);
    for status in [200, 400, 422, 500, 503] {
        assert!(matcher.matches(&response(status, [global_error(1, "m")])));
    }
}

#[test]
fn configured_status_must_be_equal() {
    let matcher = is_api_error_response_with_status(422).with_error(1);
    assert!(!matcher.matches(&response(400, [global_error(1, "m")])));
}

// =============================================================================
// Field Constraints Through The Matcher
// =============================================================================

#[test]
fn code_only_expectation_rejects_located_error() {
    let matcher = is_api_error_response().with_error(1);
    assert!(!matcher.matches(&validation_response([json_error(1, "/a", "m")])));
}

#[test]
fn located_expectation_accepts_any_non_empty_message() {
    let matcher = is_api_error_response().with_located_error(1, "json", "/a");
    assert!(matcher.matches(&validation_response([json_error(1, "/a", "whatever")])));
    assert!(!matcher.matches(&validation_response([json_error(1, "/a", "")])));
    assert!(!matcher.matches(&validation_response([ApiError::new(1).at("json", "/a")])));
}

#[test]
fn pattern_expectation_is_full_match() {
    let matcher = is_api_error_response().with_error_pattern(
        1,
        "json",
        "/age",
        FullPattern::new("must be at least [0-9]+").expect("pattern"),
    );
    assert!(matcher.matches(&validation_response([json_error(1, "/age", "must be at least 18")])));
    assert!(!matcher.matches(&validation_response([json_error(
        1,
        "/age",
        "value must be at least 18"
    )])));
}

// =============================================================================
// Type-Erased Candidates
// =============================================================================

#[test]
fn wrong_type_is_a_clean_mismatch() {
    let matcher = is_api_error_response();
    let candidate: &dyn std::any::Any = &42_u32;

    assert!(!Matcher::<dyn std::any::Any>::matches(&matcher, candidate));
    assert_eq!(matcher.evaluate_any(candidate), ResponseOutcome::WrongType);
}
