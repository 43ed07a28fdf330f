//! Decoding and encoding of JSON API error bodies.

use model::{ApiError, ApiErrorLike, ApiErrorResponse, ErrorResponse, ModelError};

#[test]
fn decodes_all_fields_in_order() {
    let body = r#"{
        "errors": [
            {"code": 1000, "locationType": "json", "location": "/name", "message": "required"},
            {"code": 1001, "message": "too many requests"}
        ]
    }"#;
    let response = ApiErrorResponse::from_json_body(422, body).expect("valid body");

    assert_eq!(response.http_status_code(), 422);
    let errors = response.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].numeric_code(), 1000);
    assert_eq!(errors[0].location_type(), Some("json"));
    assert_eq!(errors[0].location(), Some("/name"));
    assert_eq!(errors[0].message(), Some("required"));
    assert_eq!(errors[1].location_type(), None);
    assert_eq!(errors[1].location(), None);
}

#[test]
fn missing_errors_array_decodes_as_empty() {
    let response = ApiErrorResponse::from_json_body(500, "{}").expect("valid body");
    assert!(response.errors().is_empty());
}

#[test]
fn explicit_null_fields_decode_as_absent() {
    let body = r#"{"errors":[{"code":5,"locationType":null,"location":null,"message":null}]}"#;
    let response = ApiErrorResponse::from_json_body(400, body).expect("valid body");
    let error = &response.errors()[0];
    assert_eq!(error.location_type(), None);
    assert_eq!(error.message(), None);
}

#[test]
fn malformed_body_reports_model_error() {
    let err = ApiErrorResponse::from_json_body(422, "{\"errors\": [").unwrap_err();
    assert!(matches!(err, ModelError::InvalidBody { .. }));
    assert!(err.to_string().starts_with("invalid JSON API error body"));
}

#[test]
fn encoding_omits_absent_fields() {
    let response = ApiErrorResponse::new(422).with_error(ApiError::new(7).with_message("bad"));
    let body = response.to_json_body().expect("encodes");
    let value: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(value, serde_json::json!({"errors": [{"code": 7, "message": "bad"}]}));
}
