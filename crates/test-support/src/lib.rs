#![deny(unsafe_code)]

//! Fixtures shared by the workspace test suites.
//!
//! The builders produce [`model`] values shaped like the errors a JSON API
//! returns, so suites can state the actual side of an assertion in one line.
//! [`init_tracing`] installs a `tracing` subscriber honouring `RUST_LOG`.

use std::sync::Once;

use model::{ApiError, ApiErrorResponse, ApiErrorsException, JSON_LOCATION_TYPE};
use tracing_subscriber::EnvFilter;

/// Unprocessable entity, the status validation failures are reported under.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Builds an error located in the JSON request body.
#[must_use]
pub fn json_error(code: i32, location: &str, message: &str) -> ApiError {
    ApiError::new(code)
        .at(JSON_LOCATION_TYPE, location)
        .with_message(message)
}

/// Builds an error without a location.
#[must_use]
pub fn global_error(code: i32, message: &str) -> ApiError {
    ApiError::new(code).with_message(message)
}

/// Builds a response with `status` holding `errors` in order.
#[must_use]
pub fn response<I>(status: u16, errors: I) -> ApiErrorResponse
where
    I: IntoIterator<Item = ApiError>,
{
    ApiErrorResponse::new(status).with_errors(errors)
}

/// Builds a 422 response holding `errors` in order.
#[must_use]
pub fn validation_response<I>(errors: I) -> ApiErrorResponse
where
    I: IntoIterator<Item = ApiError>,
{
    response(UNPROCESSABLE_ENTITY, errors)
}

/// Builds an exception carrying a 422 response with `errors`.
#[must_use]
pub fn validation_exception<I>(errors: I) -> ApiErrorsException
where
    I: IntoIterator<Item = ApiError>,
{
    ApiErrorsException::new(validation_response(errors))
}

/// Installs a test-writer `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("errassert=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
