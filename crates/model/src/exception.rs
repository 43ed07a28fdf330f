use std::fmt;

use crate::{ApiErrorResponse, ErrorResponse};

/// Exception raised by an API layer that may carry an error response.
pub trait ErrorsException {
    /// Response type carried by the exception.
    type Response: ErrorResponse;

    /// Returns the carried error response, if any.
    fn error_response(&self) -> Option<&Self::Response>;
}

/// Owned [`ErrorsException`] carrying an optional [`ApiErrorResponse`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApiErrorsException {
    response: Option<ApiErrorResponse>,
}

impl ApiErrorsException {
    /// Creates an exception carrying `response`.
    #[must_use]
    pub const fn new(response: ApiErrorResponse) -> Self {
        Self {
            response: Some(response),
        }
    }

    /// Creates an exception without an error response.
    #[must_use]
    pub const fn without_response() -> Self {
        Self { response: None }
    }

    /// Consumes the exception and returns the carried response.
    #[must_use]
    pub fn into_response(self) -> Option<ApiErrorResponse> {
        self.response
    }
}

impl From<ApiErrorResponse> for ApiErrorsException {
    fn from(response: ApiErrorResponse) -> Self {
        Self::new(response)
    }
}

impl ErrorsException for ApiErrorsException {
    type Response = ApiErrorResponse;

    fn error_response(&self) -> Option<&ApiErrorResponse> {
        self.response.as_ref()
    }
}

impl fmt::Display for ApiErrorsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.response {
            Some(response) => write!(
                f,
                "API errors exception with HTTP status code {} and {} errors",
                response.http_status_code(),
                response.errors().len()
            ),
            None => f.write_str("API errors exception without error response"),
        }
    }
}

impl std::error::Error for ApiErrorsException {}
