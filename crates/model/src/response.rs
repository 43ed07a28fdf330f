use crate::{ApiError, ApiErrorLike};

/// Error response returned by an API: an HTTP status code and the ordered
/// list of errors explaining it.
pub trait ErrorResponse {
    /// Concrete error type held by the response.
    type Error: ApiErrorLike;

    /// Returns the HTTP status code of the response.
    fn http_status_code(&self) -> u16;

    /// Returns the reported errors in API order.
    fn errors(&self) -> &[Self::Error];
}

impl<T: ErrorResponse + ?Sized> ErrorResponse for &T {
    type Error = T::Error;

    fn http_status_code(&self) -> u16 {
        (**self).http_status_code()
    }

    fn errors(&self) -> &[Self::Error] {
        (**self).errors()
    }
}

/// Owned [`ErrorResponse`] holding [`ApiError`] values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiErrorResponse {
    pub(crate) http_status_code: u16,
    pub(crate) errors: Vec<ApiError>,
}

impl ApiErrorResponse {
    /// Creates an empty response with the given HTTP status code.
    #[must_use]
    pub const fn new(http_status_code: u16) -> Self {
        Self {
            http_status_code,
            errors: Vec::new(),
        }
    }

    /// Appends an error.
    #[must_use]
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends every error yielded by `errors`.
    #[must_use]
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = ApiError>,
    {
        self.errors.extend(errors);
        self
    }

    /// Appends an error in place.
    pub fn push(&mut self, error: ApiError) {
        self.errors.push(error);
    }

    /// Consumes the response and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ApiError> {
        self.errors
    }
}

impl ErrorResponse for ApiErrorResponse {
    type Error = ApiError;

    fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    fn errors(&self) -> &[ApiError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_keep_insertion_order() {
        let mut response = ApiErrorResponse::new(400)
            .with_error(ApiError::new(1))
            .with_errors([ApiError::new(2), ApiError::new(3)]);
        response.push(ApiError::new(4));

        let codes: Vec<i32> = response.errors().iter().map(ApiErrorLike::numeric_code).collect();
        assert_eq!(codes, [1, 2, 3, 4]);
        assert_eq!(response.http_status_code(), 400);
        assert_eq!(response.into_errors().len(), 4);
    }

    #[test]
    fn references_forward_to_the_response() {
        let response = ApiErrorResponse::new(409).with_error(ApiError::new(9));
        let by_ref = &response;
        assert_eq!(ErrorResponse::http_status_code(&by_ref), 409);
        assert_eq!(ErrorResponse::errors(&by_ref).len(), 1);
    }
}
