use std::fmt;

/// HTTP status code reported by [`SimpleErrorCode`] when none is configured.
pub const DEFAULT_HTTP_STATUS_CODE: u16 = 422;

/// Numeric identity of an API error.
///
/// Only [`code`](Self::code) takes part in matching. The default HTTP status is
/// informational metadata carried by typed code catalogues.
pub trait ErrorCode {
    /// Returns the numeric error code.
    fn code(&self) -> i32;

    /// Returns the HTTP status an error with this code is reported under.
    fn default_http_status_code(&self) -> u16 {
        DEFAULT_HTTP_STATUS_CODE
    }
}

impl ErrorCode for i32 {
    fn code(&self) -> i32 {
        *self
    }
}

impl<T: ErrorCode + ?Sized> ErrorCode for &T {
    fn code(&self) -> i32 {
        (**self).code()
    }

    fn default_http_status_code(&self) -> u16 {
        (**self).default_http_status_code()
    }
}

/// Minimal [`ErrorCode`] implementation used by tests and fixtures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SimpleErrorCode {
    code: i32,
    http_status_code: u16,
}

impl SimpleErrorCode {
    /// Creates a code reported under [`DEFAULT_HTTP_STATUS_CODE`].
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self {
            code,
            http_status_code: DEFAULT_HTTP_STATUS_CODE,
        }
    }

    /// Overrides the HTTP status code.
    #[must_use]
    pub const fn with_http_status_code(mut self, status: u16) -> Self {
        self.http_status_code = status;
        self
    }
}

impl ErrorCode for SimpleErrorCode {
    fn code(&self) -> i32 {
        self.code
    }

    fn default_http_status_code(&self) -> u16 {
        self.http_status_code
    }
}

impl fmt::Display for SimpleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Builds an [`ErrorCode`] for `code` with a default HTTP status of 422.
#[must_use]
pub const fn error_code(code: i32) -> SimpleErrorCode {
    SimpleErrorCode::new(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_code_reports_unprocessable_entity_by_default() {
        let code = error_code(1234);
        assert_eq!(code.code(), 1234);
        assert_eq!(code.default_http_status_code(), 422);
    }

    #[test]
    fn raw_integers_are_error_codes() {
        assert_eq!(ErrorCode::code(&500_i32), 500);
        assert_eq!(500_i32.default_http_status_code(), DEFAULT_HTTP_STATUS_CODE);
    }

    #[test]
    fn references_forward_to_the_code() {
        let code = error_code(7).with_http_status_code(400);
        let by_ref: &dyn ErrorCode = &code;
        assert_eq!(by_ref.code(), 7);
        assert_eq!((&code).default_http_status_code(), 400);
    }

    #[test]
    fn display_prints_numeric_code() {
        assert_eq!(error_code(42).to_string(), "42");
    }
}
