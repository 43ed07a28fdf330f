use std::fmt;

use model::{ApiErrorLike, ErrorCode, ErrorLocationType};

/// Owned snapshot of one actual error.
///
/// Records are taken from the candidate at evaluation time so an
/// [`Assignment`](crate::Assignment) can outlive the response it was computed
/// from.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ErrorRecord {
    code: i32,
    location_type: Option<String>,
    location: Option<String>,
    message: Option<String>,
}

impl ErrorRecord {
    /// Creates a record with `code` and no location or message.
    #[must_use]
    pub fn new(code: impl ErrorCode) -> Self {
        Self {
            code: code.code(),
            location_type: None,
            location: None,
            message: None,
        }
    }

    /// Snapshots the fields of `error`.
    #[must_use]
    pub fn from_error<E: ApiErrorLike + ?Sized>(error: &E) -> Self {
        Self {
            code: error.numeric_code(),
            location_type: error.location_type().map(str::to_owned),
            location: error.location().map(str::to_owned),
            message: error.message().map(str::to_owned),
        }
    }

    /// Sets the location type and location.
    #[must_use]
    pub fn at(
        mut self,
        location_type: impl ErrorLocationType,
        location: impl Into<String>,
    ) -> Self {
        self.location_type = Some(location_type.location_type().to_owned());
        self.location = Some(location.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }
}

impl ApiErrorLike for ErrorRecord {
    fn numeric_code(&self) -> i32 {
        self.code
    }

    fn location_type(&self) -> Option<&str> {
        self.location_type.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={}", self.code)?;

        if let Some(location_type) = &self.location_type {
            write!(f, ", locationType={location_type}")?;
        }

        if let Some(location) = &self.location {
            write!(f, ", location={location}")?;
        }

        match &self.message {
            Some(message) => write!(f, ", message={message}"),
            None => f.write_str(", no message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ApiError;

    #[test]
    fn snapshot_copies_every_field() {
        let error = ApiError::new(1000).at("json", "/name").with_message("required");
        let record = ErrorRecord::from_error(&error);

        assert_eq!(record.code(), 1000);
        assert_eq!(record.location_type(), Some("json"));
        assert_eq!(record.location(), Some("/name"));
        assert_eq!(record.message(), Some("required"));
    }

    #[test]
    fn display_lists_present_fields_only() {
        let full = ErrorRecord::new(1000).at("json", "/name").with_message("required");
        assert_eq!(
            full.to_string(),
            "code=1000, locationType=json, location=/name, message=required"
        );

        assert_eq!(ErrorRecord::new(5).to_string(), "code=5, no message");
    }
}
