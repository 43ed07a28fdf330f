use crate::{ErrorCode, ErrorLocationType};

/// Read-only view of a single error reported by an API.
pub trait ApiErrorLike {
    /// Returns the numeric error code.
    fn numeric_code(&self) -> i32;

    /// Returns the location type tag, if the error points at a location.
    fn location_type(&self) -> Option<&str>;

    /// Returns the location path, if any.
    fn location(&self) -> Option<&str>;

    /// Returns the error message, if any.
    fn message(&self) -> Option<&str>;
}

impl<T: ApiErrorLike + ?Sized> ApiErrorLike for &T {
    fn numeric_code(&self) -> i32 {
        (**self).numeric_code()
    }

    fn location_type(&self) -> Option<&str> {
        (**self).location_type()
    }

    fn location(&self) -> Option<&str> {
        (**self).location()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}

/// Owned API error.
///
/// # Examples
///
/// ```
/// use model::{ApiError, ApiErrorLike};
///
/// let error = ApiError::new(1000).at("json", "/email").with_message("invalid format");
/// assert_eq!(error.numeric_code(), 1000);
/// assert_eq!(error.location_type(), Some("json"));
/// assert_eq!(error.location(), Some("/email"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ApiError {
    code: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    location_type: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    location: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    message: Option<String>,
}

impl ApiError {
    /// Creates an error with `code` and no location or message.
    #[must_use]
    pub fn new(code: impl ErrorCode) -> Self {
        Self {
            code: code.code(),
            location_type: None,
            location: None,
            message: None,
        }
    }

    /// Points the error at `location` of kind `location_type`.
    #[must_use]
    pub fn at(self, location_type: impl ErrorLocationType, location: impl Into<String>) -> Self {
        self.with_location_type(location_type).with_location(location)
    }

    /// Sets the location type tag.
    #[must_use]
    pub fn with_location_type(mut self, location_type: impl ErrorLocationType) -> Self {
        self.location_type = Some(location_type.location_type().to_owned());
        self
    }

    /// Sets the location path.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiErrorLike for ApiError {
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
