use std::fmt;

/// Location type tag used by JSON request bodies.
pub const JSON_LOCATION_TYPE: &str = "json";

/// Kind of location an API error points at (`json`, `header`, `query`, ...).
pub trait ErrorLocationType {
    /// Returns the location type tag.
    fn location_type(&self) -> &str;
}

impl<T: ErrorLocationType + ?Sized> ErrorLocationType for &T {
    fn location_type(&self) -> &str {
        (**self).location_type()
    }
}

impl ErrorLocationType for str {
    fn location_type(&self) -> &str {
        self
    }
}

impl ErrorLocationType for String {
    fn location_type(&self) -> &str {
        self
    }
}

/// Owned [`ErrorLocationType`] built by [`error_location_type`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SimpleLocationType(String);

impl ErrorLocationType for SimpleLocationType {
    fn location_type(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SimpleLocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds an [`ErrorLocationType`] for `tag`.
#[must_use]
pub fn error_location_type(tag: impl Into<String>) -> SimpleLocationType {
    SimpleLocationType(tag.into())
}
