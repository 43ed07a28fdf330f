use model::{ErrorCode, ErrorLocationType, JSON_LOCATION_TYPE};

use crate::{Description, Matcher};

/// Matches any [`ErrorCode`] with a given numeric code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ErrorCodeMatcher {
    code: i32,
}

impl<C: ErrorCode + ?Sized> Matcher<C> for ErrorCodeMatcher {
    fn matches(&self, actual: &C) -> bool {
        actual.code() == self.code
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("Error code {}", self.code));
    }

    fn describe_mismatch(&self, actual: &C, description: &mut Description) {
        description.append_text(&format!("was error code {}", actual.code()));
    }
}

/// Builds a matcher for error codes equal to `code`.
#[must_use]
pub fn is_error_code(code: impl ErrorCode) -> ErrorCodeMatcher {
    ErrorCodeMatcher { code: code.code() }
}

/// Matches any [`ErrorLocationType`] with a given tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationTypeMatcher {
    location_type: String,
}

impl<L: ErrorLocationType + ?Sized> Matcher<L> for LocationTypeMatcher {
    fn matches(&self, actual: &L) -> bool {
        actual.location_type() == self.location_type
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("Error locationType {}", self.location_type));
    }

    fn describe_mismatch(&self, actual: &L, description: &mut Description) {
        description.append_text(&format!("was locationType {}", actual.location_type()));
    }
}

/// Builds a matcher for location types tagged `location_type`.
#[must_use]
pub fn is_error_location_type(location_type: impl Into<String>) -> LocationTypeMatcher {
    LocationTypeMatcher {
        location_type: location_type.into(),
    }
}

/// Builds a matcher for the `json` location type.
#[must_use]
pub fn is_json_error_location_type() -> LocationTypeMatcher {
    is_error_location_type(JSON_LOCATION_TYPE)
}
