use std::fmt;

use model::{ApiErrorLike, ErrorCode, ErrorLocationType};

use crate::{FullPattern, MessageRule};

/// Structured input for [`ErrorDescriptor::from_options`].
///
/// `location_type` and `location` left as `None` require the matching error to
/// have no location type or location.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DescriptorOptions {
    /// Exact error code.
    pub code: i32,
    /// Exact location type, or `None` to require its absence.
    pub location_type: Option<String>,
    /// Exact location, or `None` to require its absence.
    pub location: Option<String>,
    /// Constraint on the message.
    pub message: MessageRule,
}

impl DescriptorOptions {
    /// Options for `code` with absent location fields and a non-empty message.
    #[must_use]
    pub fn new(code: impl ErrorCode) -> Self {
        Self {
            code: code.code(),
            location_type: None,
            location: None,
            message: MessageRule::NonEmpty,
        }
    }
}

/// One expected error.
///
/// # Examples
///
/// ```
/// use matching::{ErrorDescriptor, ErrorRecord};
///
/// let descriptor = ErrorDescriptor::new(1000).at("json", "/name");
///
/// assert!(descriptor.is_satisfied_by(&ErrorRecord::new(1000).at("json", "/name").with_message("required")));
/// // The location type is constrained to be present.
/// assert!(!descriptor.is_satisfied_by(&ErrorRecord::new(1000).with_message("required")));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorDescriptor {
    code: i32,
    location_type: Option<String>,
    location: Option<String>,
    message: MessageRule,
}

impl ErrorDescriptor {
    /// Builds a descriptor from explicit options.
    #[must_use]
    pub fn from_options(options: DescriptorOptions) -> Self {
        let DescriptorOptions {
            code,
            location_type,
            location,
            message,
        } = options;

        Self {
            code,
            location_type,
            location,
            message,
        }
    }

    /// Expects an error with `code`, no location and a non-empty message.
    #[must_use]
    pub fn new(code: impl ErrorCode) -> Self {
        Self::from_options(DescriptorOptions::new(code))
    }

    /// Expects the error at `location` of kind `location_type`.
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

    /// Expects the message to equal `message`.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = MessageRule::Exact(message.into());
        self
    }

    /// Expects the message to be matched in full by `pattern`.
    #[must_use]
    pub fn with_message_pattern(mut self, pattern: FullPattern) -> Self {
        self.message = MessageRule::Pattern(pattern);
        self
    }

    /// Returns the expected code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the expected location type.
    #[must_use]
    pub fn location_type(&self) -> Option<&str> {
        self.location_type.as_deref()
    }

    /// Returns the expected location.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the message rule.
    #[must_use]
    pub const fn message_rule(&self) -> &MessageRule {
        &self.message
    }

    /// Returns `true` if `error` meets every constraint of the descriptor.
    #[must_use]
    pub fn is_satisfied_by<E: ApiErrorLike + ?Sized>(&self, error: &E) -> bool {
        self.code == error.numeric_code()
            && self.location_type.as_deref() == error.location_type()
            && self.location.as_deref() == error.location()
            && self.message.accepts(error.message())
    }
}

impl From<DescriptorOptions> for ErrorDescriptor {
    fn from(options: DescriptorOptions) -> Self {
        Self::from_options(options)
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={}", self.code)?;

        match &self.location_type {
            Some(location_type) => write!(f, ", locationType={location_type}")?,
            None => f.write_str(", no locationType")?,
        }

        match &self.location {
            Some(location) => write!(f, ", location={location}")?,
            None => f.write_str(", no location")?,
        }

        write!(f, ", {}", self.message)
    }
}
