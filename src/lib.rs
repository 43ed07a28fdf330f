#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `errassert` asserts that an API answered with exactly the errors a test
//! expects. Expectations are declared as error descriptors (code, location
//! type, location and a message rule), and a response or an exception carrying
//! one is accepted only when its errors correspond one-to-one with them.
//!
//! # Design
//!
//! The crate is a facade over the workspace:
//!
//! - [`model`] holds the error, response and exception shapes and the traits
//!   service-specific types implement.
//! - [`matching`] holds descriptors, full-match message patterns and the greedy
//!   assignment engine.
//! - [`matchers`] wraps the engine in [`Matcher`] implementations and the
//!   [`assert_that!`] macro.
//!
//! Most tests only need `use errassert::prelude::*;`.
//!
//! # Invariants
//!
//! - A descriptor without a location type or location only accepts errors
//!   without one; absence is a constraint, never a wildcard.
//! - Message patterns must match the whole message.
//! - Every unmet descriptor and every unconsumed error is reported.
//!
//! # Features
//!
//! - `tracing`: emits assignment decisions under the `errassert` targets.
//! - `serde`: JSON encoding and decoding of [`ApiErrorResponse`] bodies.
//!
//! # Examples
//!
//! ```
//! use errassert::prelude::*;
//!
//! let response = ApiErrorResponse::new(422)
//!     .with_error(ApiError::new(1000).at("json", "/name").with_message("required"));
//!
//! assert_that!(
//!     response,
//!     is_api_error_response_with_status(422).with_error_message(1000, "json", "/name", "required")
//! );
//! ```

pub use matchers::{
    Description, ExceptionMatcher, ExceptionOutcome, MatchResult, Matcher, ResponseMatcher,
    ResponseOutcome, assert_that, assert_that_with_reason, is_api_error_response,
    is_api_error_response_with_status, is_api_errors_exception, is_error_code,
    is_error_location_type, is_json_error_location_type, mismatch_message,
};
pub use matching::{
    Assignment, Binding, DescriptorOptions, ErrorDescriptor, ErrorRecord, ExpectationSet,
    FullPattern, MessageRule, PatternError, PatternFlags, assign,
};
#[cfg(feature = "serde")]
pub use model::ModelError;
pub use model::{
    ApiError, ApiErrorLike, ApiErrorResponse, ApiErrorsException, DEFAULT_HTTP_STATUS_CODE,
    ErrorCode, ErrorLocationType, ErrorResponse, ErrorsException, JSON_LOCATION_TYPE,
    SimpleErrorCode, SimpleLocationType, error_code, error_location_type,
};

/// Items needed by most assertions.
pub mod prelude {
    pub use matchers::assert_that;
    pub use matchers::{
        Matcher, is_api_error_response, is_api_error_response_with_status,
        is_api_errors_exception, is_error_code, is_error_location_type,
        is_json_error_location_type,
    };
    pub use matching::{ErrorDescriptor, FullPattern, PatternFlags};
    pub use model::{
        ApiError, ApiErrorResponse, ApiErrorsException, ErrorCode, ErrorLocationType,
        JSON_LOCATION_TYPE, error_code, error_location_type,
    };
}
