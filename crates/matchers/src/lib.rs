#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `matchers` turns the assignment engine from the `matching` crate into test
//! assertions over API error responses and the exceptions carrying them. A
//! [`ResponseMatcher`] checks an optional HTTP status code and requires the
//! response's errors to correspond exactly with the declared expectations; an
//! [`ExceptionMatcher`] unwraps an exception and delegates to one.
//!
//! # Design
//!
//! - [`Matcher`] is the assertion contract: a predicate plus two description
//!   callbacks writing into a [`Description`]. [`assert_that`] and the
//!   [`assert_that!`] macro panic with both descriptions on failure.
//! - Evaluation is pure. [`ResponseMatcher::evaluate`] and
//!   [`ExceptionMatcher::evaluate`] return immutable outcome values and the
//!   description callbacks re-evaluate before rendering through [`render`], so
//!   a matcher can be shared and reused without interference.
//! - Type-erased candidates (`&dyn Any`) are supported so a value of the wrong
//!   type fails with a description instead of a panic.
//!
//! # Examples
//!
//! ```
//! use matchers::{assert_that, is_api_errors_exception};
//! use model::{ApiError, ApiErrorResponse, ApiErrorsException};
//!
//! let exception = ApiErrorsException::new(
//!     ApiErrorResponse::new(422)
//!         .with_error(ApiError::new(1000).at("json", "/name").with_message("required"))
//!         .with_error(ApiError::new(1001).with_message("rate limited")),
//! );
//!
//! assert_that!(
//!     exception,
//!     is_api_errors_exception(422)
//!         .with_error(1001)
//!         .with_located_error(1000, "json", "/name")
//! );
//! ```

mod description;
mod exception;
mod matcher;
pub mod render;
mod response;
mod trace;
mod values;

pub use description::Description;
pub use exception::{ExceptionMatcher, ExceptionOutcome, is_api_errors_exception};
pub use matcher::{Matcher, assert_that, assert_that_with_reason, mismatch_message};
pub use response::{
    MatchResult, ResponseMatcher, ResponseOutcome, is_api_error_response,
    is_api_error_response_with_status,
};
pub use values::{
    ErrorCodeMatcher, LocationTypeMatcher, is_error_code, is_error_location_type,
    is_json_error_location_type,
};
