#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `model` defines the shapes the API error matchers consume: error codes,
//! location types, individual API errors, error responses carrying an HTTP
//! status code, and exceptions wrapping such a response. The matching crates
//! depend only on the traits exported here, so any service-specific error type
//! can be asserted on by implementing a handful of accessor methods.
//!
//! # Design
//!
//! - [`ErrorCode`] and [`ErrorLocationType`] are the typed identities an API
//!   uses for its errors. [`error_code`] and [`error_location_type`] build
//!   throwaway implementations for tests.
//! - [`ApiErrorLike`], [`ErrorResponse`] and [`ErrorsException`] describe the
//!   read-only views the matchers need.
//! - [`ApiError`], [`ApiErrorResponse`] and [`ApiErrorsException`] are owned
//!   implementations for callers without their own types.
//!
//! # Invariants
//!
//! - Absent location types, locations and messages are `None`, never an empty
//!   string sentinel.
//! - Error lists preserve the order in which the API reported them.
//!
//! # Examples
//!
//! ```
//! use model::{ApiError, ApiErrorResponse, ErrorResponse, error_code};
//!
//! let response = ApiErrorResponse::new(422)
//!     .with_error(ApiError::new(error_code(1000)).at("json", "/name").with_message("required"));
//!
//! assert_eq!(response.http_status_code(), 422);
//! assert_eq!(response.errors().len(), 1);
//! ```

mod code;
mod error;
mod exception;
#[cfg(feature = "serde")]
mod json;
mod location;
mod response;

pub use code::{DEFAULT_HTTP_STATUS_CODE, ErrorCode, SimpleErrorCode, error_code};
pub use error::{ApiError, ApiErrorLike};
pub use exception::{ApiErrorsException, ErrorsException};
#[cfg(feature = "serde")]
pub use json::ModelError;
pub use location::{ErrorLocationType, JSON_LOCATION_TYPE, SimpleLocationType, error_location_type};
pub use response::{ApiErrorResponse, ErrorResponse};
