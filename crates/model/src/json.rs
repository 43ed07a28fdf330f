//! JSON API error bodies.
//!
//! An error body is an object with a single `errors` array. The HTTP status
//! code travels out of band on the HTTP response, so it is supplied separately
//! when decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ApiError, ApiErrorResponse};

/// Errors produced while converting error responses to or from JSON.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The body is not a valid JSON API error body.
    #[error("invalid JSON API error body: {source}")]
    InvalidBody {
        /// Underlying decoder error.
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Serialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiError>,
}

impl ApiErrorResponse {
    /// Decodes a JSON API error body received with `http_status_code`.
    ///
    /// # Examples
    ///
    /// ```
    /// use model::{ApiErrorResponse, ErrorResponse};
    ///
    /// let body = r#"{"errors":[{"code":1000,"locationType":"json","location":"/name","message":"required"}]}"#;
    /// let response = ApiErrorResponse::from_json_body(422, body).unwrap();
    /// assert_eq!(response.errors().len(), 1);
    /// ```
    pub fn from_json_body(http_status_code: u16, body: &str) -> Result<Self, ModelError> {
        let body: ErrorBody = serde_json::from_str(body)?;
        Ok(Self {
            http_status_code,
            errors: body.errors,
        })
    }

    /// Encodes the errors as a JSON API error body.
    pub fn to_json_body(&self) -> Result<String, ModelError> {
        let body = ErrorBody {
            errors: self.errors.clone(),
        };
        Ok(serde_json::to_string(&body)?)
    }
}
