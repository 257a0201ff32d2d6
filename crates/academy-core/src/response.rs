//! The JSON envelope returned by every handler.
//!
//! ```text
//! { "message": "...", "success": true, "error": false, "data": ... }
//! ```
//!
//! Failed requests use the same shape with `success: false`, `error: true`
//! and an empty array as `data`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub success: bool,
    pub error: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Envelope for a request that did what it was asked.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            error: false,
            data,
        }
    }

    /// Envelope for a request that was understood but not carried out,
    /// such as a duplicate enrollment. Sent with a 200 status.
    pub fn rejected(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: false,
            error: true,
            data,
        }
    }
}

impl ApiResponse<Vec<Value>> {
    /// Envelope carried by error responses.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::rejected(message, Vec::new())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
