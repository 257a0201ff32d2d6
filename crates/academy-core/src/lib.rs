//! # Academy Core
//!
//! Core types shared by every Academy API crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`response`]: The JSON envelope every handler answers with
//!
//! # Example
//!
//! ```ignore
//! use academy_core::{ApiResponse, AppError};
//!
//! // A successful envelope
//! let body = ApiResponse::success("All users", users);
//!
//! // A rejection that short-circuits a handler
//! let error = AppError::forbidden("forbidden access");
//! ```

pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use response::ApiResponse;
