//! Shared helpers for request handlers.
//!
//! - [`ids`]: Record id parsing for path parameters

pub mod ids;

pub use ids::parse_record_id;
