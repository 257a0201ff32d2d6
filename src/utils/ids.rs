use academy_core::AppError;
use anyhow::anyhow;
use uuid::Uuid;

/// Parses a record id taken from a request path.
///
/// A malformed id can never match a record, but it is reported as a bad
/// request rather than folded into the "nothing deleted" answer.
pub fn parse_record_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request(anyhow!("Invalid id: {raw}")))
}
