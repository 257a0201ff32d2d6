use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failure of a single repository operation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What an insert against a uniquely keyed collection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(Uuid),
    /// A record with the same unique key already exists.
    Duplicate,
}

/// Insert acknowledgement returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Option<Uuid>,
}

impl InsertResult {
    pub fn inserted(id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id),
        }
    }

    pub fn not_inserted() -> Self {
        Self {
            acknowledged: false,
            inserted_id: None,
        }
    }
}

/// Delete acknowledgement returned to clients. A `deleted_count` of zero is
/// still a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
