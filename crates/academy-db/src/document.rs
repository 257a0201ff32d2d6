//! Conversion between typed records and stored JSONB documents.
//!
//! The stored document never contains `_id`; the id lives in its own column
//! and is spliced back in when a row is read.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::RepositoryError;

pub const ID_KEY: &str = "_id";

/// A raw row from a document table.
#[derive(Debug, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub doc: Json<Value>,
}

impl DocumentRow {
    pub fn hydrate<T: DeserializeOwned>(self) -> Result<T, RepositoryError> {
        hydrate(self.id, self.doc.0)
    }
}

/// Serializes a record into the document that gets stored.
pub fn to_document<T: Serialize>(record: &T) -> Result<Value, RepositoryError> {
    let mut doc = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut doc {
        map.remove(ID_KEY);
    }
    Ok(doc)
}

/// Rebuilds a record from its id and stored document.
pub fn hydrate<T: DeserializeOwned>(id: Uuid, doc: Value) -> Result<T, RepositoryError> {
    let mut map = match doc {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    map.insert(ID_KEY.to_string(), Value::String(id.to_string()));
    Ok(serde_json::from_value(Value::Object(map))?)
}
