use async_trait::async_trait;
use mongodb::bson::{self, Bson, DateTime as BsonDateTime, Document};
use serde::Serialize;
use service_core::error::AppError;

/// Message returned by writes while the store has no connection.
pub const STORE_UNAVAILABLE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.";

/// Access to the document store backing the API.
///
/// Implementations without a live connection run in degraded mode: reads
/// return empty results and writes fail.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `payload` into `collection` and returns the generated id.
    ///
    /// `created_at` and `updated_at` are stamped with the current time.
    async fn create_document(&self, collection: &str, payload: Document)
        -> Result<String, AppError>;

    /// Returns raw documents (including `_id`) matching an equality filter,
    /// in store order, bounded by `limit` when given.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<Document>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    /// Whether a connection handle is held. Says nothing about reachability.
    fn is_available(&self) -> bool;

    fn database_name(&self) -> Option<&str>;
}

/// Serializes a validated record into a BSON document ready for insertion.
pub fn to_payload<T: Serialize>(record: &T) -> Result<Document, AppError> {
    Ok(bson::to_document(record)?)
}

pub(crate) fn stamp_timestamps(doc: &mut Document) {
    let now = BsonDateTime::now();
    doc.insert("created_at", now);
    doc.insert("updated_at", now);
}

pub(crate) fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(id_to_string(&Bson::String("abc".into())), "abc");
    }

    #[test]
    fn stamping_sets_both_timestamps() {
        let mut doc = doc! { "name": "Ada" };
        stamp_timestamps(&mut doc);
        assert!(doc.get_datetime("created_at").is_ok());
        assert_eq!(doc.get("created_at"), doc.get("updated_at"));
    }
}
