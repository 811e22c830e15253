use super::store::{id_to_string, stamp_timestamps, DocumentStore};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-process document store with the same contract as [`MongoStore`].
///
/// Documents are kept per collection in insertion order. A store built with
/// [`MemoryStore::failing`] rejects every operation, which stands in for a
/// configured but unreachable server.
///
/// [`MongoStore`]: super::MongoStore
pub struct MemoryStore {
    database: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: RwLock::new(BTreeMap::new()),
            failure: None,
        }
    }

    pub fn failing(database: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(database)
        }
    }

    /// Inserts a document verbatim, bypassing timestamping and validation.
    pub fn seed(&self, collection: &str, doc: Document) -> Result<(), AppError> {
        let mut collections = self.write()?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(with_id(doc));
        Ok(())
    }

    /// All documents stored in `collection`, in insertion order.
    pub fn documents(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let collections = self.read()?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(reason) => Err(AppError::DatabaseError(anyhow::anyhow!(reason.clone()))),
            None => Ok(()),
        }
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<Document>>>, AppError> {
        self.collections
            .read()
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("memory store lock poisoned")))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Vec<Document>>>, AppError> {
        self.collections
            .write()
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("memory store lock poisoned")))
    }
}

fn with_id(mut doc: Document) -> Document {
    if !doc.contains_key("_id") {
        doc.insert("_id", ObjectId::new());
    }
    doc
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key).unwrap_or(&Bson::Null) == expected)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut payload: Document,
    ) -> Result<String, AppError> {
        self.check()?;
        stamp_timestamps(&mut payload);
        let doc = with_id(payload);
        let id = doc.get("_id").map(id_to_string).unwrap_or_default();

        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(doc);

        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<Document>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        self.check()?;
        let filter = filter.unwrap_or_default();
        let limit = match limit {
            Some(n) if n > 0 => n as usize,
            _ => usize::MAX,
        };

        let collections = self.read()?;
        let docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check()?;
        Ok(self.read()?.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    fn is_available(&self) -> bool {
        true
    }

    fn database_name(&self) -> Option<&str> {
        Some(&self.database)
    }
}
