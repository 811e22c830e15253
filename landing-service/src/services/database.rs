use super::store::{id_to_string, stamp_timestamps, DocumentStore, STORE_UNAVAILABLE};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Database,
};
use service_core::error::AppError;
use std::time::Duration;

#[derive(Clone)]
struct Connection {
    client: MongoClient,
    db: Database,
}

/// MongoDB-backed document store.
///
/// Holds no connection when the database is unconfigured or the URI cannot
/// be parsed; the driver connects lazily, so an unreachable server only
/// shows up as errors on individual operations.
#[derive(Clone)]
pub struct MongoStore {
    conn: Option<Connection>,
}

impl MongoStore {
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let (Some(uri), Some(database)) = (config.url.as_deref(), config.name.as_deref()) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
            return Self::disabled();
        };

        let mut options = match ClientOptions::parse(uri).await {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid DATABASE_URL, running without a database");
                return Self::disabled();
            }
        };
        options.app_name = Some("landing-service".to_string());
        options.server_selection_timeout = Some(Duration::from_secs(config.timeout_secs));

        match MongoClient::with_options(options) {
            Ok(client) => {
                let db = client.database(database);
                tracing::info!(database = %database, "MongoDB client initialized");
                Self {
                    conn: Some(Connection { client, db }),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create MongoDB client, running without a database");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { conn: None }
    }

    fn connection(&self) -> Result<&Connection, AppError> {
        self.conn
            .as_ref()
            .ok_or_else(|| AppError::DatabaseError(anyhow::anyhow!(STORE_UNAVAILABLE)))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        mut payload: Document,
    ) -> Result<String, AppError> {
        let conn = self.connection()?;
        stamp_timestamps(&mut payload);

        let result = conn
            .db
            .collection::<Document>(collection)
            .insert_one(payload, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<Document>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let Some(conn) = self.conn.as_ref() else {
            return Ok(Vec::new());
        };

        let options = FindOptions::builder().limit(limit).build();
        let cursor = conn
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(AppError::from)?;

        let docs: Vec<Document> = cursor.try_collect().await.map_err(AppError::from)?;
        Ok(docs)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let conn = self.connection()?;
        Ok(conn.db.list_collection_names(None).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        let conn = self.connection()?;
        conn.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    fn database_name(&self) -> Option<&str> {
        self.conn.as_ref().map(|c| c.db.name())
    }
}
