#![allow(dead_code)]

use landing_service::config::{CorsConfig, DatabaseConfig, LandingConfig};
use landing_service::services::{DocumentStore, MemoryStore, MongoStore};
use landing_service::startup::Application;
use reqwest::{Client, Response};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_DATABASE: &str = "landing_test";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: Client,
}

pub fn test_config(configured: bool) -> LandingConfig {
    LandingConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "info".to_string(),
        },
        database: DatabaseConfig {
            url: configured.then(|| "mongodb://127.0.0.1:27017".to_string()),
            name: configured.then(|| TEST_DATABASE.to_string()),
            timeout_secs: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        otlp_endpoint: None,
    }
}

impl TestApp {
    pub async fn spawn(config: LandingConfig, store: Arc<dyn DocumentStore>) -> Self {
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer before handing it to the test
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    /// App backed by an in-memory store the test can seed and inspect.
    pub async fn spawn_with_memory() -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new(TEST_DATABASE));
        let app = Self::spawn(test_config(true), store.clone()).await;
        (app, store)
    }

    /// App whose store is configured but fails every operation.
    pub async fn spawn_failing(reason: &str) -> Self {
        let store = Arc::new(MemoryStore::failing(TEST_DATABASE, reason));
        Self::spawn(test_config(true), store).await
    }

    /// App with no database settings at all.
    pub async fn spawn_degraded() -> Self {
        let config = test_config(false);
        let store = Arc::new(MongoStore::connect(&config.database).await);
        Self::spawn(config, store).await
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
