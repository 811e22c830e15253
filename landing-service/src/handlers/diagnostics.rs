use super::store_error_reason;
use crate::dtos::{DiagnosticsResponse, MessageResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Longest error excerpt shown by `/test`.
const ERROR_EXCERPT_CHARS: usize = 50;
const MAX_LISTED_COLLECTIONS: usize = 10;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the Landing API backend!"))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}

/// Reports backend and database status. Never fails: store errors are
/// folded into the `database` field.
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut report = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(state.config.database.url.is_some()),
        database_name: presence(state.config.database.name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if !state.store.is_available() {
        report.database = "⚠️  Available but not initialized".to_string();
        return Json(report);
    }

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();

    match state.store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database diagnostics failed");
            report.database = format!(
                "⚠️  Connected but Error: {}",
                excerpt(&store_error_reason(&e), ERROR_EXCERPT_CHARS)
            );
        }
    }

    Json(report)
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
