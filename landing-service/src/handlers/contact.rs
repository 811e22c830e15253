use super::store_error_reason;
use crate::dtos::ContactResponse;
use crate::models::{ContactMessage, CONTACT_MESSAGE_COLLECTION};
use crate::services::to_payload;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    let document = to_payload(&payload)?;
    let id = state
        .store
        .create_document(CONTACT_MESSAGE_COLLECTION, document)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store contact message");
            AppError::DatabaseError(anyhow::anyhow!(
                "Failed to submit message: {}",
                store_error_reason(&e)
            ))
        })?;

    tracing::info!(id = %id, "Contact message received");

    Ok(Json(ContactResponse::received(id)))
}
