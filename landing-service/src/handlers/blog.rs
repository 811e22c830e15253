use crate::dtos::{BlogListParams, BlogListResponse, DEFAULT_BLOG_LIMIT};
use crate::models::{BlogPost, BLOG_POST_COLLECTION};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::doc;
use service_core::error::AppError;
use validator::Validate;

/// Lists blog posts, optionally only featured ones.
///
/// Degrades to an empty list when the store is disabled or the read fails;
/// stored documents that do not match the `BlogPost` shape are skipped.
#[tracing::instrument(skip(state))]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> Result<Json<BlogListResponse>, AppError> {
    params.validate()?;

    if !state.store.is_available() {
        return Ok(Json(BlogListResponse::empty()));
    }

    let filter = params.featured.map(|featured| doc! { "featured": featured });
    let limit = params.limit.unwrap_or(DEFAULT_BLOG_LIMIT);

    let docs = match state
        .store
        .get_documents(BLOG_POST_COLLECTION, filter, Some(limit))
        .await
    {
        Ok(docs) => docs,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read blog posts, returning empty list");
            return Ok(Json(BlogListResponse::empty()));
        }
    };

    let fetched = docs.len();
    let items: Vec<BlogPost> = docs.into_iter().filter_map(BlogPost::from_stored).collect();
    if items.len() < fetched {
        tracing::warn!(
            skipped = fetched - items.len(),
            "Skipped blog posts that failed validation"
        );
    }

    Ok(Json(BlogListResponse::from(items)))
}
