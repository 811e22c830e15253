use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A blog post as exposed to clients.
///
/// Posts are authored outside this service; the store-assigned `_id` is
/// never part of the public shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 300, message = "Excerpt cannot exceed 300 characters"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: String,
    pub author: Option<String>,
    #[validate(url(message = "Cover image must be a URL"))]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub read_time_minutes: Option<u32>,
}

impl BlogPost {
    /// Converts a raw stored document into a validated post.
    ///
    /// Returns `None` for documents that do not deserialize or fail
    /// validation.
    pub fn from_stored(mut doc: Document) -> Option<Self> {
        doc.remove("_id");

        let post: BlogPost = match mongodb::bson::from_document(doc) {
            Ok(post) => post,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping undecodable blog post");
                return None;
            }
        };

        match post.validate() {
            Ok(()) => Some(post),
            Err(e) => {
                tracing::debug!(error = %e, title = %post.title, "Skipping invalid blog post");
                None
            }
        }
    }
}
