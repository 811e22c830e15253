use crate::models::BlogPost;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_BLOG_LIMIT: i64 = 6;

#[derive(Debug, Deserialize, Validate)]
pub struct BlogListParams {
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<i64>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub items: Vec<BlogPost>,
    pub count: usize,
}

impl BlogListResponse {
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<BlogPost>> for BlogListResponse {
    fn from(items: Vec<BlogPost>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
