pub mod blog;
pub mod contact;
pub mod diagnostics;
pub mod health;

pub use blog::list_blog_posts;
pub use contact::submit_contact;
pub use diagnostics::{hello, root, test_database};
pub use health::{health_check, metrics_endpoint, readiness_check};

use service_core::error::AppError;

/// The underlying cause of a store failure, without the variant prefix.
pub(crate) fn store_error_reason(err: &AppError) -> String {
    match err {
        AppError::DatabaseError(inner) | AppError::InternalError(inner) => format!("{:#}", inner),
        other => other.to_string(),
    }
}
