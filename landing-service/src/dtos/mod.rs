pub mod blog;
pub mod contact;
pub mod diagnostics;

pub use blog::{BlogListParams, BlogListResponse, DEFAULT_BLOG_LIMIT};
pub use contact::ContactResponse;
pub use diagnostics::{DiagnosticsResponse, MessageResponse};
