pub mod blog_post;
pub mod contact_message;

pub use blog_post::BlogPost;
pub use contact_message::ContactMessage;

/// Collection holding published blog posts.
pub const BLOG_POST_COLLECTION: &str = "blogpost";

/// Collection receiving contact form submissions.
pub const CONTACT_MESSAGE_COLLECTION: &str = "contactmessage";
