use serde::{Deserialize, Serialize};

pub const CONTACT_RECEIVED: &str = "Thanks! Your message has been received.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ContactResponse {
    pub fn received(id: String) -> Self {
        Self {
            ok: true,
            message: CONTACT_RECEIVED.to_string(),
            id: Some(id),
        }
    }
}
