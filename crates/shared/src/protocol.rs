use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Multipart field names used by the site forms and the relay templates.
pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "user_email";
    pub const PHONE: &str = "phone";
    pub const MESSAGE: &str = "message";
    pub const RESUME: &str = "resume";
    pub const SUBJECT: &str = "subject";
    pub const TO_NAME: &str = "to_name";
    pub const TO_EMAIL: &str = "to_email";
    pub const REPLY_TO: &str = "reply_to";
    pub const RESUME_NAME: &str = "resume_name";
}

pub fn contact_api_route() -> &'static str {
    "/api/contact"
}

pub fn application_api_route() -> &'static str {
    "/api/apply"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Uuid>,
}

impl SubmitResponse {
    pub fn accepted(reference: Uuid, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            reference: Some(reference),
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            reference: None,
        }
    }
}

impl From<ApiError> for SubmitResponse {
    fn from(value: ApiError) -> Self {
        Self::rejected(value.message)
    }
}
