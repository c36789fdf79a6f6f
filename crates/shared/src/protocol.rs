use serde::{Deserialize, Serialize};

use crate::domain::{Comment, FileRef};

/// Shape of the comment-thread read: total count plus the current page of
/// items, always taken as a whole snapshot from one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub count: u64,
    pub items: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Validated, normalized registration payload. Only the validation layer
/// constructs this; raw field buffers stay in `RegistrationDraft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub user_name: String,
    pub full_name: String,
    pub avatar: FileRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<FileRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_name: String,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Error envelope the remote service returns on failed writes:
/// `{ status, data: { error, success: false, errors: [...] } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub data: ErrorBody,
}

impl ErrorResponse {
    /// Structural check for the error envelope; anything else is treated
    /// as an opaque transport failure by the caller.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn message(&self) -> &str {
        &self.data.error
    }
}
