use async_trait::async_trait;
use shared::{
    domain::{Comment, UserProfile, VideoId},
    error::ApiFailure,
    protocol::{CommentListResponse, RegisterRequest, RegisterResponse},
};

pub mod cache;
pub mod comments;
pub mod config;
pub mod http;
pub mod mutation;
pub mod notify;
pub mod registration;
pub mod timefmt;
pub mod validation;

pub use cache::{QueryCache, ReadCaches};
pub use comments::{CommentsController, DraftPhase};
pub use http::HttpVideoApi;
pub use mutation::{MutationController, MutationNotices, MutationOutcome, OperationStatus};
pub use notify::{Toast, ToastKind, ToastQueue, TOAST_AUTO_DISMISS};
pub use registration::RegistrationController;
pub use validation::{FieldErrors, RegistrationDraft};

/// Remote video service, specified by shape only. Reads are cacheable;
/// writes settle exactly once with either a server record or an
/// [`ApiFailure`].
#[async_trait]
pub trait VideoApi: Send + Sync {
    async fn fetch_comments(&self, video_id: &VideoId) -> Result<CommentListResponse, ApiFailure>;
    async fn add_comment(&self, video_id: &VideoId, content: &str) -> Result<Comment, ApiFailure>;
    async fn fetch_current_user(&self) -> Result<UserProfile, ApiFailure>;
    async fn register_user(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiFailure>;
}

/// Fallback backend for contexts with no wired service; every call fails.
pub struct MissingVideoApi;

#[async_trait]
impl VideoApi for MissingVideoApi {
    async fn fetch_comments(&self, video_id: &VideoId) -> Result<CommentListResponse, ApiFailure> {
        Err(ApiFailure::Network(format!(
            "video api is unavailable for video {}",
            video_id.as_str()
        )))
    }

    async fn add_comment(&self, video_id: &VideoId, _content: &str) -> Result<Comment, ApiFailure> {
        Err(ApiFailure::Network(format!(
            "video api is unavailable for video {}",
            video_id.as_str()
        )))
    }

    async fn fetch_current_user(&self) -> Result<UserProfile, ApiFailure> {
        Err(ApiFailure::Network("video api is unavailable".to_string()))
    }

    async fn register_user(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterResponse, ApiFailure> {
        Err(ApiFailure::Network("video api is unavailable".to_string()))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
