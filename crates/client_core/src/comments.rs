//! Comment-thread controller: draft lifecycle, guarded submission, and
//! invalidate-then-refetch reads of the thread.

use std::sync::Arc;

use shared::{
    domain::{CommentId, UserProfile, VideoId},
    error::ApiFailure,
    protocol::CommentListResponse,
};
use tokio::sync::Mutex;

use crate::{
    cache::ReadCaches,
    mutation::{MutationController, MutationNotices, MutationOutcome},
    notify::ToastQueue,
    VideoApi,
};

/// One explicit state value for the comment editor. Hover tracking is a
/// separate, orthogonal piece of transient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftPhase {
    /// No draft content, controls collapsed.
    #[default]
    Idle,
    /// Draft non-empty or input focused; submit and cancel visible.
    Editing,
    /// A write is in flight; controls disabled.
    Submitting,
}

#[derive(Debug, Default)]
struct ThreadState {
    draft: String,
    phase: DraftPhase,
    hovered: Option<CommentId>,
}

pub struct CommentsController {
    api: Arc<dyn VideoApi>,
    caches: Arc<ReadCaches>,
    mutation: MutationController,
    video_id: Option<VideoId>,
    state: Mutex<ThreadState>,
}

impl CommentsController {
    pub fn new(
        api: Arc<dyn VideoApi>,
        caches: Arc<ReadCaches>,
        toasts: Arc<ToastQueue>,
        video_id: Option<VideoId>,
    ) -> Self {
        Self {
            api,
            caches,
            mutation: MutationController::new(toasts),
            video_id,
            state: Mutex::new(ThreadState::default()),
        }
    }

    pub async fn phase(&self) -> DraftPhase {
        self.state.lock().await.phase
    }

    pub async fn input(&self) -> String {
        self.state.lock().await.draft.clone()
    }

    /// Focusing the input expands the controls even before any text exists.
    pub async fn focus(&self) {
        let mut state = self.state.lock().await;
        if state.phase != DraftPhase::Submitting {
            state.phase = DraftPhase::Editing;
        }
    }

    /// Replaces the draft buffer. Ignored while a submission is in flight,
    /// matching disabled controls.
    pub async fn set_input(&self, text: impl Into<String>) {
        let mut state = self.state.lock().await;
        if state.phase == DraftPhase::Submitting {
            return;
        }
        state.draft = text.into();
        state.phase = DraftPhase::Editing;
    }

    /// Submit guard: a video context is bound, nothing is in flight, and
    /// the trimmed draft is non-empty.
    pub async fn can_submit(&self) -> bool {
        let state = self.state.lock().await;
        self.video_id.is_some()
            && state.phase != DraftPhase::Submitting
            && !state.draft.trim().is_empty()
    }

    /// Submits the draft. Returns true when a mutation was actually issued;
    /// guard violations (blank draft, missing video context, submission
    /// already pending) are no-ops, the programmatic equivalent of a
    /// disabled submit control.
    ///
    /// Success invalidates the cached thread for this video so the next
    /// read is a server-authoritative snapshot; the list is never appended
    /// to locally. Success and failure both clear the draft and collapse
    /// the editor.
    pub async fn submit(&self) -> bool {
        let Some(video_id) = self.video_id.clone() else {
            return false;
        };
        let content = {
            let mut state = self.state.lock().await;
            if state.phase == DraftPhase::Submitting || state.draft.trim().is_empty() {
                return false;
            }
            state.phase = DraftPhase::Submitting;
            state.draft.clone()
        };

        let api = self.api.clone();
        let caches = self.caches.clone();
        let op_video_id = video_id.clone();
        let op = async move {
            let comment = api.add_comment(&op_video_id, &content).await?;
            caches.comments.invalidate(&op_video_id).await;
            Ok(comment)
        };

        let outcome = self
            .mutation
            .run(
                op,
                MutationNotices {
                    started: None,
                    success: "Comment added".to_string(),
                    failure_fallback: "Failed to add comment".to_string(),
                },
            )
            .await;

        let mut state = self.state.lock().await;
        if matches!(outcome, MutationOutcome::AlreadyPending) {
            state.phase = DraftPhase::Editing;
            return false;
        }

        state.draft.clear();
        state.phase = DraftPhase::Idle;
        true
    }

    /// Discards the draft without any network call. Inert while a
    /// submission is in flight; settlement resets the editor anyway.
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        if state.phase == DraftPhase::Submitting {
            return;
        }
        state.draft.clear();
        state.phase = DraftPhase::Idle;
    }

    /// Cached-or-fetch read of the thread. `None` when no video context is
    /// bound; the query never runs without its key.
    pub async fn comments(&self) -> Result<Option<CommentListResponse>, ApiFailure> {
        let Some(video_id) = self.video_id.clone() else {
            return Ok(None);
        };
        let api = self.api.clone();
        let fetch_id = video_id.clone();
        let listing = self
            .caches
            .comments
            .read(video_id, || async move { api.fetch_comments(&fetch_id).await })
            .await?;
        Ok(Some(listing))
    }

    /// The submitting user's profile, for rendering their avatar beside the
    /// input. Cached process-wide.
    pub async fn current_user(&self) -> Result<UserProfile, ApiFailure> {
        let api = self.api.clone();
        self.caches
            .current_user
            .read((), || async move { api.fetch_current_user().await })
            .await
    }

    /// Which list item shows its contextual action menu.
    pub async fn set_hovered(&self, comment: Option<CommentId>) {
        self.state.lock().await.hovered = comment;
    }

    pub async fn hovered(&self) -> Option<CommentId> {
        self.state.lock().await.hovered.clone()
    }
}
