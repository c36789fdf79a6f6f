//! Registration controller: validate first, then submit at most once at a
//! time. Field errors never leave the client.

use std::sync::Arc;

use shared::protocol::RegisterResponse;
use tokio::sync::Mutex;

use crate::{
    mutation::{MutationController, MutationNotices, MutationOutcome},
    notify::ToastQueue,
    validation::{validate_registration, FieldErrors, RegistrationDraft},
    VideoApi,
};

#[derive(Debug, Default)]
struct FormState {
    draft: RegistrationDraft,
    errors: FieldErrors,
}

pub struct RegistrationController {
    api: Arc<dyn VideoApi>,
    mutation: MutationController,
    state: Mutex<FormState>,
}

impl RegistrationController {
    pub fn new(api: Arc<dyn VideoApi>, toasts: Arc<ToastQueue>) -> Self {
        Self {
            api,
            mutation: MutationController::new(toasts),
            state: Mutex::new(FormState::default()),
        }
    }

    /// Applies a field edit to the draft. Ignored while a submission is in
    /// flight, matching disabled inputs.
    pub async fn edit(&self, apply: impl FnOnce(&mut RegistrationDraft)) {
        if self.mutation.is_pending().await {
            return;
        }
        apply(&mut self.state.lock().await.draft);
    }

    pub async fn draft(&self) -> RegistrationDraft {
        self.state.lock().await.draft.clone()
    }

    /// Per-field errors from the last submission attempt.
    pub async fn field_errors(&self) -> FieldErrors {
        self.state.lock().await.errors.clone()
    }

    pub async fn is_submitting(&self) -> bool {
        self.mutation.is_pending().await
    }

    /// Validates the draft and, only when every field passes, issues the
    /// registration write. Failing fields are stored for inline rendering
    /// and block the request entirely. The draft is destroyed on success
    /// and preserved on failure so the user can correct and retry.
    pub async fn submit(&self) -> Option<RegisterResponse> {
        let request = {
            let mut state = self.state.lock().await;
            match validate_registration(&state.draft) {
                Ok(request) => {
                    state.errors = FieldErrors::default();
                    request
                }
                Err(errors) => {
                    state.errors = errors;
                    return None;
                }
            }
        };

        let api = self.api.clone();
        let outcome = self
            .mutation
            .run(
                async move { api.register_user(request).await },
                MutationNotices {
                    started: Some("User registration in progress...".to_string()),
                    success: "User registered.".to_string(),
                    failure_fallback: "Failed to register user".to_string(),
                },
            )
            .await;

        match outcome {
            MutationOutcome::Completed(response) => {
                self.state.lock().await.draft = RegistrationDraft::default();
                Some(response)
            }
            MutationOutcome::Failed(_) | MutationOutcome::AlreadyPending => None,
        }
    }
}
