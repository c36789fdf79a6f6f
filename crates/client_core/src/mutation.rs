//! Single-flight remote writes. Each controller instance tracks at most one
//! pending operation; side effects are limited to toast emission and
//! whatever cache invalidation the operation itself performs on success.

use std::{future::Future, sync::Arc};

use shared::error::ApiFailure;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::notify::{ToastKind, ToastQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Idle,
    InFlight,
}

/// User-facing messages for one write: an optional started notice, a
/// success notice, and the fallback used when the server supplies none.
#[derive(Debug, Clone)]
pub struct MutationNotices {
    pub started: Option<String>,
    pub success: String,
    pub failure_fallback: String,
}

#[derive(Debug)]
pub enum MutationOutcome<T> {
    Completed(T),
    Failed(ApiFailure),
    /// Another write was already in flight; nothing was issued.
    AlreadyPending,
}

impl<T> MutationOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, MutationOutcome::Completed(_))
    }
}

pub struct MutationController {
    status: Mutex<OperationStatus>,
    toasts: Arc<ToastQueue>,
}

impl MutationController {
    pub fn new(toasts: Arc<ToastQueue>) -> Self {
        Self {
            status: Mutex::new(OperationStatus::Idle),
            toasts,
        }
    }

    pub async fn status(&self) -> OperationStatus {
        *self.status.lock().await
    }

    pub async fn is_pending(&self) -> bool {
        self.status().await == OperationStatus::InFlight
    }

    /// Runs one remote write to completion. The operation's own success
    /// path (including any cache invalidation) and the settlement toast
    /// both run before the status returns to idle, so a caller holding the
    /// submitting state observes a fully settled mutation on return.
    /// Failures are absorbed into an error toast carrying the server
    /// message when one exists; they never propagate further.
    pub async fn run<T, Fut>(&self, op: Fut, notices: MutationNotices) -> MutationOutcome<T>
    where
        Fut: Future<Output = Result<T, ApiFailure>>,
    {
        {
            let mut status = self.status.lock().await;
            if *status == OperationStatus::InFlight {
                return MutationOutcome::AlreadyPending;
            }
            *status = OperationStatus::InFlight;
        }

        if let Some(message) = &notices.started {
            self.toasts.push(ToastKind::Info, message.clone()).await;
        }

        let outcome = match op.await {
            Ok(value) => {
                info!("mutation completed");
                self.toasts
                    .push(ToastKind::Success, notices.success.clone())
                    .await;
                MutationOutcome::Completed(value)
            }
            Err(failure) => {
                warn!(%failure, "mutation failed");
                let message = failure
                    .server_message()
                    .unwrap_or(&notices.failure_fallback)
                    .to_string();
                self.toasts.push(ToastKind::Error, message).await;
                MutationOutcome::Failed(failure)
            }
        };

        *self.status.lock().await = OperationStatus::Idle;
        outcome
    }
}
