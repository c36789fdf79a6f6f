//! Transient toast side channel. The core only enqueues; a presentation
//! layer drains `active` or subscribes, and nothing ever blocks on display.

use std::time::{Duration, Instant};

use tokio::sync::{broadcast, Mutex};

pub const TOAST_AUTO_DISMISS: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct ToastQueue {
    active: Mutex<Vec<Toast>>,
    events: broadcast::Sender<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            active: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Appends a toast and notifies subscribers. Lagging or dropped
    /// receivers are ignored.
    pub async fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            kind,
            message: message.into(),
            expires_at: Instant::now() + TOAST_AUTO_DISMISS,
        };
        self.active.lock().await.push(toast.clone());
        let _ = self.events.send(toast);
    }

    /// Toasts still within their display window at `now`. Expired entries
    /// are pruned on the way out.
    pub async fn active(&self, now: Instant) -> Vec<Toast> {
        let mut active = self.active.lock().await;
        active.retain(|toast| !toast.is_expired(now));
        active.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.events.subscribe()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
