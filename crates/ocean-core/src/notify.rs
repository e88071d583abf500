//! Transient user notifications.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::api::ErrorSink;

/// How long a notification stays visible before dismissing itself
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A message for the notification surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

/// Thread-safe buffer collecting notifications raised outside the UI thread.
///
/// The API client's error callback writes here; the UI drains it after each
/// request settles.
#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        self.lock().push(notification);
    }

    /// Take every buffered notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    /// Error callback for the API client that buffers an error notification
    pub fn error_sink(&self) -> ErrorSink {
        let inbox = self.clone();
        Arc::new(move |message: &str| inbox.push(Notification::error(message)))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
