//! Notification presenter: push event in, display request out.

use std::sync::Arc;

use crate::notification::{DisplayNotification, NotificationDefaults};
use crate::payload::PushPayload;
use crate::platform::NotificationSurface;

/// An inbound push. `data` is `None` for a wake-up-only push with no body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushEvent {
    pub data: Option<Vec<u8>>,
}

impl PushEvent {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        Self::new(value.to_string())
    }
}

/// Result of the pure extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// No payload at all.
    Empty,
    /// Payload was not valid JSON; the event is dropped.
    Malformed,
    Ready(DisplayNotification),
}

/// What [`Presenter::present`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentOutcome {
    Shown(DisplayNotification),
    Skipped,
    Dropped,
    Failed(DisplayNotification),
}

/// Derives notifications from push payloads and asks the platform to show them.
#[derive(Clone)]
pub struct Presenter {
    surface: Arc<dyn NotificationSurface>,
    defaults: NotificationDefaults,
}

impl Presenter {
    pub fn new(surface: Arc<dyn NotificationSurface>, defaults: NotificationDefaults) -> Self {
        Self { surface, defaults }
    }

    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }

    /// Extract title, body and route from the event without touching the platform.
    pub fn prepare(&self, event: &PushEvent) -> Prepared {
        let Some(bytes) = event.data.as_deref() else {
            return Prepared::Empty;
        };

        match PushPayload::from_slice(bytes) {
            Ok(payload) => {
                Prepared::Ready(DisplayNotification::from_payload(&payload, &self.defaults))
            }
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "Dropping push with malformed payload");
                Prepared::Malformed
            }
        }
    }

    /// Handle a push event end to end. Never fails; platform errors are logged.
    pub async fn present(&self, event: PushEvent) -> PresentOutcome {
        let notification = match self.prepare(&event) {
            Prepared::Ready(n) => n,
            Prepared::Empty => {
                tracing::debug!("Push without payload, nothing to show");
                return PresentOutcome::Skipped;
            }
            Prepared::Malformed => return PresentOutcome::Dropped,
        };

        tracing::debug!(
            title = %notification.title,
            route = %notification.route(),
            "Showing push notification"
        );

        match self.surface.show_notification(notification.clone()).await {
            Ok(()) => {
                tracing::info!(route = %notification.route(), "Notification shown");
                PresentOutcome::Shown(notification)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to show notification");
                PresentOutcome::Failed(notification)
            }
        }
    }
}
