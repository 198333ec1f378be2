//! Background push notification core.
//!
//! Turns inbound push payloads into displayable notifications and routes
//! notification clicks to an open application window (or a new one).
//! Platform access goes through the traits in [`platform`].

pub mod notification;
pub mod payload;
pub mod platform;
pub mod presenter;
pub mod router;

#[cfg(test)]
mod tests;

pub use notification::{DisplayNotification, NotificationData, NotificationDefaults};
pub use payload::PushPayload;
pub use platform::{
    ClientId, ClientQuery, ClientType, ClientWindow, Clients, NotificationSurface,
    ShownNotification,
};
pub use presenter::{PresentOutcome, Prepared, Presenter, PushEvent};
pub use router::{ClickRouter, NotificationClickEvent, RouteOutcome, select_window};

/// Title used when a push carries no usable title.
pub const APP_NAME: &str = "QuickPost";

/// Icon asset attached to every shown notification.
pub const NOTIFICATION_ICON: &str = "/icons/Icon-192.png";

/// Route used when neither the push nor the stored notification data names one.
pub const DEFAULT_ROUTE: &str = "/";

/// Unified error type for the notify-core crate.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("push payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("platform call `{operation}` failed: {message}")]
    Platform {
        operation: &'static str,
        message: String,
    },
}

impl NotifyError {
    /// Shorthand for a failed platform capability call.
    pub fn platform(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Platform {
            operation,
            message: message.into(),
        }
    }
}
