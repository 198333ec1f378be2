//! Seams to the host platform.
//!
//! The core never creates or destroys windows or notifications; it only
//! queries the ones the platform hands it and invokes their capabilities.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::NotifyError;
use crate::notification::DisplayNotification;

/// Surface that displays notifications outside the page.
#[async_trait]
pub trait NotificationSurface: Send + Sync {
    /// Request display. Resolves once the platform has accepted the request.
    async fn show_notification(
        &self,
        notification: DisplayNotification,
    ) -> Result<(), NotifyError>;
}

/// A notification the platform has already shown.
pub trait ShownNotification: Send + Sync {
    /// Data attached when the notification was shown, as stored by the platform.
    fn data(&self) -> Option<Value>;

    /// Dismiss the notification. Closing twice is a no-op.
    fn close(&self);
}

/// Opaque identity of an open application window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One open browser tab/window of the application.
#[async_trait]
pub trait ClientWindow: Send + Sync {
    fn id(&self) -> ClientId;

    fn url(&self) -> Option<String> {
        None
    }

    /// Whether this window can be given input focus.
    fn can_focus(&self) -> bool;

    async fn navigate(&self, route: &str) -> Result<(), NotifyError>;

    async fn focus(&self) -> Result<(), NotifyError>;
}

/// Kind of client to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Window,
}

/// Parameters for [`Clients::match_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuery {
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub include_uncontrolled: bool,
}

impl ClientQuery {
    /// Every application window, including ones not controlled by this worker.
    pub const ALL_WINDOWS: Self = Self {
        client_type: ClientType::Window,
        include_uncontrolled: true,
    };
}

/// The set of open application windows, owned by the platform.
#[async_trait]
pub trait Clients: Send + Sync {
    /// Enumerate matching clients in platform order.
    async fn match_all(
        &self,
        query: &ClientQuery,
    ) -> Result<Vec<Arc<dyn ClientWindow>>, NotifyError>;

    /// Whether the platform can open new windows at all.
    fn can_open_window(&self) -> bool;

    async fn open_window(&self, route: &str) -> Result<(), NotifyError>;
}
