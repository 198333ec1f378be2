//! Click router: sends a notification click to the right window.

use std::fmt;
use std::sync::Arc;

use crate::DEFAULT_ROUTE;
use crate::notification::NotificationData;
use crate::platform::{ClientId, ClientQuery, ClientWindow, Clients, ShownNotification};

/// A click on a previously shown notification.
#[derive(Clone)]
pub struct NotificationClickEvent {
    pub notification: Arc<dyn ShownNotification>,
}

impl NotificationClickEvent {
    pub fn new(notification: Arc<dyn ShownNotification>) -> Self {
        Self { notification }
    }
}

impl fmt::Debug for NotificationClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationClickEvent")
            .field("data", &self.notification.data())
            .finish()
    }
}

/// What [`ClickRouter::route`] did. Every click ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// An existing window was navigated and focused.
    Focused { client_id: ClientId, route: String },
    /// A new window was opened at the route.
    Opened { route: String },
    /// No focusable window and no way to open one.
    NoAction { route: String },
    /// A platform call failed; nothing is retried.
    Failed { route: String },
}

/// First window in enumeration order that can take focus.
pub fn select_window(windows: &[Arc<dyn ClientWindow>]) -> Option<&Arc<dyn ClientWindow>> {
    windows.iter().find(|w| w.can_focus())
}

#[derive(Clone)]
pub struct ClickRouter {
    clients: Arc<dyn Clients>,
    default_route: String,
}

impl ClickRouter {
    pub fn new(clients: Arc<dyn Clients>) -> Self {
        Self::with_default_route(clients, DEFAULT_ROUTE)
    }

    pub fn with_default_route(clients: Arc<dyn Clients>, default_route: impl Into<String>) -> Self {
        Self {
            clients,
            default_route: default_route.into(),
        }
    }

    /// Close the clicked notification, then focus an existing window or open a new one.
    pub async fn route(&self, event: NotificationClickEvent) -> RouteOutcome {
        event.notification.close();

        let data = event.notification.data();
        let route = NotificationData::route_from(data.as_ref(), &self.default_route);

        let windows = match self.clients.match_all(&ClientQuery::ALL_WINDOWS).await {
            Ok(windows) => windows,
            Err(e) => {
                tracing::warn!(error = %e, route = %route, "Failed to enumerate windows");
                return RouteOutcome::Failed { route };
            }
        };
        tracing::debug!(count = windows.len(), route = %route, "Enumerated windows");

        if let Some(window) = select_window(&windows) {
            return self.navigate_and_focus(window.as_ref(), route).await;
        }

        if !self.clients.can_open_window() {
            tracing::debug!(route = %route, "No focusable window and open-window unsupported");
            return RouteOutcome::NoAction { route };
        }

        match self.clients.open_window(&route).await {
            Ok(()) => {
                tracing::info!(route = %route, "Opened new window");
                RouteOutcome::Opened { route }
            }
            Err(e) => {
                tracing::warn!(error = %e, route = %route, "Failed to open window");
                RouteOutcome::Failed { route }
            }
        }
    }

    async fn navigate_and_focus(&self, window: &dyn ClientWindow, route: String) -> RouteOutcome {
        let client_id = window.id();

        // Focus is requested even when navigation fails.
        if let Err(e) = window.navigate(&route).await {
            tracing::warn!(error = %e, client_id = %client_id, route = %route, "Navigation failed");
        }

        match window.focus().await {
            Ok(()) => {
                tracing::info!(client_id = %client_id, route = %route, "Focused existing window");
                RouteOutcome::Focused { client_id, route }
            }
            Err(e) => {
                tracing::warn!(error = %e, client_id = %client_id, "Focus failed");
                RouteOutcome::Failed { route }
            }
        }
    }
}
