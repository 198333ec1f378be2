//! Notification values shown by the presenter and read back by the router.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::PushPayload;
use crate::{APP_NAME, DEFAULT_ROUTE, NOTIFICATION_ICON};

/// Data attached to a shown notification.
///
/// This is the only state that survives from the push event to a later
/// click; the route inside it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    pub route: String,
}

impl NotificationData {
    /// Recover the route from data stored on a notification.
    ///
    /// A missing, non-string or empty `route` falls back to `default_route`.
    pub fn route_from(data: Option<&Value>, default_route: &str) -> String {
        data.and_then(|d| d.get("route"))
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty())
            .unwrap_or(default_route)
            .to_string()
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({ "route": self.route })
    }
}

/// A notification ready to hand to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub data: NotificationData,
}

/// Fallback values applied when a payload leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub app_name: String,
    pub icon: String,
    pub default_route: String,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.into(),
            icon: NOTIFICATION_ICON.into(),
            default_route: DEFAULT_ROUTE.into(),
        }
    }
}

impl DisplayNotification {
    /// Apply the extraction policy; each field defaults independently.
    pub fn from_payload(payload: &PushPayload, defaults: &NotificationDefaults) -> Self {
        let title = payload
            .title()
            .filter(|t| !t.is_empty())
            .unwrap_or(defaults.app_name.as_str());
        let body = payload.body().unwrap_or_default();
        let route = payload
            .route()
            .filter(|r| !r.is_empty())
            .unwrap_or(defaults.default_route.as_str());

        Self {
            title: title.to_string(),
            body: body.to_string(),
            icon: defaults.icon.clone(),
            data: NotificationData {
                route: route.to_string(),
            },
        }
    }

    pub fn route(&self) -> &str {
        &self.data.route
    }
}
