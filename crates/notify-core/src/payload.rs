//! Inbound push payload.
//!
//! The payload comes from an untrusted messaging backend. Every field is
//! optional and a field of the wrong JSON type is read as absent, so
//! extraction never fails on shape.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::NotifyError;

/// `{ notification?: {title?, body?}, data?: {route?} }`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushPayload {
    #[serde(default, deserialize_with = "lenient_object")]
    pub notification: Option<NotificationFields>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<DataFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DataFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub route: Option<String>,
}

impl PushPayload {
    /// Parse raw push bytes.
    ///
    /// Only syntactically invalid JSON is an error. A valid document that
    /// is not an object (`42`, `"x"`, `null`) gives an empty payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, NotifyError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(value))
    }

    /// Build from an already parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.notification.as_ref()?.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.notification.as_ref()?.body.as_deref()
    }

    pub fn route(&self) -> Option<&str> {
        self.data.as_ref()?.route.as_deref()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}
