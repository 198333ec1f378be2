//! Worker configuration: defaults, validation, loading from a JSON file.

pub mod defaults;
pub mod validation;

use std::path::Path;

use notify_core::NotificationDefaults;
use serde::{Deserialize, Serialize};

use crate::WorkerError;

use self::defaults::{
    CONFIG_CANDIDATES, DEFAULT_APP_NAME, DEFAULT_EVENT_QUEUE_CAPACITY, DEFAULT_ICON,
    DEFAULT_ROUTE,
};
use self::validation::validate_setting;

/// Runtime configuration for the worker host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub app_name: String,
    pub icon: String,
    pub default_route: String,
    pub event_queue_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            icon: DEFAULT_ICON.into(),
            default_route: DEFAULT_ROUTE.into(),
            event_queue_capacity: DEFAULT_EVENT_QUEUE_CAPACITY,
        }
    }
}

impl WorkerConfig {
    /// Load from the first candidate file that exists, else defaults.
    pub fn load() -> Result<Self, WorkerError> {
        for path in CONFIG_CANDIDATES {
            let path = Path::new(path);
            if path.is_file() {
                let config = Self::from_file(path)?;
                tracing::info!("Loaded worker config from: {}", path.display());
                return Ok(config);
            }
        }
        tracing::info!("No worker config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, WorkerError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse and validate. Missing keys take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, WorkerError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WorkerError> {
        let checks = [
            ("app_name", self.app_name.clone()),
            ("icon", self.icon.clone()),
            ("default_route", self.default_route.clone()),
            (
                "event_queue_capacity",
                self.event_queue_capacity.to_string(),
            ),
        ];
        for (key, value) in checks {
            validate_setting(key, &value)
                .map_err(|e| WorkerError::Config(format!("{key}: {e}")))?;
        }
        Ok(())
    }

    /// Values the presenter falls back to for missing payload fields.
    pub fn notification_defaults(&self) -> NotificationDefaults {
        NotificationDefaults {
            app_name: self.app_name.clone(),
            icon: self.icon.clone(),
            default_route: self.default_route.clone(),
        }
    }
}
