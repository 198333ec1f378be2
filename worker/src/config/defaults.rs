//! Default setting values.

pub const DEFAULT_APP_NAME: &str = notify_core::APP_NAME;
pub const DEFAULT_ICON: &str = notify_core::NOTIFICATION_ICON;
pub const DEFAULT_ROUTE: &str = notify_core::DEFAULT_ROUTE;
pub const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 100;

/// Upper bound for `event_queue_capacity`.
pub const MAX_EVENT_QUEUE_CAPACITY: usize = 4096;

/// Files tried, in order, by `WorkerConfig::load`.
pub const CONFIG_CANDIDATES: &[&str] = &["quickpost-worker.json", "../quickpost-worker.json"];
