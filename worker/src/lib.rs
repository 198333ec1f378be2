//! Background worker host for QuickPost push notifications.
//!
//! Owns the event loop that feeds push and notification-click events to
//! the handlers in `notify-core`, one event at a time, and keeps each
//! event alive until the platform work it started has settled.

pub mod config;
pub mod events;
pub mod extendable;
pub mod handler;
pub mod memory;
pub mod runtime;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use config::WorkerConfig;
pub use events::{EventHandler, WorkerEvent};
pub use extendable::{EventReceipt, EventStatus, ExtendableEvent};
pub use handler::NotificationHandler;
pub use memory::MemoryPlatform;
pub use runtime::{ServiceWorker, WorkerHandle};

/// Unified error type for the worker host.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("event queue is full")]
    QueueFull,

    #[error("worker is shut down")]
    Closed,

    #[error("invalid config: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker task failed: {0}")]
    Join(String),
}
