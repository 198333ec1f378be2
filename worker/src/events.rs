//! Worker event categories and the handler dispatch table.

use std::fmt;

use notify_core::{NotificationClickEvent, PushEvent};

use crate::extendable::ExtendableEvent;

// -- Event category names --

pub const PUSH: &str = "push";
pub const NOTIFICATION_CLICK: &str = "notificationclick";

/// An event delivered to the worker by the platform.
pub enum WorkerEvent {
    Push(PushEvent),
    NotificationClick(NotificationClickEvent),
}

impl WorkerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => PUSH,
            Self::NotificationClick(_) => NOTIFICATION_CLICK,
        }
    }
}

impl fmt::Debug for WorkerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(e) => f.debug_tuple("Push").field(e).finish(),
            Self::NotificationClick(e) => f.debug_tuple("NotificationClick").field(e).finish(),
        }
    }
}

/// Handlers registered once at worker start, one method per event category.
///
/// Handlers run synchronously and hand any asynchronous work to
/// [`ExtendableEvent::wait_until`].
pub trait EventHandler: Send + Sync + 'static {
    fn on_push(&self, event: PushEvent, ext: &mut ExtendableEvent);

    fn on_notification_click(&self, event: NotificationClickEvent, ext: &mut ExtendableEvent);
}

/// Route an event to the matching handler method.
pub fn dispatch(handler: &dyn EventHandler, event: WorkerEvent, ext: &mut ExtendableEvent) {
    match event {
        WorkerEvent::Push(e) => handler.on_push(e, ext),
        WorkerEvent::NotificationClick(e) => handler.on_notification_click(e, ext),
    }
}
