//! Push and notification-click handlers backed by notify-core.

use std::sync::Arc;

use notify_core::{
    ClickRouter, Clients, NotificationClickEvent, NotificationSurface, Presenter, PushEvent,
};

use crate::config::WorkerConfig;
use crate::events::EventHandler;
use crate::extendable::ExtendableEvent;

/// Wires the presenter and click router into the worker's dispatch table.
#[derive(Clone)]
pub struct NotificationHandler {
    presenter: Presenter,
    router: ClickRouter,
}

impl NotificationHandler {
    pub fn new(
        surface: Arc<dyn NotificationSurface>,
        clients: Arc<dyn Clients>,
        config: &WorkerConfig,
    ) -> Self {
        Self {
            presenter: Presenter::new(surface, config.notification_defaults()),
            router: ClickRouter::with_default_route(clients, config.default_route.clone()),
        }
    }

    /// Build from a single platform object that provides both capabilities.
    pub fn from_platform<P>(platform: Arc<P>, config: &WorkerConfig) -> Self
    where
        P: NotificationSurface + Clients + 'static,
    {
        Self::new(platform.clone(), platform, config)
    }
}

impl EventHandler for NotificationHandler {
    fn on_push(&self, event: PushEvent, ext: &mut ExtendableEvent) {
        let presenter = self.presenter.clone();
        ext.wait_until(async move {
            let outcome = presenter.present(event).await;
            tracing::debug!(?outcome, "Push handled");
        });
    }

    fn on_notification_click(&self, event: NotificationClickEvent, ext: &mut ExtendableEvent) {
        let router = self.router.clone();
        ext.wait_until(async move {
            let outcome = router.route(event).await;
            tracing::debug!(?outcome, "Notification click handled");
        });
    }
}
