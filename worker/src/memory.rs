//! In-process platform.
//!
//! Simulates the notification surface and the window set a browser would
//! provide. Shown notifications keep their attached data as plain JSON, the
//! same way a real platform stores it, so a later click only sees what was
//! stored at show time.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use notify_core::{
    ClientId, ClientQuery, ClientWindow, Clients, DisplayNotification, NotificationClickEvent,
    NotificationSurface, NotifyError, ShownNotification,
};
use serde::Serialize;
use serde_json::Value;

/// Observable platform side effect, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlatformAction {
    Shown { index: usize, title: String, body: String },
    Closed { index: usize },
    Enumerated { count: usize },
    Navigated { client_id: String, route: String },
    Focused { client_id: String },
    Opened { client_id: String, route: String },
}

/// Snapshot of one open window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowInfo {
    pub id: String,
    pub url: String,
    pub focusable: bool,
    pub focused: bool,
}

/// Snapshot of one shown notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationInfo {
    pub index: usize,
    pub title: String,
    pub body: String,
    pub icon: String,
    pub data: Value,
    pub closed: bool,
}

struct PlatformInner {
    notifications: Mutex<Vec<Arc<MemoryNotification>>>,
    windows: Mutex<Vec<Arc<MemoryWindow>>>,
    actions: Mutex<Vec<PlatformAction>>,
    can_open_window: AtomicBool,
    next_client: AtomicUsize,
}

impl PlatformInner {
    fn record(&self, action: PlatformAction) {
        lock(&self.actions).push(action);
    }

    fn new_client_id(&self) -> ClientId {
        let n = self.next_client.fetch_add(1, Ordering::Relaxed);
        ClientId(format!("client-{n}"))
    }

    fn focus_only(&self, id: &ClientId) {
        for w in lock(&self.windows).iter() {
            w.focused.store(&w.id == id, Ordering::Relaxed);
        }
    }
}

/// Platform simulation shared by the headless binary and tests.
#[derive(Clone)]
pub struct MemoryPlatform {
    inner: Arc<PlatformInner>,
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPlatform {
    /// A platform with no windows that supports opening new ones.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PlatformInner {
                notifications: Mutex::new(Vec::new()),
                windows: Mutex::new(Vec::new()),
                actions: Mutex::new(Vec::new()),
                can_open_window: AtomicBool::new(true),
                next_client: AtomicUsize::new(1),
            }),
        }
    }

    pub fn set_can_open_window(&self, enabled: bool) {
        self.inner.can_open_window.store(enabled, Ordering::Relaxed);
    }

    /// Register an already open window, appended in enumeration order.
    pub fn add_window(&self, url: &str, focusable: bool) -> ClientId {
        let id = self.inner.new_client_id();
        lock(&self.inner.windows).push(Arc::new(MemoryWindow {
            id: id.clone(),
            url: Mutex::new(url.to_string()),
            focusable,
            focused: AtomicBool::new(false),
            platform: Arc::downgrade(&self.inner),
        }));
        id
    }

    pub fn windows(&self) -> Vec<WindowInfo> {
        lock(&self.inner.windows).iter().map(|w| w.info()).collect()
    }

    pub fn notifications(&self) -> Vec<NotificationInfo> {
        lock(&self.inner.notifications)
            .iter()
            .map(|n| n.info())
            .collect()
    }

    pub fn actions(&self) -> Vec<PlatformAction> {
        lock(&self.inner.actions).clone()
    }

    /// Build the click event for a shown notification, or `None` if no such index.
    pub fn click(&self, index: usize) -> Option<NotificationClickEvent> {
        let notification = lock(&self.inner.notifications).get(index).cloned()?;
        Some(NotificationClickEvent::new(notification))
    }
}

#[async_trait]
impl NotificationSurface for MemoryPlatform {
    async fn show_notification(
        &self,
        notification: DisplayNotification,
    ) -> Result<(), NotifyError> {
        let mut shown = lock(&self.inner.notifications);
        let index = shown.len();
        self.inner.record(PlatformAction::Shown {
            index,
            title: notification.title.clone(),
            body: notification.body.clone(),
        });
        shown.push(Arc::new(MemoryNotification {
            index,
            data: notification.data.to_value(),
            title: notification.title,
            body: notification.body,
            icon: notification.icon,
            closed: AtomicBool::new(false),
            platform: Arc::downgrade(&self.inner),
        }));
        Ok(())
    }
}

#[async_trait]
impl Clients for MemoryPlatform {
    async fn match_all(
        &self,
        query: &ClientQuery,
    ) -> Result<Vec<Arc<dyn ClientWindow>>, NotifyError> {
        tracing::trace!(?query, "Enumerating windows");
        let windows: Vec<Arc<dyn ClientWindow>> = lock(&self.inner.windows)
            .iter()
            .map(|w| w.clone() as Arc<dyn ClientWindow>)
            .collect();
        self.inner.record(PlatformAction::Enumerated {
            count: windows.len(),
        });
        Ok(windows)
    }

    fn can_open_window(&self) -> bool {
        self.inner.can_open_window.load(Ordering::Relaxed)
    }

    async fn open_window(&self, route: &str) -> Result<(), NotifyError> {
        if !self.can_open_window() {
            return Err(NotifyError::platform("openWindow", "not supported"));
        }
        let id = self.inner.new_client_id();
        lock(&self.inner.windows).push(Arc::new(MemoryWindow {
            id: id.clone(),
            url: Mutex::new(route.to_string()),
            focusable: true,
            focused: AtomicBool::new(false),
            platform: Arc::downgrade(&self.inner),
        }));
        self.inner.focus_only(&id);
        self.inner.record(PlatformAction::Opened {
            client_id: id.0,
            route: route.to_string(),
        });
        Ok(())
    }
}

struct MemoryNotification {
    index: usize,
    title: String,
    body: String,
    icon: String,
    data: Value,
    closed: AtomicBool,
    platform: std::sync::Weak<PlatformInner>,
}

impl MemoryNotification {
    fn info(&self) -> NotificationInfo {
        NotificationInfo {
            index: self.index,
            title: self.title.clone(),
            body: self.body.clone(),
            icon: self.icon.clone(),
            data: self.data.clone(),
            closed: self.closed.load(Ordering::Relaxed),
        }
    }
}

impl ShownNotification for MemoryNotification {
    fn data(&self) -> Option<Value> {
        Some(self.data.clone())
    }

    fn close(&self) {
        if self.closed.swap(true, Ordering::Relaxed) {
            return;
        }
        if let Some(platform) = self.platform.upgrade() {
            platform.record(PlatformAction::Closed { index: self.index });
        }
    }
}

struct MemoryWindow {
    id: ClientId,
    url: Mutex<String>,
    focusable: bool,
    focused: AtomicBool,
    platform: std::sync::Weak<PlatformInner>,
}

impl MemoryWindow {
    fn info(&self) -> WindowInfo {
        WindowInfo {
            id: self.id.0.clone(),
            url: lock(&self.url).clone(),
            focusable: self.focusable,
            focused: self.focused.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl ClientWindow for MemoryWindow {
    fn id(&self) -> ClientId {
        self.id.clone()
    }

    fn url(&self) -> Option<String> {
        Some(lock(&self.url).clone())
    }

    fn can_focus(&self) -> bool {
        self.focusable
    }

    async fn navigate(&self, route: &str) -> Result<(), NotifyError> {
        *lock(&self.url) = route.to_string();
        if let Some(platform) = self.platform.upgrade() {
            platform.record(PlatformAction::Navigated {
                client_id: self.id.0.clone(),
                route: route.to_string(),
            });
        }
        Ok(())
    }

    async fn focus(&self) -> Result<(), NotifyError> {
        if !self.focusable {
            return Err(NotifyError::platform("focus", "window cannot take focus"));
        }
        let Some(platform) = self.platform.upgrade() else {
            return Err(NotifyError::platform("focus", "platform gone"));
        };
        platform.focus_only(&self.id);
        platform.record(PlatformAction::Focused {
            client_id: self.id.0.clone(),
        });
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
