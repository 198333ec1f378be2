use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::notification::DisplayNotification;
use crate::platform::{
    ClientId, ClientQuery, ClientWindow, Clients, NotificationSurface, ShownNotification,
};
use crate::NotifyError;

mod router;

/// Platform call recorded by the fakes, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Show(DisplayNotification),
    Close,
    MatchAll(ClientQuery),
    Navigate(String, String),
    Focus(String),
    OpenWindow(String),
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

struct FakeSurface {
    log: Arc<Recorder>,
    fail: bool,
}

#[async_trait]
impl NotificationSurface for FakeSurface {
    async fn show_notification(
        &self,
        notification: DisplayNotification,
    ) -> Result<(), NotifyError> {
        self.log.push(Call::Show(notification));
        if self.fail {
            return Err(NotifyError::platform("showNotification", "denied"));
        }
        Ok(())
    }
}

struct FakeNotification {
    log: Arc<Recorder>,
    data: Option<Value>,
}

impl ShownNotification for FakeNotification {
    fn data(&self) -> Option<Value> {
        self.data.clone()
    }

    fn close(&self) {
        self.log.push(Call::Close);
    }
}

struct FakeWindow {
    log: Arc<Recorder>,
    id: &'static str,
    focusable: bool,
    fail_navigate: bool,
}

#[async_trait]
impl ClientWindow for FakeWindow {
    fn id(&self) -> ClientId {
        ClientId(self.id.to_string())
    }

    fn can_focus(&self) -> bool {
        self.focusable
    }

    async fn navigate(&self, route: &str) -> Result<(), NotifyError> {
        self.log
            .push(Call::Navigate(self.id.to_string(), route.to_string()));
        if self.fail_navigate {
            return Err(NotifyError::platform("navigate", "cross-origin"));
        }
        Ok(())
    }

    async fn focus(&self) -> Result<(), NotifyError> {
        self.log.push(Call::Focus(self.id.to_string()));
        Ok(())
    }
}

struct FakeClients {
    log: Arc<Recorder>,
    windows: Vec<Arc<dyn ClientWindow>>,
    can_open: bool,
    fail_match: bool,
}

#[async_trait]
impl Clients for FakeClients {
    async fn match_all(
        &self,
        query: &ClientQuery,
    ) -> Result<Vec<Arc<dyn ClientWindow>>, NotifyError> {
        self.log.push(Call::MatchAll(*query));
        if self.fail_match {
            return Err(NotifyError::platform("matchAll", "unavailable"));
        }
        Ok(self.windows.clone())
    }

    fn can_open_window(&self) -> bool {
        self.can_open
    }

    async fn open_window(&self, route: &str) -> Result<(), NotifyError> {
        self.log.push(Call::OpenWindow(route.to_string()));
        Ok(())
    }
}

fn window(log: &Arc<Recorder>, id: &'static str, focusable: bool) -> Arc<dyn ClientWindow> {
    Arc::new(FakeWindow {
        log: log.clone(),
        id,
        focusable,
        fail_navigate: false,
    })
}
