use std::sync::Arc;

use crate::config::WorkerConfig;
use crate::handler::NotificationHandler;
use crate::memory::MemoryPlatform;
use crate::runtime::{ServiceWorker, WorkerHandle};


fn start_worker(platform: &MemoryPlatform) -> WorkerHandle {
    let config = WorkerConfig::default();
    let handler = NotificationHandler::from_platform(Arc::new(platform.clone()), &config);
    ServiceWorker::start(Arc::new(handler), &config)
}
