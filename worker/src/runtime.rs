//! Worker event loop.
//!
//! Events are queued on a bounded channel and handled strictly one at a
//! time: the handler runs, its extended work settles, and only then is
//! the next event received.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::WorkerError;
use crate::config::WorkerConfig;
use crate::events::{self, EventHandler, WorkerEvent};
use crate::extendable::{EventReceipt, EventStatus, ExtendableEvent};

struct Envelope {
    event: WorkerEvent,
    done: oneshot::Sender<EventStatus>,
}

/// Entry point for starting the worker.
pub struct ServiceWorker;

impl ServiceWorker {
    /// Spawn the dispatch loop. Must be called inside a tokio runtime.
    pub fn start(handler: Arc<dyn EventHandler>, config: &WorkerConfig) -> WorkerHandle {
        let capacity = config.event_queue_capacity.max(1);
        let (tx, rx) = mpsc::channel::<Envelope>(capacity);
        let task = tokio::spawn(worker_loop(handler, rx));
        tracing::info!(capacity, "Service worker started");
        WorkerHandle { tx, task }
    }
}

/// Handle used by the platform side to deliver events.
pub struct WorkerHandle {
    tx: mpsc::Sender<Envelope>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queue an event without blocking.
    pub fn dispatch(&self, event: WorkerEvent) -> Result<EventReceipt, WorkerError> {
        let (done, rx) = oneshot::channel();
        self.tx
            .try_send(Envelope { event, done })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => WorkerError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => WorkerError::Closed,
            })?;
        Ok(EventReceipt::new(rx))
    }

    /// Stop accepting events and wait for queued ones to finish.
    pub async fn shutdown(self) -> Result<(), WorkerError> {
        drop(self.tx);
        self.task
            .await
            .map_err(|e| WorkerError::Join(e.to_string()))
    }
}

async fn worker_loop(handler: Arc<dyn EventHandler>, mut rx: mpsc::Receiver<Envelope>) {
    while let Some(Envelope { event, done }) = rx.recv().await {
        let name = event.name();
        let handler = handler.clone();

        // Run in its own task so a panicking handler cannot take the loop down.
        let result = tokio::spawn(async move {
            let mut ext = ExtendableEvent::new(name);
            events::dispatch(handler.as_ref(), event, &mut ext);
            ext.settle().await;
        })
        .await;

        let status = match result {
            Ok(()) => EventStatus::Completed,
            Err(e) => {
                tracing::error!(event = name, error = %e, "Event handler panicked");
                EventStatus::Panicked
            }
        };
        let _ = done.send(status);
    }

    tracing::info!("Service worker stopped");
}
