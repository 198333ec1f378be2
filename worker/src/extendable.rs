//! Keep-alive tokens for in-flight events.
//!
//! A handler registers every asynchronous platform call it starts with
//! [`ExtendableEvent::wait_until`]. The runtime does not consider the event
//! handled until all of them have resolved.

use std::future::Future;

use futures::future::{BoxFuture, join_all};
use tokio::sync::oneshot;

use crate::WorkerError;

/// An event whose lifetime can be extended by pending work.
pub struct ExtendableEvent {
    name: &'static str,
    pending: Vec<BoxFuture<'static, ()>>,
}

impl ExtendableEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pending: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keep the event alive until `work` completes.
    pub fn wait_until<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.pending.push(Box::pin(work));
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drive all registered work to completion.
    pub async fn settle(self) {
        let count = self.pending.len();
        join_all(self.pending).await;
        tracing::trace!(event = self.name, count, "Event settled");
    }
}

/// How a dispatched event finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Completed,
    /// The handler panicked; the worker kept running.
    Panicked,
}

/// Completion handle returned by `WorkerHandle::dispatch`.
#[derive(Debug)]
pub struct EventReceipt {
    rx: oneshot::Receiver<EventStatus>,
}

impl EventReceipt {
    pub(crate) fn new(rx: oneshot::Receiver<EventStatus>) -> Self {
        Self { rx }
    }

    /// Wait until the event and all its extended work have settled.
    pub async fn settled(self) -> Result<EventStatus, WorkerError> {
        self.rx.await.map_err(|_| WorkerError::Closed)
    }
}
