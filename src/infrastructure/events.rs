// SPDX-License-Identifier: MPL-2.0
//! Broadcast bus for server-pushed events.

use crate::application::port::{EventError, EventKind, EventPredicate, ServerEvent, ServerEvents};
use crate::config::defaults::DEFAULT_EVENT_BUS_CAPACITY;
use futures_util::future::{BoxFuture, FutureExt};
use std::time::Duration;
use tokio::sync::broadcast::{self, error::RecvError};

/// Fans pushed events out to every pending waiter.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUS_CAPACITY)
    }
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` events per slow waiter.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event, returning how many waiters received it.
    pub fn publish(&self, event: ServerEvent) -> usize {
        log::debug!("server event {:?} for asset {}", event.kind(), event.asset_id());
        // No receivers is not an error: nobody is waiting right now.
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of waits currently armed.
    #[must_use]
    pub fn waiter_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ServerEvents for EventBus {
    fn wait_for(
        &self,
        kind: EventKind,
        predicate: EventPredicate,
        timeout: Duration,
    ) -> BoxFuture<'static, Result<ServerEvent, EventError>> {
        // Subscribe now so events published before the first poll are kept.
        let mut receiver = self.sender.subscribe();

        async move {
            let matching = async {
                loop {
                    match receiver.recv().await {
                        Ok(event) if event.kind() == kind && predicate(&event) => {
                            return Ok(event);
                        }
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            log::warn!("event waiter lagged, {skipped} events dropped");
                        }
                        Err(RecvError::Closed) => return Err(EventError::Closed),
                    }
                }
            };
            tokio::time::timeout(timeout, matching)
                .await
                .map_err(|_| EventError::Timeout(timeout))?
        }
        .boxed()
    }
}
