// SPDX-License-Identifier: MPL-2.0
//! Server event port definition.
//!
//! The server pushes events over a long-lived socket. The [`ServerEvents`]
//! trait lets the edit coordinator wait for one matching event with a
//! deadline.

use crate::domain::editing::{Asset, AssetId};
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// ServerEvent
// =============================================================================

/// Minimal asset reference carried by pushed events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: AssetId,
}

/// Events pushed by the server, tagged the way they arrive on the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum ServerEvent {
    /// Server-side edit processing for an asset finished.
    #[serde(rename = "AssetEditReadyV1")]
    AssetEditReady { asset: AssetRef },

    #[serde(rename = "on_asset_update")]
    AssetUpdate(Asset),

    #[serde(rename = "on_asset_delete")]
    AssetDelete(AssetId),
}

/// Discriminant of [`ServerEvent`], used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    AssetEditReady,
    AssetUpdate,
    AssetDelete,
}

impl ServerEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            ServerEvent::AssetEditReady { .. } => EventKind::AssetEditReady,
            ServerEvent::AssetUpdate(_) => EventKind::AssetUpdate,
            ServerEvent::AssetDelete(_) => EventKind::AssetDelete,
        }
    }

    /// Returns the id of the asset this event is about.
    #[must_use]
    pub fn asset_id(&self) -> &AssetId {
        match self {
            ServerEvent::AssetEditReady { asset } => &asset.id,
            ServerEvent::AssetUpdate(asset) => &asset.id,
            ServerEvent::AssetDelete(id) => id,
        }
    }

    /// Shorthand for an "asset edit ready" event.
    #[must_use]
    pub fn asset_edit_ready(id: impl Into<AssetId>) -> Self {
        ServerEvent::AssetEditReady {
            asset: AssetRef { id: id.into() },
        }
    }
}

// =============================================================================
// EventError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// No matching event arrived before the deadline.
    Timeout(Duration),

    /// The event source shut down while waiting.
    Closed,
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::Timeout(d) => {
                write!(f, "no matching event within {} ms", d.as_millis())
            }
            EventError::Closed => write!(f, "event source closed"),
        }
    }
}

impl std::error::Error for EventError {}

// =============================================================================
// ServerEvents Trait
// =============================================================================

/// Filter applied to events of the requested kind.
pub type EventPredicate = Box<dyn Fn(&ServerEvent) -> bool + Send + Sync>;

/// Port for waiting on server-pushed events.
pub trait ServerEvents: Send + Sync {
    /// Waits for the first event of `kind` that satisfies `predicate`.
    ///
    /// The listener MUST be registered before this method returns, not when
    /// the returned future is first polled: callers arm the wait, then send
    /// the request that triggers the event, then await.
    ///
    /// # Errors
    ///
    /// Resolves to [`EventError::Timeout`] when nothing matches in time and
    /// [`EventError::Closed`] when the source goes away.
    fn wait_for(
        &self,
        kind: EventKind,
        predicate: EventPredicate,
        timeout: Duration,
    ) -> BoxFuture<'static, Result<ServerEvent, EventError>>;
}
