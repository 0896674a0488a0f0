// SPDX-License-Identifier: MPL-2.0
//! Edit transport port definition.
//!
//! The [`EditTransport`] trait covers the two mutating calls the edit
//! coordinator issues. Acceptance of a call does not mean the edits are
//! applied yet; completion arrives separately as a server event.

use crate::domain::editing::{AssetId, EditAction};
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur while talking to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built or sent.
    Request(String),

    /// The server answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body or reason phrase.
        message: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(msg) => write!(f, "request failed: {msg}"),
            TransportError::Status { code, message } => {
                write!(f, "server returned {code}: {message}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Port for the server's edit endpoints.
pub trait EditTransport: Send + Sync {
    /// Replaces the asset's stored edits with `edits`.
    fn apply_edits<'a>(
        &'a self,
        asset_id: &'a AssetId,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, Result<(), TransportError>>;

    /// Removes every stored edit from the asset.
    fn remove_edits<'a>(&'a self, asset_id: &'a AssetId)
        -> BoxFuture<'a, Result<(), TransportError>>;
}
