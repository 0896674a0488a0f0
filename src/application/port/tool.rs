// SPDX-License-Identifier: MPL-2.0
//! Tool manager port definition.
//!
//! Each editing tool (transform, filter) owns an edit buffer behind a
//! [`ToolManager`]. The edit coordinator drives all managers through this
//! trait without knowing which concrete tool it talks to.

use crate::domain::editing::{Asset, EditAction};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ToolError
// =============================================================================

/// Errors raised by tool managers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool was used outside of an edit session.
    NotActive,

    /// A filter preset name is not in the catalogue.
    UnknownFilter(String),

    /// A crop rectangle has no area inside the asset.
    EmptyCrop,

    /// Any other tool-specific failure.
    Failed(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::NotActive => write!(f, "tool is not active"),
            ToolError::UnknownFilter(name) => write!(f, "unknown filter preset: {name}"),
            ToolError::EmptyCrop => write!(f, "crop rectangle is empty"),
            ToolError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ToolError {}

// =============================================================================
// ToolManager Trait
// =============================================================================

/// Port for a single editing tool's edit buffer.
///
/// Lifecycle hooks may suspend; the coordinator awaits them one tool at a
/// time in declared order, never concurrently.
pub trait ToolManager: Send + Sync {
    /// Starts a session for `asset`, seeding the buffer from the stored `edits`.
    ///
    /// Managers pick out the actions they understand and ignore the rest.
    fn on_activate<'a>(
        &'a self,
        asset: &'a Asset,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, Result<(), ToolError>>;

    /// Ends the session and drops all buffered state.
    fn on_deactivate(&self) -> BoxFuture<'_, Result<(), ToolError>>;

    /// Returns the buffer to the unedited state, keeping the session open.
    fn reset_all_changes(&self) -> BoxFuture<'_, Result<(), ToolError>>;

    /// Returns `true` when the buffer differs from what the session started with.
    fn has_changes(&self) -> bool;

    /// Returns the tool's current edit list.
    fn edits(&self) -> Vec<EditAction>;
}
