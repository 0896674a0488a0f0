// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that tool managers, infrastructure
//! adapters and UI adapters implement. These traits use only domain types,
//! so the edit coordinator stays independent of any concrete HTTP client,
//! socket layer or widget toolkit.
//!
//! # Available Ports
//!
//! - [`tool`]: Per-tool edit buffers ([`ToolManager`])
//! - [`transport`]: Request/response edit calls ([`EditTransport`])
//! - [`events`]: Server-pushed events ([`ServerEvents`])
//! - [`dialog`]: Discard confirmation ([`ConfirmDialog`])
//! - [`notify`]: Toast notifications ([`Notifier`])
//!
//! # Design Notes
//!
//! - Suspending operations return [`BoxFuture`](futures_util::future::BoxFuture)
//!   so the traits stay object safe and can be stored as `Arc<dyn Trait>`
//! - Traits are `Send + Sync`; implementations use interior mutability
//! - Methods return `Result` with port-specific error types

pub mod dialog;
pub mod events;
pub mod notify;
pub mod tool;
pub mod transport;

pub use dialog::{ConfirmDialog, ConfirmRequest};
pub use events::{AssetRef, EventError, EventKind, EventPredicate, ServerEvent, ServerEvents};
pub use notify::Notifier;
pub use tool::{ToolError, ToolManager};
pub use transport::{EditTransport, TransportError};
