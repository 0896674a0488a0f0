// SPDX-License-Identifier: MPL-2.0
//! `edit_session` coordinates photo edit sessions against a photo library server.
//!
//! An [`EditManager`](editor::EditManager) drives a transform tool and a filter
//! tool, guards the "discard edits?" dialog, and submits the combined edit
//! list, waiting for the server's out-of-band "asset edit ready" event before
//! reporting success. Every collaborator (HTTP, pushed events, dialogs,
//! toasts) sits behind a port trait so the coordinator runs without a UI.

pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

pub use editor::{EditManager, Ports};
pub use error::{Error, Result};
