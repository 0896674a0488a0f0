// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Submission**: Waiting for the server to finish applying edits
//! - **Server**: Connection defaults for the photo library API

use std::time::Duration;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// How long to wait for the "asset edit ready" event after submitting edits (in milliseconds).
pub const DEFAULT_EDIT_READY_TIMEOUT_MS: u64 = 10_000;

/// Shortest accepted wait for the "asset edit ready" event (in milliseconds).
pub const MIN_EDIT_READY_TIMEOUT_MS: u64 = 500;

/// Longest accepted wait for the "asset edit ready" event (in milliseconds).
pub const MAX_EDIT_READY_TIMEOUT_MS: u64 = 120_000;

/// Default wait as a [`Duration`].
pub const DEFAULT_EDIT_READY_TIMEOUT: Duration =
    Duration::from_millis(DEFAULT_EDIT_READY_TIMEOUT_MS);

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Capacity of the in-process server event bus.
pub const DEFAULT_EVENT_BUS_CAPACITY: usize = 64;

/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!("edit_session/", env!("CARGO_PKG_VERSION"));
