// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the edit coordinator depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure and UI layers implement application layer ports
//! - The [`editor`](crate::editor) module drives the ports
//!
//! # Example
//!
//! ```ignore
//! use edit_session::application::port::EditTransport;
//!
//! // Infrastructure implements the port trait
//! struct ApiClient { /* ... */ }
//! impl EditTransport for ApiClient { /* ... */ }
//! ```

pub mod port;
