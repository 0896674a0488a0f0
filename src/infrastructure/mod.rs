// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that talk to the photo library server.
//!
//! # Available Adapters
//!
//! - [`http`]: Edit endpoints over HTTP (implements [`EditTransport`])
//! - [`events`]: In-process bus for server-pushed events (implements [`ServerEvents`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - The socket connection itself lives outside this crate; whatever reads
//!   the socket decodes [`ServerEvent`]s and publishes them on the bus
//!
//! [`EditTransport`]: crate::application::port::EditTransport
//! [`ServerEvents`]: crate::application::port::ServerEvents
//! [`ServerEvent`]: crate::application::port::ServerEvent

pub mod events;
pub mod http;

pub use events::EventBus;
pub use http::ApiClient;
