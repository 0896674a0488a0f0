// SPDX-License-Identifier: MPL-2.0
//! Presentation-side adapters for the edit coordinator.
//!
//! The view layer renders these; the coordinator only sees them through
//! the [`Notifier`](crate::application::port::Notifier) and
//! [`ConfirmDialog`](crate::application::port::ConfirmDialog) ports.
//!
//! - [`notifications`] - Outcome toasts for edit submissions
//! - [`confirm`] - Confirmation dialogs handed to the view loop over a channel

pub mod confirm;
pub mod notifications;
