// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for edit outcomes.
//!
//! The coordinator reports each submission through the
//! [`Notifier`](crate::application::port::Notifier) port; a shared
//! `Mutex<Manager>` implements that port and keeps what the view renders.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager`, which replaces stale outcomes and expires old toasts
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//! use edit_session::ui::notifications::Manager;
//!
//! let toasts = Arc::new(Mutex::new(Manager::new()));
//! // hand `toasts.clone()` to `Ports::notifier`, then in the view:
//! let mut toasts = toasts.lock().unwrap();
//! toasts.expire(std::time::Instant::now());
//! for (id, toast) in toasts.iter() {
//!     draw(id, toast.text(&i18n));
//! }
//! ```
//!
//! Success toasts fade after ~3s; failures stay until dismissed or until a
//! later success replaces them.

mod manager;
mod notification;

pub use manager::{Manager, ToastId};
pub use notification::{Notification, Severity};
