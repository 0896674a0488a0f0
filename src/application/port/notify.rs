// SPDX-License-Identifier: MPL-2.0
//! Notification port definition.

/// Port for fire-and-forget user notifications (toasts).
///
/// Messages are i18n keys.
pub trait Notifier: Send + Sync {
    fn success(&self, message_key: &str);
    fn failure(&self, message_key: &str);
}
