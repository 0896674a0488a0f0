// SPDX-License-Identifier: MPL-2.0
//! Outcome toasts of the edit panel.
//!
//! Only the latest result of an operation is worth showing: a fresh outcome
//! replaces an older toast with the same message, and a success clears any
//! failure still on screen since the edits it complained about are now
//! applied. The history is bounded so a flapping server cannot pile toasts up.

use super::notification::{Notification, Severity};
use crate::application::port::Notifier;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Maximum number of toasts kept at once.
const HISTORY_LIMIT: usize = 4;

/// Handle used by the view to dismiss a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug)]
struct Entry {
    id: ToastId,
    shown_at: Instant,
    notification: Notification,
}

/// Toasts currently on screen, newest first.
#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Entry>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing toasts it makes stale.
    ///
    /// Failures are logged at warn level.
    pub fn push(&mut self, notification: Notification) -> ToastId {
        match notification.severity() {
            Severity::Error => log::warn!("edit failed: {}", notification.message_key()),
            Severity::Success => log::debug!("edit succeeded: {}", notification.message_key()),
        }

        let resolves_failures = notification.severity() == Severity::Success;
        self.entries.retain(|entry| {
            entry.notification.message_key() != notification.message_key()
                && !(resolves_failures && entry.notification.severity() == Severity::Error)
        });

        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.entries.push_front(Entry {
            id,
            shown_at: Instant::now(),
            notification,
        });
        self.entries.truncate(HISTORY_LIMIT);
        id
    }

    /// Removes a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drops toasts whose lifetime has run out by `now`.
    ///
    /// The view calls this from its frame or timer tick.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|entry| {
            entry
                .notification
                .severity()
                .lifetime()
                .map_or(true, |lifetime| {
                    now.saturating_duration_since(entry.shown_at) < lifetime
                })
        });
    }

    /// Toasts with their handles, newest first.
    pub fn iter(&self) -> impl Iterator<Item = (ToastId, &Notification)> {
        self.entries.iter().map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Notifier for Mutex<Manager> {
    fn success(&self, message_key: &str) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification::success(message_key));
    }

    fn failure(&self, message_key: &str) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification::error(message_key));
    }
}
