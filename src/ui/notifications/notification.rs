// SPDX-License-Identifier: MPL-2.0
//! A single edit-outcome toast.
//!
//! A [`Notification`] carries an i18n key rather than rendered text, so the
//! view resolves it in whatever locale is active when the toast is drawn.

use crate::i18n::fluent::I18n;
use std::time::Duration;

/// How long a success toast stays up.
const SUCCESS_LIFETIME: Duration = Duration::from_secs(3);

/// Outcome of an edit operation as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation went through; the toast fades on its own.
    Success,
    /// The operation failed; the toast stays until dismissed or superseded.
    Error,
}

impl Severity {
    /// Returns how long a toast of this severity stays up.
    ///
    /// `None` means it is sticky.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(SUCCESS_LIFETIME),
            Severity::Error => None,
        }
    }
}

/// A toast waiting to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Toast for an operation that succeeded.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Toast for an operation that failed.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument, e.g. the preset name in `edit-filter-preset`.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Resolves the message in the current locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        i18n.tr_with_args(&self.message_key, &self.message_args)
    }
}
