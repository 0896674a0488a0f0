// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog port definition.

use futures_util::future::BoxFuture;

/// Content of a yes/no confirmation dialog.
///
/// All fields are i18n keys; the presenting UI resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub prompt: String,
    pub confirm_text: String,
}

impl ConfirmRequest {
    /// The "discard unsaved edits?" dialog.
    #[must_use]
    pub fn discard_edits() -> Self {
        Self {
            title: "edit-discard-title".to_string(),
            prompt: "edit-discard-prompt".to_string(),
            confirm_text: "edit-discard-confirm".to_string(),
        }
    }
}

/// Port for showing a confirmation dialog and awaiting the user's answer.
pub trait ConfirmDialog: Send + Sync {
    /// Resolves to `true` only when the user confirmed.
    ///
    /// Dismissing the dialog any other way resolves to `false`.
    fn confirm(&self, request: ConfirmRequest) -> BoxFuture<'_, bool>;
}
