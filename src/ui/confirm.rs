// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialogs bridged to the view loop.
//!
//! [`ConfirmChannel`] implements [`ConfirmDialog`] by handing each request
//! to whoever renders dialogs, then waiting for their answer:
//!
//! ```ignore
//! let (dialog, mut requests) = ConfirmChannel::new();
//!
//! // In the view loop
//! while let Some(pending) = requests.recv().await {
//!     let title = i18n.tr(&pending.request().title);
//!     // ... show the dialog, then
//!     pending.respond(user_clicked_confirm);
//! }
//! ```

use crate::application::port::{ConfirmDialog, ConfirmRequest};
use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::{mpsc, oneshot};

/// A dialog waiting to be shown and answered.
#[derive(Debug)]
pub struct PendingConfirm {
    request: ConfirmRequest,
    responder: oneshot::Sender<bool>,
}

impl PendingConfirm {
    #[must_use]
    pub fn request(&self) -> &ConfirmRequest {
        &self.request
    }

    /// Answers the dialog. Dropping without answering counts as "cancel".
    pub fn respond(self, confirmed: bool) {
        // The asker may have gone away; nothing to do then.
        let _ = self.responder.send(confirmed);
    }
}

/// [`ConfirmDialog`] that forwards requests over an mpsc channel.
#[derive(Debug, Clone)]
pub struct ConfirmChannel {
    sender: mpsc::UnboundedSender<PendingConfirm>,
}

impl ConfirmChannel {
    /// Creates the dialog port and the receiver the view loop drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingConfirm>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ConfirmDialog for ConfirmChannel {
    fn confirm(&self, request: ConfirmRequest) -> BoxFuture<'_, bool> {
        let (responder, answer) = oneshot::channel();
        let delivered = self
            .sender
            .send(PendingConfirm { request, responder })
            .is_ok();

        async move {
            if !delivered {
                log::warn!("no view is listening for confirmation dialogs");
                return false;
            }
            answer.await.unwrap_or(false)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answer_is_forwarded() {
        let (dialog, mut requests) = ConfirmChannel::new();
        let answer = dialog.confirm(ConfirmRequest::discard_edits());

        let pending = requests.recv().await.expect("request delivered");
        assert_eq!(pending.request().title, "edit-discard-title");
        pending.respond(true);

        assert!(answer.await);
    }

    #[tokio::test]
    async fn dropped_request_counts_as_cancel() {
        let (dialog, mut requests) = ConfirmChannel::new();
        let answer = dialog.confirm(ConfirmRequest::discard_edits());

        drop(requests.recv().await);
        assert!(!answer.await);
    }

    #[tokio::test]
    async fn closed_view_counts_as_cancel() {
        let (dialog, requests) = ConfirmChannel::new();
        drop(requests);

        assert!(!dialog.confirm(ConfirmRequest::discard_edits()).await);
    }
}
