//! One-shot request/response channel to the out-of-band dialog surface.
//!
//! Every round-trip registers a fresh correlation id and a one-shot sender.
//! A response resolves exactly the request it names; replies that arrive
//! late or for an unknown id are dropped. Clipboard requests fall back after
//! a fixed timeout so they finish even when the dialog never answers;
//! requests that wait on the user resolve only on an answer or a dismissal.

pub mod links;
pub mod protocol;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::{BoardError, BoardResult};
use crate::ports::DialogSurface;

use protocol::{CorrelationId, DialogRequest, DialogResponse, RequestEnvelope, ResponseEnvelope};

/// How long a clipboard round-trip waits for the dialog before giving up.
pub const DIALOG_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct Pending {
    next_id: u64,
    waiting: HashMap<CorrelationId, oneshot::Sender<DialogResponse>>,
}

/// Cloneable handle through which dialog responses are delivered.
#[derive(Debug, Clone, Default)]
pub struct DialogReplies {
    inner: Arc<Mutex<Pending>>,
}

impl DialogReplies {
    /// Delivers a response to the request it is correlated with.
    ///
    /// Returns `false` when no request with that id is waiting, either
    /// because it already resolved or because it timed out.
    pub fn deliver(&self, envelope: ResponseEnvelope) -> bool {
        let sender = self.lock().waiting.remove(&envelope.id);
        match sender {
            Some(tx) => tx.send(envelope.payload).is_ok(),
            None => {
                tracing::debug!(id = envelope.id.0, "dropping stale dialog response");
                false
            }
        }
    }

    /// Resolves the round-trip `id` without an answer, as when the user
    /// closes the dialog. Returns `false` if nothing was waiting.
    pub fn dismiss(&self, id: CorrelationId) -> bool {
        self.lock().waiting.remove(&id).is_some()
    }

    /// Number of round-trips still waiting for an answer.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().waiting.len()
    }

    fn register(&self) -> (CorrelationId, oneshot::Receiver<DialogResponse>) {
        let (tx, rx) = oneshot::channel();
        let mut pending = self.lock();
        pending.next_id += 1;
        let id = CorrelationId(pending.next_id);
        pending.waiting.insert(id, tx);
        (id, rx)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Pending> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Issues correlated round-trips to a [`DialogSurface`].
#[derive(Debug, Clone)]
pub struct DialogChannel {
    replies: DialogReplies,
    timeout: Duration,
}

impl Default for DialogChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogChannel {
    /// Creates a channel using [`DIALOG_TIMEOUT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DIALOG_TIMEOUT)
    }

    /// Creates a channel with a custom clipboard fallback timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            replies: DialogReplies::default(),
            timeout,
        }
    }

    /// Handle the host uses to deliver dialog responses.
    #[must_use]
    pub fn replies(&self) -> DialogReplies {
        self.replies.clone()
    }

    /// Posts `request` and waits for its response.
    ///
    /// Resolves to `Ok(None)` when a clipboard request was not answered in
    /// time or the dialog was dismissed. Requests that await the user have
    /// no timeout. The surface is closed before returning in every case.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Dialog`] if the surface cannot be opened.
    pub async fn round_trip(
        &self,
        surface: &dyn DialogSurface,
        request: DialogRequest,
    ) -> BoardResult<Option<DialogResponse>> {
        let (id, rx) = self.replies.register();
        let awaits_user = request.awaits_user();
        let envelope = RequestEnvelope {
            id,
            payload: request,
        };

        if let Err(e) = surface.open(&envelope, self.replies.clone()) {
            self.replies.dismiss(id);
            surface.close();
            return Err(BoardError::Dialog(e.to_string()));
        }

        let answer = if awaits_user {
            rx.await.ok()
        } else {
            match tokio::time::timeout(self.timeout, rx).await {
                Ok(Ok(response)) => Some(response),
                Ok(Err(_)) => None,
                Err(_) => {
                    tracing::debug!(id = id.0, "dialog round-trip timed out");
                    self.replies.dismiss(id);
                    None
                }
            }
        };
        surface.close();
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryDialog, ScriptedReply};
    use protocol::{CopyOutcome, DialogMessage};

    fn copy(text: &str) -> DialogRequest {
        DialogRequest::Copy { text: text.into() }
    }

    #[tokio::test]
    async fn round_trip_resolves_with_scripted_answer() {
        let channel = DialogChannel::new();
        let dialog = MemoryDialog::new(vec![ScriptedReply::Immediate(DialogResponse::Copy(
            CopyOutcome::Success,
        ))]);

        let answer = channel.round_trip(&dialog, copy("hello")).await.unwrap();

        assert_eq!(answer, Some(DialogResponse::Copy(CopyOutcome::Success)));
        assert_eq!(channel.replies().pending(), 0);
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn silent_dialog_times_out_and_late_reply_is_dropped() {
        let channel = DialogChannel::with_timeout(Duration::from_millis(20));
        let dialog = MemoryDialog::new(vec![ScriptedReply::Silent]);

        let answer = channel.round_trip(&dialog, copy("12:34")).await.unwrap();
        assert_eq!(answer, None);
        assert_eq!(channel.replies().pending(), 0);

        let late = dialog.posted()[0].id;
        let delivered = channel.replies().deliver(ResponseEnvelope {
            id: late,
            payload: DialogResponse::Copy(CopyOutcome::Success),
        });
        assert!(!delivered);
    }

    #[tokio::test]
    async fn stale_reply_does_not_resolve_newer_request() {
        let channel = DialogChannel::with_timeout(Duration::from_millis(20));
        let dialog = MemoryDialog::new(vec![
            ScriptedReply::Silent,
            ScriptedReply::Immediate(DialogResponse::Copy(CopyOutcome::Error)),
        ]);

        let first = channel.round_trip(&dialog, copy("1:1")).await.unwrap();
        assert_eq!(first, None);

        let second = channel.round_trip(&dialog, copy("1:2")).await.unwrap();
        assert_eq!(second, Some(DialogResponse::Copy(CopyOutcome::Error)));

        let posted = dialog.posted();
        assert_ne!(posted[0].id, posted[1].id);
    }

    #[tokio::test]
    async fn user_requests_wait_past_the_clipboard_timeout() {
        let channel = DialogChannel::with_timeout(Duration::from_millis(10));
        let dialog = MemoryDialog::new(vec![ScriptedReply::Silent]);
        let replies = channel.replies();
        let posted = dialog.clone();
        let answer_later = tokio::spawn(async move {
            while posted.posted().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
            replies.deliver(ResponseEnvelope {
                id: posted.posted()[0].id,
                payload: DialogResponse::Message(DialogMessage::SetFileUrl {
                    url: "https://www.figma.com/design/AbC123/Board".into(),
                }),
            })
        });

        let answer = channel
            .round_trip(&dialog, DialogRequest::ConfigureLinks)
            .await
            .unwrap();

        assert!(answer_later.await.unwrap());
        assert!(matches!(
            answer,
            Some(DialogResponse::Message(DialogMessage::SetFileUrl { .. }))
        ));
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn dismissing_a_user_request_resolves_without_answer() {
        let channel = DialogChannel::with_timeout(Duration::from_millis(10));
        let dialog = MemoryDialog::new(vec![ScriptedReply::Silent]);
        let replies = channel.replies();
        let posted = dialog.clone();
        let dismiss = tokio::spawn(async move {
            while posted.posted().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            replies.dismiss(posted.posted()[0].id)
        });

        let request = DialogRequest::PickColor {
            current: "#9333EA".into(),
        };
        let answer = channel.round_trip(&dialog, request).await.unwrap();

        assert!(dismiss.await.unwrap());
        assert_eq!(answer, None);
        assert_eq!(channel.replies().pending(), 0);
    }
}
