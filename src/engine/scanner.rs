//! Selection scanner: turns canvas selection changes into a scan buffer.
//!
//! ```text
//! Idle --start--> Scanning --confirm--> Idle   (ScanOutcome::Confirmed)
//!                          --cancel---> Idle   (ScanOutcome::Cancelled)
//!                          --start----> Scanning (previous: Superseded)
//! ```
//!
//! The scanner owns its session: the live buffer, the subscription handle,
//! and the completion handle of the current scan. Nothing lives in globals,
//! so two boards never share a buffer.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::context::ServiceContext;
use crate::error::BoardResult;
use crate::model::ScanSession;
use crate::ports::{ArtifactKind, ArtifactNode, SubscriptionId};
use crate::store::Store;

const SCAN_OPEN_MESSAGE: &str = "Selection mode active: select frames on the canvas to add them...";

/// Where the scanner is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No scan in progress.
    Idle,
    /// Listening for selection changes.
    Scanning,
}

/// How a scan ended, delivered through its [`ScanCompletion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan was confirmed and `added` items were created.
    Confirmed {
        /// Number of items created.
        added: usize,
    },
    /// The scan was cancelled or ended without adding anything.
    Cancelled,
    /// A newer scan started before this one finished.
    Superseded,
}

/// Resolves once the scan it was returned for ends.
pub type ScanCompletion = oneshot::Receiver<ScanOutcome>;

/// Result of feeding one selection-change notification to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// The notification was not for the active scan, or was a self-selection.
    Ignored,
    /// The buffer now holds this many eligible artifacts.
    Buffered(usize),
}

/// Owns one board's scan session.
#[derive(Debug)]
pub struct SelectionScanner {
    state: ScanState,
    buffer: Vec<ArtifactNode>,
    subscription: Option<SubscriptionId>,
    completion: Option<oneshot::Sender<ScanOutcome>>,
}

impl Default for SelectionScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionScanner {
    /// Creates an idle scanner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            buffer: Vec::new(),
            subscription: None,
            completion: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Eligible artifacts picked so far.
    #[must_use]
    pub fn buffer(&self) -> &[ArtifactNode] {
        &self.buffer
    }

    /// The installed subscription, if any.
    #[must_use]
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Drops the live buffer while keeping the persisted refs.
    ///
    /// This is what a host re-render does to in-process state; confirm then
    /// falls back to the persisted ref list.
    pub fn forget_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Opens a new scan.
    ///
    /// A still-pending completion from an earlier scan resolves as
    /// [`ScanOutcome::Superseded`], and an existing subscription is removed
    /// before the new one is installed. The host's current selection is
    /// applied right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn start(&mut self, ctx: &ServiceContext) -> BoardResult<ScanCompletion> {
        self.resolve_pending(ScanOutcome::Superseded);
        if let Some(previous) = self.subscription.take() {
            ctx.canvas.unsubscribe_selection(previous);
        }

        self.buffer.clear();
        Store::new(ctx).replace_session(&ScanSession::opened())?;
        self.state = ScanState::Scanning;
        ctx.notifier.notify_for(SCAN_OPEN_MESSAGE, Duration::from_secs(2));

        let subscription = ctx.canvas.subscribe_selection();
        self.subscription = Some(subscription);
        tracing::info!(subscription = subscription.0, "scan started");

        let (tx, rx) = oneshot::channel();
        self.completion = Some(tx);

        let current = ctx.canvas.current_selection();
        self.on_selection_change(ctx, subscription, &current)?;
        Ok(rx)
    }

    /// Handles a selection-change notification from the host.
    ///
    /// Notifications for a stale subscription, while idle, or consisting of
    /// only the board widget itself are ignored. Anything else replaces the
    /// buffer with the trackable artifacts of `selection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn on_selection_change(
        &mut self,
        ctx: &ServiceContext,
        subscription: SubscriptionId,
        selection: &[ArtifactNode],
    ) -> BoardResult<SelectionUpdate> {
        if self.state != ScanState::Scanning || self.subscription != Some(subscription) {
            return Ok(SelectionUpdate::Ignored);
        }
        if let [only] = selection {
            if only.kind == ArtifactKind::Widget {
                return Ok(SelectionUpdate::Ignored);
            }
        }

        self.buffer = selection
            .iter()
            .filter(|n| n.kind.is_trackable())
            .cloned()
            .collect();
        let session = ScanSession::with_refs(self.buffer.iter().map(|n| n.id.clone()));
        Store::new(ctx).replace_session(&session)?;
        tracing::debug!(count = session.count, "scan buffer updated");
        Ok(SelectionUpdate::Buffered(self.buffer.len()))
    }

    /// Ends the scan with `outcome`.
    ///
    /// Removes the subscription, clears the buffer and the persisted
    /// session, and resolves the completion handle. Calling it again is
    /// harmless and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or cleared.
    pub fn stop(&mut self, ctx: &ServiceContext, outcome: ScanOutcome) -> BoardResult<()> {
        if let Some(subscription) = self.subscription.take() {
            ctx.canvas.unsubscribe_selection(subscription);
            tracing::info!(subscription = subscription.0, ?outcome, "scan stopped");
        }
        self.buffer.clear();
        self.state = ScanState::Idle;
        self.resolve_pending(outcome);

        let store = Store::new(ctx);
        if store.session()? != ScanSession::default() {
            store.replace_session(&ScanSession::default())?;
        }
        Ok(())
    }

    /// Cancels the scan. Same as [`SelectionScanner::stop`] with
    /// [`ScanOutcome::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or cleared.
    pub fn cancel(&mut self, ctx: &ServiceContext) -> BoardResult<()> {
        self.stop(ctx, ScanOutcome::Cancelled)
    }

    fn resolve_pending(&mut self, outcome: ScanOutcome) {
        if let Some(tx) = self.completion.take() {
            // The receiver may already be gone; nothing is waiting then.
            let _ = tx.send(outcome);
        }
    }
}
