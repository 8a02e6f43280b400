//! The board: action boundary between the presentation layer and the engine.
//!
//! Every presentation intent goes through [`Board::dispatch`]. It always
//! completes: failures are logged and shown as a notification, never
//! returned, so the host's interaction lifecycle cannot hang.

use serde::Serialize;

use crate::context::ServiceContext;
use crate::dialog::links::{copy_target, extract_file_key, LinkProvider};
use crate::dialog::protocol::{CopyOutcome, DialogMessage, DialogRequest, DialogResponse};
use crate::dialog::{DialogChannel, DialogReplies};
use crate::engine::{
    group_by_column, move_item, ColumnManager, Direction, DriftDetector, MoveOutcome,
    ReconciliationEngine, ScanCompletion, ScanOutcome, SelectionScanner, SelectionUpdate,
};
use crate::error::{BoardError, BoardResult};
use crate::model::{Column, TrackedItem};
use crate::ports::{ArtifactNode, SubscriptionId};
use crate::store::Store;

/// Something the presentation layer asks the board to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open a scan session.
    StartScan,
    /// Ingest what the scan picked.
    ConfirmScan,
    /// Abandon the scan.
    CancelScan,
    /// Move a card one column.
    Move {
        /// Record id of the card.
        item_id: String,
        /// Which way to move.
        direction: Direction,
    },
    /// Delete a card.
    Remove {
        /// Record id of the card.
        item_id: String,
    },
    /// Compare one card with its artifact.
    CheckHealth {
        /// Record id of the card.
        item_id: String,
    },
    /// Compare every card with its artifact.
    SweepHealth,
    /// Copy a link to an artifact.
    CopyLink {
        /// Artifact id.
        external_ref: String,
    },
    /// Scroll the viewport to an artifact.
    Jump {
        /// Artifact id.
        external_ref: String,
    },
    /// Append a new column.
    AddColumn,
    /// Swap a column with its neighbour.
    ReorderColumn {
        /// Column to move.
        column_id: String,
        /// Which neighbour to swap with.
        direction: Direction,
    },
    /// Change a column's label.
    RenameColumn {
        /// Column to rename.
        column_id: String,
        /// New label.
        label: String,
    },
    /// Change a column's colour directly.
    RecolorColumn {
        /// Column to recolour.
        column_id: String,
        /// New colour as `#RRGGBB`.
        color: String,
    },
    /// Ask the dialog for a colour, then recolour.
    PickColumnColor {
        /// Column to recolour.
        column_id: String,
    },
    /// Delete a column.
    DeleteColumn {
        /// Column to delete.
        column_id: String,
    },
    /// Flip column edit mode.
    ToggleEditMode,
    /// Ask the dialog for the file URL used in links.
    ConfigureLinks,
    /// Remove every card and reset the scan session.
    ClearAll,
    /// Attach (or with `None`, detach) an external link to a card.
    AttachLink {
        /// Record id of the card.
        item_id: String,
        /// Link target.
        url: Option<String>,
    },
}

/// A card as the presentation layer draws it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// Record id.
    pub id: String,
    /// Artifact id.
    pub external_ref: String,
    /// Card title.
    pub name: String,
    /// The artifact was found missing by a sweep.
    pub missing: bool,
    /// Who last touched the card.
    pub last_modified_by: String,
    /// Attached external link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Glyph for the link's provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_glyph: Option<&'static str>,
}

impl From<&TrackedItem> for CardView {
    fn from(item: &TrackedItem) -> Self {
        Self {
            id: item.id.clone(),
            external_ref: item.external_ref.clone(),
            name: item.display_name.clone(),
            missing: item.is_marked_missing(),
            last_modified_by: item.last_modified_by.clone(),
            link: item.external_link.clone(),
            link_glyph: item
                .external_link
                .as_deref()
                .map(|url| LinkProvider::detect(url).glyph()),
        }
    }
}

/// One column with its cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    /// The column definition.
    #[serde(flatten)]
    pub column: Column,
    /// Cards displayed in this column.
    pub cards: Vec<CardView>,
}

/// Everything the presentation layer needs to render the board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Columns in display order.
    pub columns: Vec<ColumnView>,
    /// A scan session is open.
    pub scanning: bool,
    /// Artifacts picked by the open scan.
    pub scan_count: usize,
    /// Column edit mode is on.
    pub editing_columns: bool,
}

/// One board instance: a context plus the session state it owns.
pub struct Board {
    ctx: ServiceContext,
    scanner: SelectionScanner,
    dialog: DialogChannel,
    completion: Option<ScanCompletion>,
}

impl Board {
    /// Creates a board over `ctx` with the default dialog timeout.
    #[must_use]
    pub fn new(ctx: ServiceContext) -> Self {
        Self::with_dialog(ctx, DialogChannel::new())
    }

    /// Creates a board using a specific dialog channel.
    #[must_use]
    pub fn with_dialog(ctx: ServiceContext, dialog: DialogChannel) -> Self {
        Self {
            ctx,
            scanner: SelectionScanner::new(),
            dialog,
            completion: None,
        }
    }

    /// The board's service context.
    #[must_use]
    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// The board's scanner.
    #[must_use]
    pub fn scanner(&self) -> &SelectionScanner {
        &self.scanner
    }

    /// Simulates a host re-render dropping in-process scan state.
    pub fn forget_scan_buffer(&mut self) {
        self.scanner.forget_buffer();
    }

    /// Handle through which the host delivers dialog responses.
    #[must_use]
    pub fn dialog_replies(&self) -> DialogReplies {
        self.dialog.replies()
    }

    /// Takes the completion handle of the most recently started scan.
    pub fn take_scan_completion(&mut self) -> Option<ScanCompletion> {
        self.completion.take()
    }

    /// Feeds a selection-change notification to the scanner.
    pub fn on_selection_change(
        &mut self,
        subscription: SubscriptionId,
        selection: &[ArtifactNode],
    ) -> SelectionUpdate {
        match self.scanner.on_selection_change(&self.ctx, subscription, selection) {
            Ok(update) => update,
            Err(e) => {
                self.report(&e);
                SelectionUpdate::Ignored
            }
        }
    }

    /// Builds the render model.
    ///
    /// # Errors
    ///
    /// Returns a state error if the board cannot be read.
    pub fn view(&self) -> BoardResult<BoardView> {
        let store = Store::new(&self.ctx);
        let items = store.items()?;
        let columns = store.columns()?;
        let session = store.session()?;
        let groups = group_by_column(&items, &columns);
        let columns = columns
            .into_iter()
            .zip(groups)
            .map(|(column, cards)| ColumnView {
                column,
                cards: cards.into_iter().map(CardView::from).collect(),
            })
            .collect();
        Ok(BoardView {
            columns,
            scanning: session.active,
            scan_count: session.count,
            editing_columns: store.editing_columns()?,
        })
    }

    /// Performs `intent`. Never fails; problems become notifications.
    pub async fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "dispatching intent");
        if let Err(e) = self.apply(intent).await {
            self.report(&e);
        }
    }

    /// Stores the file key embedded in a pasted file URL.
    ///
    /// # Errors
    ///
    /// Returns a state error if the key cannot be stored.
    pub fn apply_file_url(&self, url: &str) -> BoardResult<bool> {
        let Some(key) = extract_file_key(url) else {
            self.ctx.notifier.notify("Could not find File Key in URL. Please try again.");
            return Ok(false);
        };
        Store::new(&self.ctx).set_manual_file_key(&key)?;
        self.ctx.notifier.notify("Links configured successfully!");
        tracing::info!(file_key = %key, "manual file key stored");
        Ok(true)
    }

    async fn apply(&mut self, intent: Intent) -> BoardResult<()> {
        match intent {
            Intent::StartScan => {
                self.completion = Some(self.scanner.start(&self.ctx)?);
            }
            Intent::ConfirmScan => self.confirm_scan()?,
            Intent::CancelScan => self.scanner.cancel(&self.ctx)?,
            Intent::Move { item_id, direction } => {
                if let MoveOutcome::Moved { column } = move_item(&self.ctx, &item_id, direction)? {
                    self.ctx.notifier.notify(&format!("Moved to {}", column.label));
                }
            }
            Intent::Remove { item_id } => self.remove(&item_id)?,
            Intent::CheckHealth { item_id } => {
                let check = DriftDetector::new(&self.ctx).check_item(&item_id).await?;
                self.ctx.notifier.notify(check.message());
            }
            Intent::SweepHealth => {
                let report = DriftDetector::new(&self.ctx).sweep().await?;
                self.ctx.notifier.notify(&report.message());
            }
            Intent::CopyLink { external_ref } => self.copy_link(&external_ref).await?,
            Intent::Jump { external_ref } => self.jump(&external_ref).await?,
            Intent::AddColumn => {
                ColumnManager::new(&self.ctx).add()?;
            }
            Intent::ReorderColumn { column_id, direction } => {
                ColumnManager::new(&self.ctx).reorder(&column_id, direction)?;
            }
            Intent::RenameColumn { column_id, label } => {
                ColumnManager::new(&self.ctx).rename(&column_id, &label)?;
            }
            Intent::RecolorColumn { column_id, color } => {
                ColumnManager::new(&self.ctx).recolor(&column_id, &color)?;
            }
            Intent::PickColumnColor { column_id } => self.pick_color(&column_id).await?,
            Intent::DeleteColumn { column_id } => ColumnManager::new(&self.ctx).delete(&column_id)?,
            Intent::ToggleEditMode => {
                let store = Store::new(&self.ctx);
                store.set_editing_columns(!store.editing_columns()?)?;
            }
            Intent::ConfigureLinks => {
                let answer = self.round_trip(DialogRequest::ConfigureLinks).await?;
                if let Some(DialogResponse::Message(DialogMessage::SetFileUrl { url })) = answer {
                    self.apply_file_url(&url)?;
                }
            }
            Intent::ClearAll => {
                let store = Store::new(&self.ctx);
                store.replace_items(&[])?;
                self.scanner.cancel(&self.ctx)?;
                tracing::info!("board cleared");
            }
            Intent::AttachLink { item_id, url } => self.attach_link(&item_id, url)?,
        }
        Ok(())
    }

    fn confirm_scan(&mut self) -> BoardResult<()> {
        let buffer = self.scanner.buffer().to_vec();
        match ReconciliationEngine::new(&self.ctx).confirm(&buffer) {
            Ok(summary) => {
                let outcome = if summary.added > 0 {
                    ScanOutcome::Confirmed {
                        added: summary.added,
                    }
                } else {
                    ScanOutcome::Cancelled
                };
                self.scanner.stop(&self.ctx, outcome)?;
                self.ctx.notifier.notify(&summary.message());
                Ok(())
            }
            Err(e) => {
                self.scanner.cancel(&self.ctx)?;
                Err(e)
            }
        }
    }

    fn remove(&self, item_id: &str) -> BoardResult<()> {
        let store = Store::new(&self.ctx);
        let mut items = store.items()?;
        let before = items.len();
        items.retain(|i| i.id != item_id);
        if items.len() == before {
            return Err(BoardError::ItemNotFound(item_id.to_string()));
        }
        store.replace_items(&items)?;
        self.ctx.notifier.notify("Card removed");
        Ok(())
    }

    async fn copy_link(&self, external_ref: &str) -> BoardResult<()> {
        let file_key = match Store::new(&self.ctx).manual_file_key()? {
            Some(key) => Some(key),
            None => self.ctx.canvas.file_key(),
        };
        let target = copy_target(&self.ctx.link_base, file_key.as_deref(), external_ref);
        match self.round_trip(DialogRequest::Copy { text: target.text }).await? {
            Some(DialogResponse::Copy(CopyOutcome::Success)) => {
                self.ctx.notifier.notify(target.success_message);
            }
            Some(DialogResponse::Copy(CopyOutcome::Error)) => {
                self.ctx.notifier.notify("Failed to write to clipboard");
            }
            Some(other) => tracing::warn!(?other, "unexpected reply to copy request"),
            None => tracing::warn!(artifact = external_ref, "clipboard dialog did not answer"),
        }
        Ok(())
    }

    async fn jump(&self, external_ref: &str) -> BoardResult<()> {
        let artifact = self
            .ctx
            .canvas
            .resolve_artifact(external_ref)
            .await
            .map_err(|e| BoardError::Canvas(e.to_string()))?
            .ok_or_else(|| BoardError::ArtifactUnresolvable {
                external_ref: external_ref.to_string(),
            })?;
        self.ctx.canvas.scroll_into_view(&artifact).map_err(|e| BoardError::Canvas(e.to_string()))?;
        self.ctx.notifier.notify("Navigated to frame");
        Ok(())
    }

    async fn pick_color(&self, column_id: &str) -> BoardResult<()> {
        let current = Store::new(&self.ctx)
            .columns()?
            .into_iter()
            .find(|c| c.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?
            .color;
        let answer = self.round_trip(DialogRequest::PickColor { current }).await?;
        if let Some(DialogResponse::Message(DialogMessage::SetColor { color })) = answer {
            ColumnManager::new(&self.ctx).recolor(column_id, &color)?;
        }
        Ok(())
    }

    fn attach_link(&self, item_id: &str, url: Option<String>) -> BoardResult<()> {
        let store = Store::new(&self.ctx);
        let mut items = store.items()?;
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        let message = if url.is_some() {
            "Link attached"
        } else {
            "Link removed"
        };
        item.external_link = url;
        item.last_modified_by = self.ctx.current_user();
        item.last_modified_at = self.ctx.clock.now();
        store.replace_items(&items)?;
        self.ctx.notifier.notify(message);
        Ok(())
    }

    async fn round_trip(&self, request: DialogRequest) -> BoardResult<Option<DialogResponse>> {
        self.dialog.round_trip(self.ctx.dialog.as_ref(), request).await
    }

    fn report(&self, error: &BoardError) {
        tracing::warn!(error = %error, "board action failed");
        let message = match error {
            // The column manager has already told the user.
            BoardError::LastColumn => return,
            BoardError::ArtifactUnresolvable { .. } => {
                "⚠️ Frame not found - it may have been deleted".to_string()
            }
            BoardError::EmptySelection => {
                "No items selected (Selection might have been lost). Try again.".to_string()
            }
            other => format!("Error: {other}"),
        };
        self.ctx.notifier.notify(&message);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::memory::{MemoryHost, ScriptedReply};
    use crate::dialog::protocol::{RequestEnvelope, ResponseEnvelope};
    use crate::model::ScanSession;

    fn board(host: &MemoryHost) -> Board {
        let dialog = DialogChannel::with_timeout(Duration::from_millis(20));
        Board::with_dialog(host.context(), dialog)
    }

    async fn board_with_items(host: &MemoryHost, names: &[&str]) -> Board {
        let ids: Vec<String> = (1..=names.len()).map(|i| format!("1:{i}")).collect();
        for (id, name) in ids.iter().zip(names) {
            host.canvas.add_frame(id, name, 0.0, 0.0);
        }
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        host.canvas.select(&refs);
        let mut board = board(host);
        board.dispatch(Intent::StartScan).await;
        board.dispatch(Intent::ConfirmScan).await;
        board
    }

    #[tokio::test]
    async fn confirm_resolves_completion_and_notifies() {
        let host = MemoryHost::new();
        host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
        host.canvas.select(&["1:1"]);
        let mut board = board(&host);

        board.dispatch(Intent::StartScan).await;
        let completion = board.take_scan_completion().unwrap();
        board.dispatch(Intent::ConfirmScan).await;

        assert_eq!(
            completion.await.unwrap(),
            ScanOutcome::Confirmed { added: 1 }
        );
        assert_eq!(host.notifier.last().as_deref(), Some("Added 1 item"));
        assert!(!board.view().unwrap().scanning);
    }

    #[tokio::test]
    async fn empty_confirm_notifies_and_resets_session() {
        let host = MemoryHost::new();
        let mut board = board(&host);
        board.dispatch(Intent::StartScan).await;
        board.dispatch(Intent::ConfirmScan).await;

        let expected = "No items selected (Selection might have been lost). Try again.";
        assert_eq!(host.notifier.last().as_deref(), Some(expected));
        assert_eq!(
            Store::new(board.context()).session().unwrap(),
            ScanSession::default()
        );
        assert!(Store::new(board.context()).items().unwrap().is_empty());
    }

    #[tokio::test]
    async fn move_notifies_destination_label() {
        let host = MemoryHost::new();
        let mut board = board_with_items(&host, &["Home"]).await;

        board
            .dispatch(Intent::Move {
                item_id: "item-id-1".into(),
                direction: Direction::Next,
            })
            .await;

        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Moved to 🔵 Exploration")
        );
    }

    #[tokio::test]
    async fn errors_become_notifications() {
        let host = MemoryHost::new();
        let mut board = board(&host);

        board
            .dispatch(Intent::Remove {
                item_id: "ghost".into(),
            })
            .await;

        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Error: item ghost not found")
        );
    }

    #[tokio::test]
    async fn jump_to_missing_artifact_notifies() {
        let host = MemoryHost::new();
        let mut board = board_with_items(&host, &["Home"]).await;

        board
            .dispatch(Intent::Jump {
                external_ref: "1:1".into(),
            })
            .await;
        assert_eq!(host.notifier.last().as_deref(), Some("Navigated to frame"));
        assert_eq!(host.canvas.navigated(), vec!["1:1"]);

        host.canvas.remove("1:1");
        board
            .dispatch(Intent::Jump {
                external_ref: "1:1".into(),
            })
            .await;
        assert_eq!(
            host.notifier.last().as_deref(),
            Some("⚠️ Frame not found - it may have been deleted")
        );
    }

    #[tokio::test]
    async fn copy_link_uses_manual_key_over_host_key() {
        let host = MemoryHost::new();
        host.canvas.set_file_key("HOSTKEY");
        let copied = DialogResponse::Copy(CopyOutcome::Success);
        host.dialog.push(ScriptedReply::Immediate(copied));
        let mut board = board(&host);
        let store = Store::new(board.context());
        store.set_manual_file_key("MANUAL").unwrap();

        board
            .dispatch(Intent::CopyLink {
                external_ref: "12:34".into(),
            })
            .await;

        let posted: Vec<RequestEnvelope> = host.dialog.posted();
        let expected = DialogRequest::Copy {
            text: "https://www.figma.com/file/MANUAL?node-id=12-34".into(),
        };
        assert_eq!(posted[0].payload, expected);
        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Link copied to clipboard 🔗")
        );
        assert!(!host.dialog.is_open());
    }

    #[tokio::test]
    async fn copy_link_without_key_and_clipboard_failure() {
        let host = MemoryHost::new();
        let failed = DialogResponse::Copy(CopyOutcome::Error);
        host.dialog.push(ScriptedReply::Immediate(failed));
        let mut board = board(&host);

        board
            .dispatch(Intent::CopyLink {
                external_ref: "12:34".into(),
            })
            .await;

        let expected = DialogRequest::Copy {
            text: "12:34".into(),
        };
        assert_eq!(host.dialog.posted()[0].payload, expected);
        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Failed to write to clipboard")
        );
    }

    #[tokio::test]
    async fn silent_dialog_still_completes() {
        let host = MemoryHost::new();
        host.dialog.push(ScriptedReply::Silent);
        let mut board = board(&host);

        board
            .dispatch(Intent::CopyLink {
                external_ref: "12:34".into(),
            })
            .await;

        assert_eq!(board.dialog_replies().pending(), 0);
        assert!(!host.dialog.is_open());
    }

    #[tokio::test]
    async fn configure_links_stores_extracted_key() {
        let host = MemoryHost::new();
        let message = DialogMessage::SetFileUrl {
            url: "https://www.figma.com/design/AbC123/Board".into(),
        };
        let reply = ScriptedReply::Immediate(DialogResponse::Message(message));
        host.dialog.push(reply);
        let mut board = board(&host);

        board.dispatch(Intent::ConfigureLinks).await;

        let key = Store::new(board.context()).manual_file_key().unwrap();
        assert_eq!(key.as_deref(), Some("AbC123"));
        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Links configured successfully!")
        );
    }

    #[tokio::test]
    async fn bad_file_url_is_reported() {
        let host = MemoryHost::new();
        let board = board(&host);
        assert!(!board.apply_file_url("https://example.com").unwrap());
        assert_eq!(
            host.notifier.last().as_deref(),
            Some("Could not find File Key in URL. Please try again.")
        );
    }

    #[tokio::test]
    async fn pick_color_recolors_column() {
        let host = MemoryHost::new();
        let message = DialogMessage::SetColor {
            color: "#000000".into(),
        };
        let reply = ScriptedReply::Immediate(DialogResponse::Message(message));
        host.dialog.push(reply);
        let mut board = board(&host);

        board
            .dispatch(Intent::PickColumnColor {
                column_id: "RESEARCH".into(),
            })
            .await;

        let expected = DialogRequest::PickColor {
            current: "#9333EA".into(),
        };
        assert_eq!(host.dialog.posted()[0].payload, expected);
        let column = &board.view().unwrap().columns[0].column;
        assert_eq!(column.color, "#000000");
        assert_eq!(column.bg_color, "#E6E6E6");
    }

    #[tokio::test]
    async fn picked_color_arriving_after_copy_timeout_is_applied() {
        let host = MemoryHost::new();
        host.dialog.push(ScriptedReply::Silent);
        let mut board = board(&host);
        let replies = board.dialog_replies();
        let dialog = host.dialog.clone();
        let user = tokio::spawn(async move {
            while dialog.posted().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
            replies.deliver(ResponseEnvelope {
                id: dialog.posted()[0].id,
                payload: DialogResponse::Message(DialogMessage::SetColor {
                    color: "#000000".into(),
                }),
            })
        });

        board
            .dispatch(Intent::PickColumnColor {
                column_id: "RESEARCH".into(),
            })
            .await;

        assert!(user.await.unwrap());
        assert_eq!(board.view().unwrap().columns[0].column.color, "#000000");
        assert!(!host.dialog.is_open());
    }

    #[tokio::test]
    async fn clear_all_empties_board() {
        let host = MemoryHost::new();
        let mut board = board_with_items(&host, &["Home", "Cart"]).await;
        board.dispatch(Intent::StartScan).await;

        board.dispatch(Intent::ClearAll).await;

        let view = board.view().unwrap();
        assert!(view.columns.iter().all(|c| c.cards.is_empty()));
        assert!(!view.scanning);
        assert_eq!(view.scan_count, 0);
    }

    #[tokio::test]
    async fn toggle_edit_mode_flips_flag() {
        let host = MemoryHost::new();
        let mut board = board(&host);
        board.dispatch(Intent::ToggleEditMode).await;
        assert!(board.view().unwrap().editing_columns);
        board.dispatch(Intent::ToggleEditMode).await;
        assert!(!board.view().unwrap().editing_columns);
    }

    #[tokio::test]
    async fn attach_link_classifies_provider() {
        let host = MemoryHost::new();
        let mut board = board_with_items(&host, &["Home"]).await;

        board
            .dispatch(Intent::AttachLink {
                item_id: "item-id-1".into(),
                url: Some("https://acme.atlassian.net/jira/browse/APP-1".into()),
            })
            .await;

        let card = board.view().unwrap().columns[0].cards[0].clone();
        assert_eq!(card.link_glyph, Some(LinkProvider::Jira.glyph()));

        board
            .dispatch(Intent::AttachLink {
                item_id: "item-id-1".into(),
                url: None,
            })
            .await;
        let card = board.view().unwrap().columns[0].cards[0].clone();
        assert_eq!(card.link, None);
        assert_eq!(host.notifier.last().as_deref(), Some("Link removed"));
    }

    #[tokio::test]
    async fn view_shows_orphans_in_first_column() {
        let host = MemoryHost::new();
        let mut board = board_with_items(&host, &["Home"]).await;
        board
            .dispatch(Intent::Move {
                item_id: "item-id-1".into(),
                direction: Direction::Next,
            })
            .await;
        board
            .dispatch(Intent::DeleteColumn {
                column_id: "EXPLORATION".into(),
            })
            .await;

        let view = board.view().unwrap();
        assert_eq!(view.columns.len(), 4);
        assert_eq!(view.columns[0].cards[0].id, "item-id-1");
        let item = Store::new(board.context()).item("item-id-1").unwrap();
        assert_eq!(item.status, "EXPLORATION");
    }
}
