//! End-to-end board behavior against the in-memory host.

use std::time::Duration;

use chrono::Utc;
use framelog::adapters::memory::{MemoryHost, ScriptedReply};
use framelog::board::{Board, Intent};
use framelog::dialog::protocol::{CopyOutcome, DialogResponse, ResponseEnvelope};
use framelog::dialog::DialogChannel;
use framelog::engine::{Direction, ScanOutcome};
use framelog::model::{default_columns, TrackedItem};
use framelog::store::Store;

fn board(host: &MemoryHost) -> Board {
    let dialog = DialogChannel::with_timeout(Duration::from_millis(20));
    Board::with_dialog(host.context(), dialog)
}

async fn scan(board: &mut Board, host: &MemoryHost, ids: &[&str]) {
    host.canvas.select(ids);
    board.dispatch(Intent::StartScan).await;
    board.dispatch(Intent::ConfirmScan).await;
}

fn items(board: &Board) -> Vec<TrackedItem> {
    Store::new(board.context()).items().unwrap()
}

fn move_intent(item_id: &str, direction: Direction) -> Intent {
    Intent::Move {
        item_id: item_id.to_string(),
        direction,
    }
}

#[tokio::test]
async fn scenario_a_scan_creates_items_in_first_column() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    host.canvas.add_frame("1:2", "Cart", 1600.0, 0.0);
    let mut board = board(&host);

    scan(&mut board, &host, &["1:1", "1:2"]).await;

    let items = items(&board);
    let first = &default_columns()[0].id;
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(&item.status, first);
        assert_eq!(item.history.len(), 1);
        assert_eq!(item.history[0].from, None);
        assert_eq!(item.added_by, "Ada");
    }
}

#[tokio::test]
async fn scenario_b_deleted_artifact_is_marked_missing_once() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1"]).await;
    let before = items(&board).remove(0);

    host.canvas.remove("1:1");
    board.dispatch(Intent::SweepHealth).await;

    let after = items(&board).remove(0);
    assert!(after.display_name.starts_with("🚫"));
    assert_eq!(after.display_name, "🚫 Home (Missing)");
    assert_eq!(after.snapshot_hash, before.snapshot_hash);
    assert_eq!(after.history, before.history);

    let writes = host.state.writes();
    board.dispatch(Intent::SweepHealth).await;
    assert_eq!(host.state.writes(), writes);
    assert_eq!(items(&board).remove(0).display_name, "🚫 Home (Missing)");
}

#[tokio::test]
async fn single_item_check_on_deleted_artifact_only_reports() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1"]).await;
    host.canvas.remove("1:1");
    let writes = host.state.writes();

    board
        .dispatch(Intent::CheckHealth {
            item_id: "item-id-1".into(),
        })
        .await;

    assert_eq!(host.state.writes(), writes);
    assert_eq!(
        host.notifier.last().as_deref(),
        Some("⚠️ Frame is missing (deleted?)")
    );
}

#[tokio::test]
async fn scenario_c_moves_from_third_column() {
    let host = MemoryHost::new();
    let mut board = board(&host);
    let columns = default_columns();
    let seeded = TrackedItem::ingested(
        "item-c".into(),
        "1:1".into(),
        "Home".into(),
        &columns[2].id,
        "abc".into(),
        "Ada",
        Utc::now(),
    );
    let store = Store::new(board.context());
    store.replace_items(&[seeded]).unwrap();

    board.dispatch(move_intent("item-c", Direction::Next)).await;
    board.dispatch(move_intent("item-c", Direction::Next)).await;
    board.dispatch(move_intent("item-c", Direction::Prev)).await;

    let item = items(&board).remove(0);
    assert_eq!(item.status, columns[3].id);
    assert_eq!(item.history.len(), 4);
}

#[tokio::test]
async fn history_is_append_only_and_chained() {
    use Direction::{Next, Prev};

    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1"]).await;

    let moves = [Next, Next, Prev, Next];
    for direction in moves {
        board.dispatch(move_intent("item-id-1", direction)).await;
    }

    let history = items(&board).remove(0).history;
    assert_eq!(history.len(), moves.len() + 1);
    for pair in history.windows(2) {
        assert_eq!(pair[1].from.as_deref(), Some(pair[0].to.as_str()));
    }
}

#[tokio::test]
async fn moves_clamp_at_both_ends() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1"]).await;

    board.dispatch(move_intent("item-id-1", Direction::Prev)).await;
    let item = items(&board).remove(0);
    assert_eq!(item.status, "RESEARCH");
    assert_eq!(item.history.len(), 1);

    for _ in 0..4 {
        board.dispatch(move_intent("item-id-1", Direction::Next)).await;
    }
    let at_end = items(&board).remove(0);
    board.dispatch(move_intent("item-id-1", Direction::Next)).await;
    assert_eq!(items(&board).remove(0), at_end);
    assert_eq!(at_end.status, "ARCHIVED");
}

#[tokio::test]
async fn rescanning_tracked_frames_never_duplicates() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    host.canvas.add_frame("1:2", "Cart", 1600.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1"]).await;

    scan(&mut board, &host, &["1:1", "1:2"]).await;

    let items = items(&board);
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().filter(|i| i.external_ref == "1:1").count(), 1);
    assert_eq!(host.notifier.last().as_deref(), Some("Added 1 item"));
}

#[tokio::test]
async fn sweep_without_changes_writes_nothing() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    host.canvas.add_frame("1:2", "Cart", 1600.0, 0.0);
    let mut board = board(&host);
    scan(&mut board, &host, &["1:1", "1:2"]).await;
    host.canvas.rename("1:2", "Cart v2");

    board.dispatch(Intent::SweepHealth).await;
    let writes = host.state.writes();
    board.dispatch(Intent::SweepHealth).await;

    assert_eq!(host.state.writes(), writes);
    assert_eq!(
        host.notifier.last().as_deref(),
        Some("All frames are healthy")
    );
}

#[tokio::test]
async fn deleting_the_sole_column_is_refused() {
    let host = MemoryHost::new();
    let mut board = board(&host);
    for column in &default_columns()[1..] {
        board
            .dispatch(Intent::DeleteColumn {
                column_id: column.id.clone(),
            })
            .await;
    }
    let columns = Store::new(board.context()).columns().unwrap();
    assert_eq!(columns.len(), 1);

    board
        .dispatch(Intent::DeleteColumn {
            column_id: columns[0].id.clone(),
        })
        .await;

    assert_eq!(Store::new(board.context()).columns().unwrap(), columns);
    assert_eq!(
        host.notifier.last().as_deref(),
        Some("Cannot delete the last column.")
    );
}

#[tokio::test]
async fn confirm_after_rerender_uses_persisted_refs() {
    let host = MemoryHost::new();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    host.canvas.select(&["1:1"]);
    let mut board = board(&host);
    board.dispatch(Intent::StartScan).await;
    let completion = board.take_scan_completion().unwrap();

    board.forget_scan_buffer();
    board.dispatch(Intent::ConfirmScan).await;

    assert_eq!(items(&board).len(), 1);
    assert_eq!(
        completion.await.unwrap(),
        ScanOutcome::Confirmed { added: 1 }
    );
}

#[tokio::test]
async fn restarting_a_scan_supersedes_the_previous_one() {
    let host = MemoryHost::new();
    let mut board = board(&host);
    board.dispatch(Intent::StartScan).await;
    let first = board.take_scan_completion().unwrap();

    board.dispatch(Intent::StartScan).await;

    assert_eq!(first.await.unwrap(), ScanOutcome::Superseded);
    assert_eq!(host.canvas.active_subscriptions().len(), 1);
}

#[tokio::test]
async fn late_dialog_reply_is_dropped() {
    let host = MemoryHost::new();
    host.dialog.push(ScriptedReply::Silent);
    let mut board = board(&host);

    board
        .dispatch(Intent::CopyLink {
            external_ref: "1:1".into(),
        })
        .await;

    let request = host.dialog.posted().remove(0);
    let delivered = board.dialog_replies().deliver(ResponseEnvelope {
        id: request.id,
        payload: DialogResponse::Copy(CopyOutcome::Success),
    });
    assert!(!delivered);
    let messages = host.notifier.messages();
    assert!(messages.iter().all(|m| !m.contains("clipboard")));
}

#[tokio::test]
async fn denied_identity_degrades_to_placeholder() {
    let host = MemoryHost::new();
    host.identity.deny();
    host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
    let mut board = board(&host);

    scan(&mut board, &host, &["1:1"]).await;

    let item = items(&board).remove(0);
    assert_eq!(item.added_by, "Unknown");
    assert_eq!(item.history[0].by, "Unknown");
}
