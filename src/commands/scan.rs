//! `framelog scan` and `framelog cancel-scan`.
//!
//! The terminal has no live selection stream, so a scan opens a session
//! over the snapshot's current selection and confirms it right away.

use crate::board::{Board, Intent};

/// Execute the `scan` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn run(board: &mut Board) -> Result<(), String> {
    board.dispatch(Intent::StartScan).await;
    board.dispatch(Intent::ConfirmScan).await;
    Ok(())
}

/// Execute the `cancel-scan` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn cancel(board: &mut Board) -> Result<(), String> {
    board.dispatch(Intent::CancelScan).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryHost;
    use crate::store::Store;

    #[tokio::test]
    async fn scan_ingests_current_selection() {
        let host = MemoryHost::new();
        host.canvas.add_frame("1:1", "Home", 0.0, 0.0);
        host.canvas.add_frame("1:2", "Cart", 10.0, 0.0);
        host.canvas.select(&["1:1", "1:2"]);
        let mut board = Board::new(host.context());

        run(&mut board).await.unwrap();

        assert_eq!(Store::new(board.context()).items().unwrap().len(), 2);
        assert_eq!(host.notifier.last().as_deref(), Some("Added 2 items"));
        assert!(host.canvas.active_subscriptions().is_empty());
    }
}
