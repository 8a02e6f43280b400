//! Board-wide commands: link configuration, edit mode, clear.

use crate::board::{Board, Intent};

/// Execute the `configure-links` command.
///
/// # Errors
///
/// Returns an error string if the file key cannot be stored.
pub fn configure_links(board: &Board, url: &str) -> Result<(), String> {
    board
        .apply_file_url(url)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Execute the `edit-mode` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn toggle_edit_mode(board: &mut Board) -> Result<(), String> {
    board.dispatch(Intent::ToggleEditMode).await;
    let editing = board.view().map_err(|e| e.to_string())?.editing_columns;
    println!("Column edit mode {}", if editing { "on" } else { "off" });
    Ok(())
}

/// Execute the `clear` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn clear(board: &mut Board) -> Result<(), String> {
    board.dispatch(Intent::ClearAll).await;
    println!("Board cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryHost;
    use crate::store::Store;

    #[test]
    fn configure_links_stores_key() {
        let host = MemoryHost::new();
        let board = Board::new(host.context());

        configure_links(&board, "https://www.figma.com/file/Key42/Board").unwrap();

        let key = Store::new(board.context()).manual_file_key().unwrap();
        assert_eq!(key.as_deref(), Some("Key42"));
    }
}
