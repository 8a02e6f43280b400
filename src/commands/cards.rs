//! Card commands: move, remove, check, sweep, link, jump, attach.

use crate::board::{Board, Intent};
use crate::cli::Towards;

/// Execute the `move` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn move_card(board: &mut Board, item_id: &str, direction: Towards) -> Result<(), String> {
    board
        .dispatch(Intent::Move {
            item_id: item_id.to_string(),
            direction: direction.into(),
        })
        .await;
    Ok(())
}

/// Execute the `remove` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn remove(board: &mut Board, item_id: &str) -> Result<(), String> {
    board
        .dispatch(Intent::Remove {
            item_id: item_id.to_string(),
        })
        .await;
    Ok(())
}

/// Execute the `check` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn check(board: &mut Board, item_id: &str) -> Result<(), String> {
    board
        .dispatch(Intent::CheckHealth {
            item_id: item_id.to_string(),
        })
        .await;
    Ok(())
}

/// Execute the `sweep` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn sweep(board: &mut Board) -> Result<(), String> {
    board.dispatch(Intent::SweepHealth).await;
    Ok(())
}

/// Execute the `link` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn copy_link(board: &mut Board, external_ref: &str) -> Result<(), String> {
    board
        .dispatch(Intent::CopyLink {
            external_ref: external_ref.to_string(),
        })
        .await;
    Ok(())
}

/// Execute the `jump` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn jump(board: &mut Board, external_ref: &str) -> Result<(), String> {
    board
        .dispatch(Intent::Jump {
            external_ref: external_ref.to_string(),
        })
        .await;
    Ok(())
}

/// Execute the `attach` command.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn attach(board: &mut Board, item_id: &str, url: Option<String>) -> Result<(), String> {
    board
        .dispatch(Intent::AttachLink {
            item_id: item_id.to_string(),
            url,
        })
        .await;
    Ok(())
}
