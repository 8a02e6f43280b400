//! `framelog column ...` subcommands.

use crate::board::{Board, Intent};
use crate::cli::ColumnAction;

/// Execute a column subcommand.
///
/// # Errors
///
/// Never fails; problems are reported as notifications.
pub async fn run(board: &mut Board, action: &ColumnAction) -> Result<(), String> {
    let intent = match action {
        ColumnAction::Add => Intent::AddColumn,
        ColumnAction::Move { column_id, direction } => Intent::ReorderColumn {
            column_id: column_id.clone(),
            direction: (*direction).into(),
        },
        ColumnAction::Rename { column_id, label } => Intent::RenameColumn {
            column_id: column_id.clone(),
            label: label.clone(),
        },
        ColumnAction::Recolor { column_id, color } => Intent::RecolorColumn {
            column_id: column_id.clone(),
            color: color.clone(),
        },
        ColumnAction::Delete { column_id } => Intent::DeleteColumn {
            column_id: column_id.clone(),
        },
    };
    board.dispatch(intent).await;
    Ok(())
}
