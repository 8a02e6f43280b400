//! Status transitions between ordered columns.

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::{BoardError, BoardResult};
use crate::model::{Column, HistoryEntry};
use crate::store::Store;

/// Direction of a move along the column order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the first column.
    Prev,
    /// Towards the last column.
    Next,
}

impl Direction {
    /// Index one step from `current` in this direction, clamped to `0..len`.
    #[must_use]
    pub fn step(self, current: usize, len: usize) -> usize {
        match self {
            Self::Prev => current.saturating_sub(1),
            Self::Next => (current + 1).min(len.saturating_sub(1)),
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item moved into `column`.
    Moved {
        /// The destination column.
        column: Column,
    },
    /// The item already sits in the first (or last) column.
    AtBoundary,
}

/// Index of the column an item with `status` is displayed in.
///
/// An unknown status (its column was deleted) counts as the first column.
#[must_use]
pub fn column_index(columns: &[Column], status: &str) -> usize {
    columns.iter().position(|c| c.id == status).unwrap_or(0)
}

/// Moves an item one column in `direction`.
///
/// The snapshot hash is carried over unchanged into the new history entry.
///
/// # Errors
///
/// Returns [`BoardError::ItemNotFound`] for an unknown item, or a state error.
pub fn move_item(
    ctx: &ServiceContext,
    item_id: &str,
    direction: Direction,
) -> BoardResult<MoveOutcome> {
    let store = Store::new(ctx);
    let mut items = store.items()?;
    let columns = store.columns()?;
    let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;

    let current = column_index(&columns, &item.status);
    let target = direction.step(current, columns.len());
    if target == current {
        return Ok(MoveOutcome::AtBoundary);
    }

    let column = columns[target].clone();
    let by = ctx.current_user();
    let at = ctx.clock.now();
    let from = std::mem::replace(&mut item.status, column.id.clone());
    item.last_modified_by.clone_from(&by);
    item.last_modified_at = at;
    item.history.push(HistoryEntry {
        from: Some(from.clone()),
        to: column.id.clone(),
        by,
        at,
        snapshot: item.snapshot_hash.clone(),
    });

    store.replace_items(&items)?;
    tracing::info!(item = item_id, from = %from, to = %column.id, "item moved");
    Ok(MoveOutcome::Moved { column })
}
