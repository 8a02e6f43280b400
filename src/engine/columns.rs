//! Column management. Every operation replaces the column list in one write
//! and never touches items.

use crate::context::ServiceContext;
use crate::error::{BoardError, BoardResult};
use crate::model::{pale_tone, Column, FALLBACK_BG};
use crate::store::Store;

use super::transition::Direction;

const NEW_COLUMN_LABEL: &str = "New Column";
const NEW_COLUMN_COLOR: &str = "#6B7280";

/// Edits the ordered column list.
pub struct ColumnManager<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ColumnManager<'a> {
    /// Creates a manager over `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Appends a new grey column and returns it.
    ///
    /// # Errors
    ///
    /// Returns a state error if the columns cannot be read or written.
    pub fn add(&self) -> BoardResult<Column> {
        let store = Store::new(self.ctx);
        let mut columns = store.columns()?;
        let id = loop {
            let candidate = column_id(&self.ctx.id_gen.generate_id());
            if !columns.iter().any(|c| c.id == candidate) {
                break candidate;
            }
        };
        let column = Column::new(&id, NEW_COLUMN_LABEL, NEW_COLUMN_COLOR, FALLBACK_BG);
        columns.push(column.clone());
        store.replace_columns(&columns)?;
        tracing::info!(column = %column.id, "column added");
        Ok(column)
    }

    /// Swaps a column with its neighbour. Returns `false` at the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] or a state error.
    pub fn reorder(&self, column_id: &str, direction: Direction) -> BoardResult<bool> {
        let store = Store::new(self.ctx);
        let mut columns = store.columns()?;
        let index = position(&columns, column_id)?;
        let target = direction.step(index, columns.len());
        if target == index {
            return Ok(false);
        }
        columns.swap(index, target);
        store.replace_columns(&columns)?;
        Ok(true)
    }

    /// Changes a column's label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] or a state error.
    pub fn rename(&self, column_id: &str, label: &str) -> BoardResult<()> {
        self.edit(column_id, |c| c.label = label.to_string())
    }

    /// Sets a column's accent colour and derives its pale background.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] or a state error.
    pub fn recolor(&self, column_id: &str, color: &str) -> BoardResult<()> {
        self.edit(column_id, |c| {
            c.color = color.to_string();
            c.bg_color = pale_tone(color);
        })
    }

    /// Deletes a column. Items pointing at it fall back to the first column
    /// when displayed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LastColumn`] if it is the only column (and
    /// notifies the user), [`BoardError::ColumnNotFound`], or a state error.
    pub fn delete(&self, column_id: &str) -> BoardResult<()> {
        let store = Store::new(self.ctx);
        let mut columns = store.columns()?;
        let index = position(&columns, column_id)?;
        if columns.len() <= 1 {
            self.ctx.notifier.notify("Cannot delete the last column.");
            return Err(BoardError::LastColumn);
        }
        columns.remove(index);
        store.replace_columns(&columns)?;
        tracing::info!(column = column_id, "column deleted");
        Ok(())
    }

    fn edit(&self, column_id: &str, change: impl FnOnce(&mut Column)) -> BoardResult<()> {
        let store = Store::new(self.ctx);
        let mut columns = store.columns()?;
        let index = position(&columns, column_id)?;
        change(&mut columns[index]);
        store.replace_columns(&columns)
    }
}

fn position(columns: &[Column], column_id: &str) -> BoardResult<usize> {
    columns
        .iter()
        .position(|c| c.id == column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))
}

/// `COL_` followed by up to six uppercase alphanumerics taken from `seed`.
fn column_id(seed: &str) -> String {
    let suffix: String = seed
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(6)
        .collect();
    format!("COL_{suffix}")
}
