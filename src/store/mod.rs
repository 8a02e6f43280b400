//! Board store: typed access to the replicated state.
//!
//! Every board value lives under its own key and is always replaced whole:
//!
//! ```text
//! items            -> [TrackedItem]
//! columns          -> [Column]        (defaults until first written)
//! scanSession      -> ScanSession
//! isEditingColumns -> bool
//! manualFileKey    -> string
//! ```
//!
//! A write is a single `set`, so collaborators never observe half-applied
//! changes. Concurrent writers clobber each other at value granularity.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::ServiceContext;
use crate::error::{BoardError, BoardResult};
use crate::model::{default_columns, Column, ScanSession, TrackedItem};

const ITEMS: &str = "items";
const COLUMNS: &str = "columns";
const SCAN_SESSION: &str = "scanSession";
const EDITING_COLUMNS: &str = "isEditingColumns";
const MANUAL_FILE_KEY: &str = "manualFileKey";

/// Typed view over the replicated board state.
///
/// All I/O goes through `ctx.state` so the store works against the
/// file-backed adapter and the in-memory one alike.
pub struct Store<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Store<'a> {
    /// Creates a store over the context's replicated state.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads all tracked items.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    pub fn items(&self) -> BoardResult<Vec<TrackedItem>> {
        Ok(self.read(ITEMS)?.unwrap_or_default())
    }

    /// Replaces the whole item list.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    pub fn replace_items(&self, items: &[TrackedItem]) -> BoardResult<()> {
        self.write(ITEMS, &items)
    }

    /// Finds one item by record id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if no item has that id, or a
    /// state error if the items cannot be loaded.
    pub fn item(&self, item_id: &str) -> BoardResult<TrackedItem> {
        self.items()?
            .into_iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))
    }

    /// Loads the column list, falling back to the default columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    pub fn columns(&self) -> BoardResult<Vec<Column>> {
        let columns: Option<Vec<Column>> = self.read(COLUMNS)?;
        Ok(match columns {
            Some(c) if !c.is_empty() => c,
            _ => default_columns(),
        })
    }

    /// Replaces the whole column list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LastColumn`] for an empty list, or a state error
    /// if the write fails.
    pub fn replace_columns(&self, columns: &[Column]) -> BoardResult<()> {
        if columns.is_empty() {
            return Err(BoardError::LastColumn);
        }
        self.write(COLUMNS, &columns)
    }

    /// Loads the persisted scan session.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    pub fn session(&self) -> BoardResult<ScanSession> {
        Ok(self.read(SCAN_SESSION)?.unwrap_or_default())
    }

    /// Replaces the persisted scan session.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    pub fn replace_session(&self, session: &ScanSession) -> BoardResult<()> {
        self.write(SCAN_SESSION, session)
    }

    /// Whether the column editor is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    pub fn editing_columns(&self) -> BoardResult<bool> {
        Ok(self.read(EDITING_COLUMNS)?.unwrap_or(false))
    }

    /// Opens or closes the column editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    pub fn set_editing_columns(&self, editing: bool) -> BoardResult<()> {
        self.write(EDITING_COLUMNS, &editing)
    }

    /// File key entered by a user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    pub fn manual_file_key(&self) -> BoardResult<Option<String>> {
        let key: Option<String> = self.read(MANUAL_FILE_KEY)?;
        Ok(key.filter(|k| !k.is_empty()))
    }

    /// Stores a user-entered file key.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    pub fn set_manual_file_key(&self, key: &str) -> BoardResult<()> {
        self.write(MANUAL_FILE_KEY, &key)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> BoardResult<Option<T>> {
        let value = self
            .ctx
            .state
            .get(key)
            .map_err(|e| BoardError::State(format!("failed to read {key}: {e}")))?;
        value
            .map(|v| {
                serde_json::from_value(v)
                    .map_err(|e| BoardError::State(format!("failed to parse {key}: {e}")))
            })
            .transpose()
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> BoardResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| BoardError::State(format!("failed to encode {key}: {e}")))?;
        self.ctx
            .state
            .set(key, value)
            .map_err(|e| BoardError::State(format!("failed to write {key}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryHost;
    use chrono::Utc;

    fn sample_item(id: &str, external_ref: &str) -> TrackedItem {
        TrackedItem::ingested(
            id.into(),
            external_ref.into(),
            "Frame".into(),
            "RESEARCH",
            "h".into(),
            "Ada",
            Utc::now(),
        )
    }

    #[test]
    fn empty_state_reads_as_defaults() {
        let host = MemoryHost::new();
        let ctx = host.context();
        let store = Store::new(&ctx);

        assert!(store.items().unwrap().is_empty());
        assert_eq!(store.columns().unwrap(), default_columns());
        assert_eq!(store.session().unwrap(), ScanSession::default());
        assert!(!store.editing_columns().unwrap());
        assert_eq!(store.manual_file_key().unwrap(), None);
    }

    #[test]
    fn replace_and_reload_items() {
        let host = MemoryHost::new();
        let ctx = host.context();
        let store = Store::new(&ctx);

        let items = vec![sample_item("item-1", "1:1"), sample_item("item-2", "1:2")];
        store.replace_items(&items).unwrap();

        assert_eq!(store.items().unwrap(), items);
        assert_eq!(store.item("item-2").unwrap().external_ref, "1:2");
        let err = store.item("nope").unwrap_err();
        assert!(matches!(err, BoardError::ItemNotFound(_)));
        assert_eq!(host.state.writes(), 1);
    }

    #[test]
    fn refuses_to_store_an_empty_column_list() {
        let host = MemoryHost::new();
        let ctx = host.context();
        let store = Store::new(&ctx);

        let err = store.replace_columns(&[]).unwrap_err();
        assert!(matches!(err, BoardError::LastColumn));
        assert_eq!(host.state.writes(), 0);
    }

    #[test]
    fn corrupt_value_surfaces_as_state_error() {
        let host = MemoryHost::new();
        host.state.seed("items", serde_json::json!({"not": "a list"}));
        let ctx = host.context();
        let store = Store::new(&ctx);

        let err = store.items().unwrap_err();
        assert!(err.to_string().contains("failed to parse items"));
    }
}
