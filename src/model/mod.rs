//! Board data model: tracked items, columns, and the transient scan session.
//!
//! These types are what the replicated store holds. Field names serialize in
//! camelCase so the persisted document stays readable by other collaborators.

pub mod column;
pub mod item;
pub mod session;

pub use column::{default_columns, pale_tone, Column, FALLBACK_BG};
pub use item::{HistoryEntry, TrackedItem, MISSING_MARKER};
pub use session::ScanSession;
