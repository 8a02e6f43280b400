//! Board engine: scanning, reconciliation, drift, transitions, and columns.
//!
//! Each component works on a borrowed [`crate::context::ServiceContext`] and
//! talks to the replicated state only through [`crate::store::Store`].

pub mod columns;
pub mod drift;
pub mod grouping;
pub mod hash;
pub mod reconcile;
pub mod scanner;
pub mod transition;

pub use columns::ColumnManager;
pub use drift::{DriftCheck, DriftDetector, SweepReport};
pub use grouping::group_by_column;
pub use hash::{snapshot_hash, snapshot_hash_or_sentinel, HashError, HASH_ERROR};
pub use reconcile::{ConfirmSummary, ReconciliationEngine, ResolutionStrategy};
pub use scanner::{ScanCompletion, ScanOutcome, ScanState, SelectionScanner, SelectionUpdate};
pub use transition::{move_item, Direction, MoveOutcome};
