//! Predictable id sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::ports::IdGenerator;

/// Yields `id-1`, `id-2`, ... shared across clones.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: Arc<AtomicU64>,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at `id-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{n}")
    }
}
