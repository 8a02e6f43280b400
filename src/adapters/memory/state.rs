//! In-memory replicated state.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::ports::ReplicatedState;

#[derive(Debug, Default)]
struct Inner {
    values: BTreeMap<String, Value>,
    writes: usize,
}

/// Key-value state kept in memory, counting writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` without counting it as a write.
    pub fn seed(&self, key: &str, value: Value) {
        self.lock().values.insert(key.to_string(), value);
    }

    /// Number of `set` calls made through the port.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// Raw value under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<Value> {
        self.lock().values.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("state lock poisoned")
    }
}

impl ReplicatedState for MemoryState {
    fn get(&self, key: &str) -> Result<Option<Value>, Box<dyn Error + Send + Sync>> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut inner = self.lock();
        inner.values.insert(key.to_string(), value);
        inner.writes += 1;
        Ok(())
    }
}
