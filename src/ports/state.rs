//! Replicated key-value state port.

use std::error::Error;

use serde_json::Value;

/// Persisted state shared with every collaborator viewing the canvas.
///
/// Each key holds one JSON value that is always replaced whole; replication
/// is last-write-wins per value, with no field-level merge.
pub trait ReplicatedState: Send + Sync {
    /// Reads the value stored under `key`, `None` if never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>, Box<dyn Error + Send + Sync>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: Value) -> Result<(), Box<dyn Error + Send + Sync>>;
}
