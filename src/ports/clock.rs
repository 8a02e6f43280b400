//! Clock port for stamping history entries and modifications.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Tests substitute a fixed clock so timestamps on items are predictable.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
