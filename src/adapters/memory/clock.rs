//! Deterministic clock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

/// Starts at 2024-01-01T00:00:00Z and advances one second per reading.
#[derive(Debug, Clone, Default)]
pub struct SteppingClock {
    ticks: Arc<AtomicI64>,
}

impl SteppingClock {
    /// Creates a clock at its starting instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(1_704_067_200 + tick, 0)
            .single()
            .unwrap_or_default()
    }
}
