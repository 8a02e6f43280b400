//! Persisted view of an in-progress selection scan.

use serde::{Deserialize, Serialize};

/// Transient scan state mirrored into the replicated store.
///
/// The ref list survives a lost live buffer, which is what the persisted-ref
/// resolution tier on confirm relies on. It is not history-tracked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScanSession {
    /// Whether a scan is in progress.
    pub active: bool,
    /// Artifact ids currently picked, in selection order, without duplicates.
    pub buffered_refs: Vec<String>,
    /// Number of picked artifacts.
    pub count: usize,
}

impl ScanSession {
    /// A freshly opened scan with nothing picked yet.
    #[must_use]
    pub fn opened() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Returns an active session holding `refs`, dropping repeated ids.
    #[must_use]
    pub fn with_refs<I>(refs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut buffered_refs: Vec<String> = Vec::new();
        for r in refs {
            if !buffered_refs.contains(&r) {
                buffered_refs.push(r);
            }
        }
        let count = buffered_refs.len();
        Self {
            active: true,
            buffered_refs,
            count,
        }
    }
}
