//! Tracked items and their append-only history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix glyph placed on the name of a card whose artifact disappeared.
pub const MISSING_MARKER: &str = "🚫";

/// One status transition in an item's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Column the item left, `None` for the creation entry.
    pub from: Option<String>,
    /// Column the item entered.
    pub to: String,
    /// Who performed the transition.
    pub by: String,
    /// When the transition happened.
    pub at: DateTime<Utc>,
    /// Snapshot hash at the time of the transition.
    pub snapshot: String,
}

/// A durable record for one monitored canvas artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
    /// Opaque unique record id.
    pub id: String,
    /// Id of the canvas artifact this record tracks.
    pub external_ref: String,
    /// Name shown on the card.
    pub display_name: String,
    /// Id of the column the item sits in.
    pub status: String,
    /// Fingerprint of the artifact's tracked attributes.
    pub snapshot_hash: String,
    /// Who added the item.
    pub added_by: String,
    /// When the item was added.
    pub added_at: DateTime<Utc>,
    /// Who last changed the item.
    pub last_modified_by: String,
    /// When the item was last changed.
    pub last_modified_at: DateTime<Utc>,
    /// Optional link to an issue tracker or spec document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Status transitions, oldest first.
    pub history: Vec<HistoryEntry>,
}

impl TrackedItem {
    /// Creates a freshly ingested item sitting in `column_id`.
    ///
    /// The history starts with a single creation entry whose `from` is `None`.
    #[must_use]
    pub fn ingested(
        id: String,
        external_ref: String,
        display_name: String,
        column_id: &str,
        snapshot_hash: String,
        by: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let history = vec![HistoryEntry {
            from: None,
            to: column_id.to_string(),
            by: by.to_string(),
            at,
            snapshot: snapshot_hash.clone(),
        }];
        Self {
            id,
            external_ref,
            display_name,
            status: column_id.to_string(),
            snapshot_hash,
            added_by: by.to_string(),
            added_at: at,
            last_modified_by: by.to_string(),
            last_modified_at: at,
            external_link: None,
            history,
        }
    }

    /// Returns `true` if the card name already carries the missing marker.
    #[must_use]
    pub fn is_marked_missing(&self) -> bool {
        self.display_name.contains(MISSING_MARKER)
    }

    /// Returns the name this item should carry once marked missing.
    ///
    /// Already-marked names are returned unchanged so marking never stacks.
    #[must_use]
    pub fn missing_name(&self) -> String {
        if self.is_marked_missing() {
            self.display_name.clone()
        } else {
            format!("{MISSING_MARKER} {} (Missing)", self.display_name)
        }
    }
}
