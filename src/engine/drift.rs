//! Drift detection: keeping tracked items honest as artifacts change.
//!
//! Two operations with deliberately different reach:
//!
//! - [`DriftDetector::check_item`] recomputes the snapshot hash of one item
//!   and syncs both name and hash. A missing artifact is only reported.
//! - [`DriftDetector::sweep`] walks every item, marks missing ones and
//!   follows renames. It never recomputes hashes.
//!
//! Neither appends history: drift sync is not a status transition.

use crate::context::ServiceContext;
use crate::error::{BoardError, BoardResult};
use crate::store::Store;

use super::hash::snapshot_hash_or_sentinel;

/// Result of a single-item check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftCheck {
    /// The artifact no longer exists; nothing was changed.
    Missing,
    /// Name or hash differed and the item was updated.
    Synced,
    /// Name and hash match the artifact.
    InSync,
}

impl DriftCheck {
    /// Toast describing the result.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Missing => "⚠️ Frame is missing (deleted?)",
            Self::Synced => "✅ Frame synced",
            Self::InSync => "✅ Frame is in sync",
        }
    }
}

/// What a sweep changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Ids of items newly marked missing.
    pub marked_missing: Vec<String>,
    /// Ids of items whose name followed a rename.
    pub renamed: Vec<String>,
}

impl SweepReport {
    /// Returns `true` if the sweep changed nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.marked_missing.is_empty() && self.renamed.is_empty()
    }

    /// Toast describing the sweep.
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_clean() {
            return "All frames are healthy".to_string();
        }
        format!(
            "{} missing, {} renamed",
            self.marked_missing.len(),
            self.renamed.len()
        )
    }
}

/// Compares tracked items with the live canvas.
pub struct DriftDetector<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DriftDetector<'a> {
    /// Creates a detector over `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Checks one item against its artifact.
    ///
    /// When the hash or the name differs, updates name, hash, and the
    /// last-modified stamp. A missing artifact leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] for an unknown item,
    /// [`BoardError::Canvas`] if the lookup fails, or a state error.
    pub async fn check_item(&self, item_id: &str) -> BoardResult<DriftCheck> {
        let store = Store::new(self.ctx);
        let mut items = store.items()?;
        let index = items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;

        let external_ref = items[index].external_ref.clone();
        let Some(artifact) = self
            .ctx
            .canvas
            .resolve_artifact(&external_ref)
            .await
            .map_err(|e| BoardError::Canvas(e.to_string()))?
        else {
            tracing::info!(item = item_id, artifact = %external_ref, "tracked artifact missing");
            return Ok(DriftCheck::Missing);
        };

        let current_hash = snapshot_hash_or_sentinel(&artifact);
        let item = &mut items[index];
        if current_hash == item.snapshot_hash && artifact.name == item.display_name {
            return Ok(DriftCheck::InSync);
        }

        item.display_name = artifact.name;
        item.snapshot_hash = current_hash;
        item.last_modified_by = self.ctx.current_user();
        item.last_modified_at = self.ctx.clock.now();
        store.replace_items(&items)?;
        tracing::info!(item = item_id, "item synced with artifact");
        Ok(DriftCheck::Synced)
    }

    /// Sweeps every item, marking missing artifacts and following renames.
    ///
    /// Already-marked items are left alone, so a second sweep over an
    /// unchanged canvas writes nothing. All changes land in one write.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Canvas`] if any lookup fails, in which case
    /// nothing is written, or a state error.
    pub async fn sweep(&self) -> BoardResult<SweepReport> {
        let store = Store::new(self.ctx);
        let mut items = store.items()?;
        let mut report = SweepReport::default();

        for item in &mut items {
            let artifact = self
                .ctx
                .canvas
                .resolve_artifact(&item.external_ref)
                .await
                .map_err(|e| BoardError::Canvas(e.to_string()))?;
            match artifact {
                None if !item.is_marked_missing() => {
                    item.display_name = item.missing_name();
                    report.marked_missing.push(item.id.clone());
                }
                Some(live) if live.name != item.display_name && !item.is_marked_missing() => {
                    item.display_name = live.name;
                    report.renamed.push(item.id.clone());
                }
                _ => {}
            }
        }

        if !report.is_clean() {
            store.replace_items(&items)?;
        }
        tracing::info!(
            missing = report.marked_missing.len(),
            renamed = report.renamed.len(),
            "health sweep finished"
        );
        Ok(report)
    }
}
