//! Reconciliation: turning a confirmed scan into tracked items.
//!
//! Artifacts are resolved in two explicit tiers. The live buffer is used
//! when it holds anything; otherwise the refs persisted in the scan session
//! are looked up one by one. Resolved artifacts that are already tracked
//! (or appear twice in the batch) are counted and skipped.

use std::collections::HashSet;

use crate::context::ServiceContext;
use crate::error::{BoardError, BoardResult};
use crate::model::TrackedItem;
use crate::ports::ArtifactNode;
use crate::store::Store;

use super::hash::snapshot_hash_or_sentinel;

/// Where the artifacts for a confirm came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// The scanner's in-process buffer.
    LiveBuffer,
    /// The ref list persisted in the scan session, resolved by id.
    PersistedRefs,
}

/// What a confirm did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmSummary {
    /// Items created.
    pub added: usize,
    /// Resolved artifacts skipped because they were already tracked.
    pub duplicates: usize,
    /// The tier that produced the artifacts.
    pub strategy: ResolutionStrategy,
}

impl ConfirmSummary {
    /// Toast describing the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        if self.added > 0 {
            let plural = if self.added == 1 { "" } else { "s" };
            format!("Added {} item{plural}", self.added)
        } else if self.duplicates > 0 {
            "All selected items are already tracked.".to_string()
        } else {
            "No valid items selected.".to_string()
        }
    }
}

/// Creates tracked items from scan results.
pub struct ReconciliationEngine<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconciliationEngine<'a> {
    /// Creates an engine over `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolves artifacts with one specific tier.
    ///
    /// `LiveBuffer` returns the buffer as is; `PersistedRefs` looks up each
    /// persisted ref with the host's synchronous lookup and drops misses.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted session cannot be read.
    pub fn resolve(
        &self,
        strategy: ResolutionStrategy,
        buffer: &[ArtifactNode],
    ) -> BoardResult<Vec<ArtifactNode>> {
        match strategy {
            ResolutionStrategy::LiveBuffer => Ok(buffer.to_vec()),
            ResolutionStrategy::PersistedRefs => {
                let session = Store::new(self.ctx).session()?;
                Ok(session
                    .buffered_refs
                    .iter()
                    .filter_map(|id| self.ctx.canvas.find_artifact(id))
                    .collect())
            }
        }
    }

    /// Confirms a scan, appending new items in one store write.
    ///
    /// New items land in the first column with a fresh snapshot hash and a
    /// single creation history entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySelection`] when neither tier resolves any
    /// artifact (the store is left untouched), or a state error.
    pub fn confirm(&self, buffer: &[ArtifactNode]) -> BoardResult<ConfirmSummary> {
        let (strategy, artifacts) = if buffer.is_empty() {
            let strategy = ResolutionStrategy::PersistedRefs;
            (strategy, self.resolve(strategy, buffer)?)
        } else {
            let strategy = ResolutionStrategy::LiveBuffer;
            (strategy, self.resolve(strategy, buffer)?)
        };
        if artifacts.is_empty() {
            return Err(BoardError::EmptySelection);
        }

        let store = Store::new(self.ctx);
        let mut items = store.items()?;
        let first_column = store
            .columns()?
            .into_iter()
            .next()
            .ok_or(BoardError::LastColumn)?;

        let user = self.ctx.current_user();
        let now = self.ctx.clock.now();
        let mut tracked: HashSet<String> = items.iter().map(|i| i.external_ref.clone()).collect();
        let mut added = Vec::new();
        let mut duplicates = 0;

        for artifact in &artifacts {
            if !tracked.insert(artifact.id.clone()) {
                duplicates += 1;
                continue;
            }
            let name = if artifact.name.is_empty() {
                "Untitled".to_string()
            } else {
                artifact.name.clone()
            };
            added.push(TrackedItem::ingested(
                format!("item-{}", self.ctx.id_gen.generate_id()),
                artifact.id.clone(),
                name,
                &first_column.id,
                snapshot_hash_or_sentinel(artifact),
                &user,
                now,
            ));
        }

        let summary = ConfirmSummary {
            added: added.len(),
            duplicates,
            strategy,
        };
        if !added.is_empty() {
            items.extend(added);
            store.replace_items(&items)?;
        }
        tracing::info!(
            added = summary.added,
            duplicates = summary.duplicates,
            ?strategy,
            "scan confirmed"
        );
        Ok(summary)
    }
}
