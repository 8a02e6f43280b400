//! Canvas read from a YAML snapshot file.
//!
//! ```yaml
//! file_key: AbC123
//! selection: ["1:2", "1:3"]
//! artifacts:
//!   - { id: "1:2", kind: FRAME, name: Home, x: 0, y: 0, width: 1440, height: 900 }
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Deserialize;

use crate::ports::{ArtifactNode, CanvasHost, ResolveFuture, ResolveResult, SubscriptionId};

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    file_key: Option<String>,
    #[serde(default)]
    selection: Vec<String>,
    #[serde(default)]
    artifacts: Vec<ArtifactNode>,
}

#[derive(Debug, Default)]
struct Subscriptions {
    next: u64,
    active: Vec<SubscriptionId>,
}

/// A read-only canvas loaded from disk.
///
/// Every artifact in the snapshot is loaded, so both lookup forms agree.
/// Viewport navigation is reported on stdout.
#[derive(Debug, Default)]
pub struct SnapshotCanvas {
    snapshot: Snapshot,
    subscriptions: Mutex<Subscriptions>,
}

impl SnapshotCanvas {
    /// Loads the snapshot at `path`. A missing file is an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no canvas snapshot, using an empty canvas");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read canvas {}: {e}", path.display()))?;
        Self::parse(&text)
            .map_err(|e| format!("failed to parse canvas {}: {e}", path.display()))
    }

    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the document is malformed.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        let snapshot: Snapshot = if text.trim().is_empty() {
            Snapshot::default()
        } else {
            serde_yaml::from_str(text)?
        };
        Ok(Self {
            snapshot,
            subscriptions: Mutex::default(),
        })
    }

    fn subscriptions(&self) -> MutexGuard<'_, Subscriptions> {
        self.subscriptions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, id: &str) -> Option<ArtifactNode> {
        self.snapshot.artifacts.iter().find(|a| a.id == id).cloned()
    }
}

impl CanvasHost for SnapshotCanvas {
    fn subscribe_selection(&self) -> SubscriptionId {
        let mut subs = self.subscriptions();
        subs.next += 1;
        let id = SubscriptionId(subs.next);
        subs.active.push(id);
        id
    }

    fn unsubscribe_selection(&self, subscription: SubscriptionId) {
        self.subscriptions().active.retain(|s| *s != subscription);
    }

    fn current_selection(&self) -> Vec<ArtifactNode> {
        self.snapshot
            .selection
            .iter()
            .filter_map(|id| self.lookup(id))
            .collect()
    }

    fn find_artifact(&self, id: &str) -> Option<ArtifactNode> {
        self.lookup(id)
    }

    fn resolve_artifact<'a>(&'a self, id: &'a str) -> ResolveFuture<'a> {
        let found: ResolveResult = Ok(self.lookup(id));
        Box::pin(async move { found })
    }

    fn scroll_into_view(
        &self,
        artifact: &ArtifactNode,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let g = artifact.geometry;
        println!("-> {} ({}) at {}, {}", artifact.name, artifact.id, g.x, g.y);
        Ok(())
    }

    fn file_key(&self) -> Option<String> {
        self.snapshot.file_key.clone().filter(|k| !k.is_empty())
    }
}
