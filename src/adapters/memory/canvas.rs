//! In-memory canvas.

use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::canvas::{
    ArtifactKind, ArtifactNode, CanvasHost, Geometry, ResolveFuture, ResolveResult, SubscriptionId,
};

#[derive(Debug, Default)]
struct Inner {
    artifacts: BTreeMap<String, ArtifactNode>,
    selection: Vec<String>,
    active: Vec<SubscriptionId>,
    next_subscription: u64,
    unloaded: HashSet<String>,
    navigated: Vec<String>,
    file_key: Option<String>,
    lookups_fail: bool,
}

/// A canvas whose artifacts and selection are set directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryCanvas {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a frame named `name` at the given position and returns it.
    pub fn add_frame(&self, id: &str, name: &str, x: f64, y: f64) -> ArtifactNode {
        let node = ArtifactNode::new(
            id,
            ArtifactKind::Frame,
            name,
            Geometry {
                x,
                y,
                width: 1440.0,
                height: 900.0,
            },
        );
        self.insert(node.clone());
        node
    }

    /// Adds or replaces an artifact.
    pub fn insert(&self, node: ArtifactNode) {
        self.lock().artifacts.insert(node.id.clone(), node);
    }

    /// Deletes an artifact from the canvas.
    pub fn remove(&self, id: &str) {
        self.lock().artifacts.remove(id);
    }

    /// Renames an artifact in place.
    pub fn rename(&self, id: &str, name: &str) {
        if let Some(node) = self.lock().artifacts.get_mut(id) {
            node.name = name.to_string();
        }
    }

    /// Moves an artifact in place.
    pub fn move_to(&self, id: &str, x: f64, y: f64) {
        if let Some(node) = self.lock().artifacts.get_mut(id) {
            node.geometry.x = x;
            node.geometry.y = y;
        }
    }

    /// Replaces the current selection; unknown ids are skipped.
    pub fn select(&self, ids: &[&str]) {
        self.lock().selection = ids.iter().map(|s| (*s).to_string()).collect();
    }

    /// The nodes currently selected, in selection order.
    #[must_use]
    pub fn selected_nodes(&self) -> Vec<ArtifactNode> {
        let inner = self.lock();
        inner
            .selection
            .iter()
            .filter_map(|id| inner.artifacts.get(id).cloned())
            .collect()
    }

    /// Makes the synchronous lookup miss `id` while the async one still finds it.
    pub fn unload(&self, id: &str) {
        self.lock().unloaded.insert(id.to_string());
    }

    /// Makes every async lookup fail.
    pub fn fail_lookups(&self) {
        self.lock().lookups_fail = true;
    }

    /// Sets the host file key.
    pub fn set_file_key(&self, key: &str) {
        self.lock().file_key = Some(key.to_string());
    }

    /// Subscriptions currently installed.
    #[must_use]
    pub fn active_subscriptions(&self) -> Vec<SubscriptionId> {
        self.lock().active.clone()
    }

    /// Ids the viewport was moved to, oldest first.
    #[must_use]
    pub fn navigated(&self) -> Vec<String> {
        self.lock().navigated.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("canvas lock poisoned")
    }
}

impl CanvasHost for MemoryCanvas {
    fn subscribe_selection(&self) -> SubscriptionId {
        let mut inner = self.lock();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.active.push(id);
        id
    }

    fn unsubscribe_selection(&self, subscription: SubscriptionId) {
        self.lock().active.retain(|s| *s != subscription);
    }

    fn current_selection(&self) -> Vec<ArtifactNode> {
        self.selected_nodes()
    }

    fn find_artifact(&self, id: &str) -> Option<ArtifactNode> {
        let inner = self.lock();
        if inner.unloaded.contains(id) {
            return None;
        }
        inner.artifacts.get(id).cloned()
    }

    fn resolve_artifact<'a>(&'a self, id: &'a str) -> ResolveFuture<'a> {
        let inner = self.lock();
        let result: ResolveResult = if inner.lookups_fail {
            Err("canvas lookup failed".into())
        } else {
            Ok(inner.artifacts.get(id).cloned())
        };
        drop(inner);
        Box::pin(async move { result })
    }

    fn scroll_into_view(
        &self,
        artifact: &ArtifactNode,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lock().navigated.push(artifact.id.clone());
        Ok(())
    }

    fn file_key(&self) -> Option<String> {
        self.lock().file_key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unloaded_artifacts_only_resolve_asynchronously() {
        let canvas = MemoryCanvas::new();
        canvas.add_frame("1:1", "Home", 0.0, 0.0);
        canvas.unload("1:1");

        assert!(canvas.find_artifact("1:1").is_none());
        assert!(canvas.resolve_artifact("1:1").await.unwrap().is_some());
    }

    #[test]
    fn subscriptions_are_tracked() {
        let canvas = MemoryCanvas::new();
        let a = canvas.subscribe_selection();
        let b = canvas.subscribe_selection();
        canvas.unsubscribe_selection(a);
        assert_eq!(canvas.active_subscriptions(), vec![b]);
    }
}
