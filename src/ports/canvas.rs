//! Canvas host port: selection events, artifact lookup, and navigation.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Outcome of an asynchronous artifact lookup.
pub type ResolveResult = Result<Option<ArtifactNode>, Box<dyn Error + Send + Sync>>;

/// Boxed future returned by [`CanvasHost::resolve_artifact`] to keep the trait dyn-compatible.
pub type ResolveFuture<'a> = Pin<Box<dyn Future<Output = ResolveResult> + Send + 'a>>;

/// Kind of a canvas artifact as reported by the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactKind {
    /// A frame.
    Frame,
    /// A section.
    Section,
    /// A component definition.
    Component,
    /// A component instance.
    Instance,
    /// A widget, including the board itself.
    Widget,
    /// Anything else (text, shapes, stickies, ...).
    #[serde(other)]
    Other,
}

impl ArtifactKind {
    /// Returns `true` for the container-like kinds a board may track.
    #[must_use]
    pub fn is_trackable(self) -> bool {
        matches!(
            self,
            Self::Frame | Self::Section | Self::Component | Self::Instance
        )
    }

    /// Stable name used as a hash input.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Section => "SECTION",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::Widget => "WIDGET",
            Self::Other => "OTHER",
        }
    }
}

/// Position and size of an artifact. Missing size reads as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Width, `0.0` when the kind has no size.
    #[serde(default)]
    pub width: f64,
    /// Height, `0.0` when the kind has no size.
    #[serde(default)]
    pub height: f64,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ArtifactNode {}
}

/// Read-only view of a canvas artifact.
///
/// Sealed: only [`ArtifactNode`] implements it, so the store and the hash
/// never depend on the host's concrete object shape.
pub trait Artifact: sealed::Sealed {
    /// Stable artifact id.
    fn id(&self) -> &str;
    /// Artifact kind.
    fn kind(&self) -> ArtifactKind;
    /// Current name, possibly empty.
    fn name(&self) -> &str;
    /// Current position and size.
    fn geometry(&self) -> Geometry;
}

/// Host-independent snapshot of one canvas artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactNode {
    /// Stable artifact id.
    pub id: String,
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Current name.
    #[serde(default)]
    pub name: String,
    /// Position and size.
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl ArtifactNode {
    /// Creates a node with the given geometry.
    #[must_use]
    pub fn new(id: &str, kind: ArtifactKind, name: &str, geometry: Geometry) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            geometry,
        }
    }
}

impl Artifact for ArtifactNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ArtifactKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }
}

/// Handle identifying one selection-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The design canvas hosting the board.
///
/// Selection changes are pushed by the host into the board, tagged with the
/// subscription they belong to; the board only holds the handle.
pub trait CanvasHost: Send + Sync {
    /// Starts delivering selection-change notifications.
    fn subscribe_selection(&self) -> SubscriptionId;

    /// Stops delivering notifications for `subscription`. Unknown ids are ignored.
    fn unsubscribe_selection(&self, subscription: SubscriptionId);

    /// The artifacts selected right now.
    fn current_selection(&self) -> Vec<ArtifactNode>;

    /// Fast, best-effort synchronous lookup. May miss artifacts on unloaded pages.
    fn find_artifact(&self, id: &str) -> Option<ArtifactNode>;

    /// Authoritative asynchronous lookup.
    ///
    /// `Ok(None)` means the artifact no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot answer the lookup.
    fn resolve_artifact<'a>(&'a self, id: &'a str) -> ResolveFuture<'a>;

    /// Moves the viewport so the artifact is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to navigate.
    fn scroll_into_view(&self, artifact: &ArtifactNode) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Key of the hosting file, when the file has been saved or published.
    fn file_key(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_container_kinds_are_trackable() {
        assert!(ArtifactKind::Frame.is_trackable());
        assert!(ArtifactKind::Section.is_trackable());
        assert!(ArtifactKind::Component.is_trackable());
        assert!(ArtifactKind::Instance.is_trackable());
        assert!(!ArtifactKind::Widget.is_trackable());
        assert!(!ArtifactKind::Other.is_trackable());
    }

    #[test]
    fn unknown_kinds_deserialize_as_other() {
        let node: ArtifactNode =
            serde_json::from_str(r#"{"id":"1:2","kind":"STICKY","name":"note","x":1,"y":2}"#)
                .unwrap();
        assert_eq!(node.kind, ArtifactKind::Other);
        assert!((node.geometry.width).abs() < f64::EPSILON);
    }
}
