//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the board core and the canvas
//! host (selection, lookup, identity, notifications, replicated state,
//! dialogs) or the environment (time, ids). Implementations live in
//! `src/adapters/`.

pub mod canvas;
pub mod clock;
pub mod dialog;
pub mod id_gen;
pub mod identity;
pub mod notifier;
pub mod state;

pub use canvas::{
    Artifact, ArtifactKind, ArtifactNode, CanvasHost, Geometry, ResolveFuture, ResolveResult,
    SubscriptionId,
};
pub use clock::Clock;
pub use dialog::DialogSurface;
pub use id_gen::IdGenerator;
pub use identity::IdentityProvider;
pub use notifier::Notifier;
pub use state::ReplicatedState;
