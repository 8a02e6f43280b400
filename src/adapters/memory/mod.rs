//! In-memory adapters for driving a board without a real canvas host.
//!
//! Every adapter is a cheap cloneable handle over shared state, so a test can
//! keep one handle to poke at (delete an artifact, inspect toasts) while the
//! board owns another inside its [`ServiceContext`].

pub mod canvas;
pub mod clock;
pub mod dialog;
pub mod id_gen;
pub mod identity;
pub mod notifier;
pub mod state;

pub use canvas::MemoryCanvas;
pub use clock::SteppingClock;
pub use dialog::{MemoryDialog, ScriptedReply};
pub use id_gen::SequentialIdGenerator;
pub use identity::MemoryIdentity;
pub use notifier::MemoryNotifier;
pub use state::MemoryState;

use crate::config::DEFAULT_LINK_BASE;
use crate::context::ServiceContext;

/// A complete in-memory host: canvas, state, toasts, identity, dialog.
#[derive(Clone)]
pub struct MemoryHost {
    /// The fake canvas.
    pub canvas: MemoryCanvas,
    /// The fake replicated state.
    pub state: MemoryState,
    /// Captured notifications.
    pub notifier: MemoryNotifier,
    /// The acting user (defaults to `Ada`).
    pub identity: MemoryIdentity,
    /// Scripted dialog surface.
    pub dialog: MemoryDialog,
    /// Clock advancing one second per reading.
    pub clock: SteppingClock,
    /// Predictable id sequence.
    pub id_gen: SequentialIdGenerator,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Creates an empty host with user `Ada` and a silent dialog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            canvas: MemoryCanvas::new(),
            state: MemoryState::new(),
            notifier: MemoryNotifier::new(),
            identity: MemoryIdentity::new("Ada"),
            dialog: MemoryDialog::new(Vec::new()),
            clock: SteppingClock::new(),
            id_gen: SequentialIdGenerator::new(),
        }
    }

    /// Builds a context whose ports share state with this host.
    #[must_use]
    pub fn context(&self) -> ServiceContext {
        ServiceContext {
            clock: Box::new(self.clock.clone()),
            id_gen: Box::new(self.id_gen.clone()),
            canvas: Box::new(self.canvas.clone()),
            identity: Box::new(self.identity.clone()),
            notifier: Box::new(self.notifier.clone()),
            state: Box::new(self.state.clone()),
            dialog: Box::new(self.dialog.clone()),
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}
