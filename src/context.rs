//! Service context bundling all port trait objects.

use crate::config::BoardConfig;
use crate::ports::{
    CanvasHost, Clock, DialogSurface, IdGenerator, IdentityProvider, Notifier, ReplicatedState,
};

/// Placeholder name used when the host will not reveal the user.
pub const UNKNOWN_USER: &str = "Unknown";

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live or in-memory).
pub struct ServiceContext {
    /// Clock for stamping records.
    pub clock: Box<dyn Clock>,
    /// ID generator for item and column ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// The canvas hosting the board.
    pub canvas: Box<dyn CanvasHost>,
    /// Who is acting.
    pub identity: Box<dyn IdentityProvider>,
    /// Toast surface.
    pub notifier: Box<dyn Notifier>,
    /// Replicated board state.
    pub state: Box<dyn ReplicatedState>,
    /// Out-of-band dialog surface.
    pub dialog: Box<dyn DialogSurface>,
    /// Base URL for deep links to artifacts.
    pub link_base: String,
}

impl ServiceContext {
    /// Creates a live context backed by the files named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas snapshot cannot be loaded.
    pub fn live(config: &BoardConfig) -> Result<Self, String> {
        use crate::adapters::live::canvas::SnapshotCanvas;
        use crate::adapters::live::dialog::ConsoleDialog;
        use crate::adapters::live::identity::EnvIdentity;
        use crate::adapters::live::notifier::ConsoleNotifier;
        use crate::adapters::live::state::FileState;
        use crate::adapters::live::system::{SystemClock, UuidGenerator};

        Ok(Self {
            clock: Box::new(SystemClock),
            id_gen: Box::new(UuidGenerator),
            canvas: Box::new(SnapshotCanvas::load(&config.canvas_path)?),
            identity: Box::new(EnvIdentity::new(config.user.clone())),
            notifier: Box::new(ConsoleNotifier),
            state: Box::new(FileState::new(&config.board_path)),
            dialog: Box::new(ConsoleDialog),
            link_base: config.link_base.clone(),
        })
    }

    /// Returns the acting user's name, degrading to [`UNKNOWN_USER`].
    ///
    /// A permission failure is logged and never aborts the action.
    #[must_use]
    pub fn current_user(&self) -> String {
        match self.identity.current_user() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => UNKNOWN_USER.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "permission error reading current user");
                UNKNOWN_USER.to_string()
            }
        }
    }
}
