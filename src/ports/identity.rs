//! Identity port for the collaborator performing an action.

use std::error::Error;

/// Reports who is using the board.
///
/// Reading the identity can fail (the host may deny the permission), so
/// callers must be ready to degrade to a placeholder name.
pub trait IdentityProvider: Send + Sync {
    /// Returns the current user's display name.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses to reveal the identity.
    fn current_user(&self) -> Result<String, Box<dyn Error + Send + Sync>>;
}
