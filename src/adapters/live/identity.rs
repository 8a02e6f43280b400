//! Identity from configuration.

use std::error::Error;

use crate::ports::IdentityProvider;

/// Reports the user named by `FRAMELOG_USER`.
///
/// Without a configured name the identity is treated as withheld, the same
/// way a canvas host denies the permission.
pub struct EnvIdentity {
    user: Option<String>,
}

impl EnvIdentity {
    /// Creates an identity for `user`.
    #[must_use]
    pub fn new(user: Option<String>) -> Self {
        Self { user }
    }
}

impl IdentityProvider for EnvIdentity {
    fn current_user(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.user.clone().ok_or_else(|| "FRAMELOG_USER is not set".into())
    }
}
