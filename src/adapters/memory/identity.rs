//! Switchable identity.

use std::error::Error;
use std::sync::{Arc, Mutex};

use crate::ports::IdentityProvider;

/// Returns a fixed name until [`MemoryIdentity::deny`] is called.
#[derive(Debug, Clone)]
pub struct MemoryIdentity {
    name: Arc<Mutex<Option<String>>>,
}

impl MemoryIdentity {
    /// Creates an identity answering `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::new(Mutex::new(Some(name.to_string()))),
        }
    }

    /// Makes every later lookup fail with a permission error.
    pub fn deny(&self) {
        *self.name.lock().expect("identity lock poisoned") = None;
    }
}

impl IdentityProvider for MemoryIdentity {
    fn current_user(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.name
            .lock()
            .expect("identity lock poisoned")
            .clone()
            .ok_or_else(|| "permission denied: currentuser".into())
    }
}
