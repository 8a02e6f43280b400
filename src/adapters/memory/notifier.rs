//! Notification capture.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::Notifier;

/// Records every toast for later assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts shown so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// The most recent toast.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().expect("notifier lock poisoned")
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
