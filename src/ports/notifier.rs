//! Notification port for transient user-facing messages.

use std::time::Duration;

/// Shows short-lived toasts to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message` with the host's default timeout.
    fn notify(&self, message: &str);

    /// Shows `message` for roughly `timeout`.
    ///
    /// Hosts without timeout control fall back to [`Notifier::notify`].
    fn notify_for(&self, message: &str, timeout: Duration) {
        let _ = timeout;
        self.notify(message);
    }
}
