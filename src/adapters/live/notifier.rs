//! Toasts printed to stdout.

use crate::ports::Notifier;

/// Prints every notification on its own line.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        tracing::debug!(message, "notification");
        println!("{message}");
    }
}
