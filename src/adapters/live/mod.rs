//! Live adapters backing the command-line board.
//!
//! The canvas is a YAML snapshot on disk, the replicated state is a JSON
//! document, and toasts and dialogs go to the terminal.

pub mod canvas;
pub mod dialog;
pub mod identity;
pub mod notifier;
pub mod state;
pub mod system;
