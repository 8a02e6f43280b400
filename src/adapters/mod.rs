//! Adapter implementations of the port traits.
//!
//! `live` backs the command-line board with files and the terminal;
//! `memory` provides shared-state fakes for tests and embedding.

pub mod live;
pub mod memory;
