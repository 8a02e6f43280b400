//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::Direction;

/// Top-level CLI parser for `framelog`.
#[derive(Debug, Parser)]
#[command(name = "framelog", version, about = "Track canvas frame review status")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Direction argument for moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Towards {
    /// One column to the left.
    Prev,
    /// One column to the right.
    Next,
}

impl From<Towards> for Direction {
    fn from(towards: Towards) -> Self {
        match towards {
            Towards::Prev => Self::Prev,
            Towards::Next => Self::Next,
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the board grouped by column.
    Status {
        /// Print the board as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add the frames selected in the canvas snapshot.
    Scan,
    /// Cancel an open scan session.
    CancelScan,
    /// Move a card one column.
    Move {
        /// Card id.
        item_id: String,
        /// Which way to move.
        #[arg(value_enum)]
        direction: Towards,
    },
    /// Remove a card.
    Remove {
        /// Card id.
        item_id: String,
    },
    /// Check one card against its frame.
    Check {
        /// Card id.
        item_id: String,
    },
    /// Check every card, marking missing frames and following renames.
    Sweep,
    /// Copy a deep link to a frame.
    Link {
        /// Frame id, e.g. `12:34`.
        external_ref: String,
    },
    /// Navigate to a frame.
    Jump {
        /// Frame id.
        external_ref: String,
    },
    /// Attach an issue or doc link to a card; omit the URL to detach.
    Attach {
        /// Card id.
        item_id: String,
        /// Link target.
        url: Option<String>,
    },
    /// Store the file key used in deep links, taken from a file URL.
    ConfigureLinks {
        /// URL of the canvas file.
        url: String,
    },
    /// Manage columns.
    Column {
        /// Column action.
        #[command(subcommand)]
        action: ColumnAction,
    },
    /// Toggle column edit mode.
    EditMode,
    /// Remove every card.
    Clear,
}

/// Column subcommands.
#[derive(Debug, Subcommand)]
pub enum ColumnAction {
    /// Append a new column.
    Add,
    /// Swap a column with its neighbour.
    Move {
        /// Column id.
        column_id: String,
        /// Which neighbour to swap with.
        #[arg(value_enum)]
        direction: Towards,
    },
    /// Rename a column.
    Rename {
        /// Column id.
        column_id: String,
        /// New label.
        label: String,
    },
    /// Change a column's colour.
    Recolor {
        /// Column id.
        column_id: String,
        /// Colour as `#RRGGBB`.
        color: String,
    },
    /// Delete a column.
    Delete {
        /// Column id.
        column_id: String,
    },
}
