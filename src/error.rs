//! Error taxonomy for board actions.

use thiserror::Error;

/// Failures a board action can run into.
///
/// None of these escape [`crate::board::Board::dispatch`]; each one ends up
/// as a notification so the host's interaction always completes.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The host refused to reveal who is acting.
    #[error("permission denied reading user identity: {0}")]
    PermissionDenied(String),

    /// A tracked artifact could not be found on the canvas.
    #[error("artifact {external_ref} could not be resolved")]
    ArtifactUnresolvable {
        /// Id of the artifact that was looked up.
        external_ref: String,
    },

    /// A scan was confirmed but nothing could be resolved.
    #[error("no items selected (selection might have been lost)")]
    EmptySelection,

    /// Deleting the column would leave the board without columns.
    #[error("cannot delete the last column")]
    LastColumn,

    /// No tracked item has the given id.
    #[error("item {0} not found")]
    ItemNotFound(String),

    /// No column has the given id.
    #[error("column {0} not found")]
    ColumnNotFound(String),

    /// The replicated state could not be read or written.
    #[error("board state error: {0}")]
    State(String),

    /// The canvas host failed to answer.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// The dialog round-trip failed.
    #[error("dialog error: {0}")]
    Dialog(String),
}

/// Convenience alias for results of board operations.
pub type BoardResult<T> = Result<T, BoardError>;
