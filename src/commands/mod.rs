//! Command dispatch and handlers.

pub mod cards;
pub mod columns;
pub mod scan;
pub mod settings;
pub mod status;

use crate::board::Board;
use crate::cli::Command;
use crate::config::BoardConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command against the board configured in the environment.
///
/// # Errors
///
/// Returns an error string if the board cannot be opened or the command
/// handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = BoardConfig::from_env();
    tracing::debug!(
        board = %config.board_path.display(),
        canvas = %config.canvas_path.display(),
        "opening board"
    );
    let mut board = Board::new(ServiceContext::live(&config)?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;
    runtime.block_on(dispatch_with_board(command, &mut board))
}

/// Dispatch a command against an already opened board.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub async fn dispatch_with_board(command: &Command, board: &mut Board) -> Result<(), String> {
    match command {
        Command::Status { json } => status::run(board, *json),
        Command::Scan => scan::run(board).await,
        Command::CancelScan => scan::cancel(board).await,
        Command::Move { item_id, direction } => cards::move_card(board, item_id, *direction).await,
        Command::Remove { item_id } => cards::remove(board, item_id).await,
        Command::Check { item_id } => cards::check(board, item_id).await,
        Command::Sweep => cards::sweep(board).await,
        Command::Link { external_ref } => cards::copy_link(board, external_ref).await,
        Command::Jump { external_ref } => cards::jump(board, external_ref).await,
        Command::Attach { item_id, url } => cards::attach(board, item_id, url.clone()).await,
        Command::ConfigureLinks { url } => settings::configure_links(board, url),
        Command::Column { action } => columns::run(board, action).await,
        Command::EditMode => settings::toggle_edit_mode(board).await,
        Command::Clear => settings::clear(board).await,
    }
}
