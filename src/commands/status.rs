//! `framelog status` command.

use crate::board::{Board, BoardView};

/// Execute the `status` command.
///
/// Prints every column with its cards, or the whole render model as JSON.
///
/// # Errors
///
/// Returns an error string if the board cannot be read.
pub fn run(board: &Board, json: bool) -> Result<(), String> {
    let view = board.view().map_err(|e| e.to_string())?;
    if json {
        let text = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print!("{}", render(&view));
    }
    Ok(())
}

const EMPTY_HINT: &str = "No frames tracked. Run `framelog scan` to add the selected frames.\n";

/// Renders the board as plain text.
#[must_use]
pub fn render(view: &BoardView) -> String {
    let mut out = String::new();
    if view.scanning {
        out.push_str(&format!("Scanning: {} selected\n", view.scan_count));
    }
    let cards = view.columns.iter().map(|c| c.cards.len()).sum::<usize>();
    if cards == 0 {
        out.push_str(EMPTY_HINT);
    }

    let id_width = view
        .columns
        .iter()
        .flat_map(|c| c.cards.iter().map(|card| card.id.len()))
        .max()
        .unwrap_or(2)
        .max(2);
    for column in &view.columns {
        let header = &column.column;
        let count = column.cards.len();
        out.push_str(&format!("\n{} ({count})  [{}]\n", header.label, header.id));
        for card in &column.cards {
            out.push_str(&format!("  {:<id_width$}  {}", card.id, card.name));
            if let (Some(glyph), Some(link)) = (card.link_glyph, &card.link) {
                out.push_str(&format!("  {glyph} {link}"));
            }
            out.push('\n');
        }
    }
    out.push_str(&format!("\n{cards} card(s) total.\n"));
    out
}
