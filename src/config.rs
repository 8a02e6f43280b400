//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so every variable below
//! can live there as well.
//!
//! | Variable | Default |
//! |---|---|
//! | `FRAMELOG_BOARD` | `.framelog/board.json` |
//! | `FRAMELOG_CANVAS` | `.framelog/canvas.yaml` |
//! | `FRAMELOG_USER` | unset (identity reads as denied) |
//! | `FRAMELOG_LINK_BASE` | `https://www.figma.com/file` |

use std::path::PathBuf;

/// Default location of the replicated board document.
pub const DEFAULT_BOARD_PATH: &str = ".framelog/board.json";
/// Default location of the canvas snapshot.
pub const DEFAULT_CANVAS_PATH: &str = ".framelog/canvas.yaml";
/// Default base URL for artifact deep links.
pub const DEFAULT_LINK_BASE: &str = "https://www.figma.com/file";

/// Paths and identity used by the live adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// JSON file holding the replicated board state.
    pub board_path: PathBuf,
    /// YAML file describing the canvas the board sits on.
    pub canvas_path: PathBuf,
    /// Acting user, `None` when the identity is unavailable.
    pub user: Option<String>,
    /// Base URL for artifact deep links.
    pub link_base: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_path: PathBuf::from(DEFAULT_BOARD_PATH),
            canvas_path: PathBuf::from(DEFAULT_CANVAS_PATH),
            user: None,
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

impl BoardConfig {
    /// Reads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            board_path: non_empty("FRAMELOG_BOARD").map_or(defaults.board_path, PathBuf::from),
            canvas_path: non_empty("FRAMELOG_CANVAS").map_or(defaults.canvas_path, PathBuf::from),
            user: non_empty("FRAMELOG_USER"),
            link_base: non_empty("FRAMELOG_LINK_BASE").unwrap_or(defaults.link_base),
        }
    }
}
