//! Link text for cards and file-key extraction from pasted URLs.

use std::sync::LazyLock;

use regex::Regex;

static FILE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:file|design)/([a-zA-Z0-9]+)").expect("file key pattern is valid")
});

/// Extracts the file key embedded in a canvas file URL.
///
/// Accepts both `/file/<key>` and `/design/<key>` URL shapes.
#[must_use]
pub fn extract_file_key(url: &str) -> Option<String> {
    FILE_KEY
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// What ends up on the clipboard for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    /// Text to copy.
    pub text: String,
    /// Toast shown once the copy succeeded.
    pub success_message: &'static str,
}

/// Builds the copy target for `external_ref`.
///
/// With a file key the target is a deep link; without one (unsaved or
/// unpublished file) only the bare artifact id can be copied.
#[must_use]
pub fn copy_target(link_base: &str, file_key: Option<&str>, external_ref: &str) -> CopyTarget {
    match file_key {
        Some(key) if !key.is_empty() => CopyTarget {
            text: format!(
                "{}/{key}?node-id={}",
                link_base.trim_end_matches('/'),
                external_ref.replace(':', "-")
            ),
            success_message: "Link copied to clipboard 🔗",
        },
        _ => CopyTarget {
            text: external_ref.to_string(),
            success_message: "Copied artifact id (file not published/saved)",
        },
    }
}

/// Tracker a card's external link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkProvider {
    /// Jira issue.
    Jira,
    /// Linear issue.
    Linear,
    /// GitHub issue or PR.
    GitHub,
    /// GitLab issue or MR.
    GitLab,
    /// Anything else.
    Generic,
}

impl LinkProvider {
    /// Classifies `url` by the tracker it mentions.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("jira") {
            Self::Jira
        } else if url.contains("linear") {
            Self::Linear
        } else if url.contains("github") {
            Self::GitHub
        } else if url.contains("gitlab") {
            Self::GitLab
        } else {
            Self::Generic
        }
    }

    /// Glyph shown next to the link on a card.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Jira => "🔵",
            Self::Linear => "◆",
            Self::GitHub => "🐙",
            Self::GitLab => "🦊",
            Self::Generic => "🔗",
        }
    }
}
