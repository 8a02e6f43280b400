//! Column definitions and colour helpers.

use serde::{Deserialize, Serialize};

/// Background used when a colour cannot be parsed.
pub const FALLBACK_BG: &str = "#F3F4F6";

/// An ordered status bucket. Order is the position in the column list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique column id, referenced by `TrackedItem::status`.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Accent colour as `#RRGGBB`.
    pub color: String,
    /// Pale background colour as `#RRGGBB`.
    pub bg_color: String,
}

impl Column {
    /// Creates a column from its parts.
    #[must_use]
    pub fn new(id: &str, label: &str, color: &str, bg_color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            bg_color: bg_color.to_string(),
        }
    }
}

/// The five columns a new board starts with.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("RESEARCH", "🟣 Research", "#9333EA", "#F3E8FF"),
        Column::new("EXPLORATION", "🔵 Exploration", "#2563EB", "#DBEAFE"),
        Column::new("IN_REVIEW", "🟠 In Review", "#EA580C", "#FFEDD5"),
        Column::new("READY_FOR_DEV", "🟢 Ready for Dev", "#16A34A", "#DCFCE7"),
        Column::new("ARCHIVED", "⚫ Archived", "#6B7280", "#F3F4F6"),
    ]
}

/// Derives a pale background tone by mixing `hex` 90% with white.
///
/// Anything that is not a `#RRGGBB` colour yields [`FALLBACK_BG`].
#[must_use]
pub fn pale_tone(hex: &str) -> String {
    let Some(digits) = hex.strip_prefix('#') else {
        return FALLBACK_BG.to_string();
    };
    if digits.len() < 6 || !digits.is_ascii() {
        return FALLBACK_BG.to_string();
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) else {
        return FALLBACK_BG.to_string();
    };

    let mix = |c: u8| -> u8 {
        let c = f64::from(c);
        // Always within 0..=255, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mixed = (c + (255.0 - c) * 0.9).round() as u8;
        mixed
    };
    format!("#{}", hex::encode_upper([mix(r), mix(g), mix(b)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_has_five_unique_columns() {
        let columns = default_columns();
        assert_eq!(columns.len(), 5);
        let mut ids: Vec<_> = columns.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(columns[0].id, "RESEARCH");
    }

    #[test]
    fn pale_tone_mixes_towards_white() {
        assert_eq!(pale_tone("#000000"), "#E6E6E6");
        assert_eq!(pale_tone("#FFFFFF"), "#FFFFFF");
        assert_eq!(pale_tone("#2563EB"), "#E9EFFD");
    }

    #[test]
    fn pale_tone_falls_back_on_malformed_input() {
        assert_eq!(pale_tone(""), FALLBACK_BG);
        assert_eq!(pale_tone("#12"), FALLBACK_BG);
        assert_eq!(pale_tone("#GGGGGG"), FALLBACK_BG);
        assert_eq!(pale_tone("2563EB"), FALLBACK_BG);
    }
}
