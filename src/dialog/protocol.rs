//! Wire messages exchanged with the out-of-band dialog surface.
//!
//! Requests flow core -> dialog, responses dialog -> core. Both travel in an
//! envelope carrying the correlation id of the round-trip they belong to.

use serde::{Deserialize, Serialize};

/// Correlates a dialog response with the request that caused it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CorrelationId(pub u64);

/// A request posted to the dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DialogRequest {
    /// Write `text` to the clipboard.
    Copy {
        /// Text to copy.
        text: String,
    },
    /// Let the user pick a column colour, starting from `current`.
    PickColor {
        /// The column's current colour.
        current: String,
    },
    /// Ask the user for the file URL so links can carry the file key.
    ConfigureLinks,
}

impl DialogRequest {
    /// Whether the answer depends on a person acting in the dialog.
    ///
    /// Such requests have no fallback timeout; they resolve when the user
    /// answers or dismisses the dialog.
    #[must_use]
    pub fn awaits_user(&self) -> bool {
        !matches!(self, Self::Copy { .. })
    }
}

/// Result of a clipboard write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Success,
    /// The dialog could not write to the clipboard.
    Error,
}

/// A structured message sent back by the dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DialogMessage {
    /// The user picked a colour.
    SetColor {
        /// Picked colour as `#RRGGBB`.
        color: String,
    },
    /// The user pasted the file URL.
    SetFileUrl {
        /// Raw URL as pasted.
        url: String,
    },
}

/// Anything the dialog can answer with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DialogResponse {
    /// Bare `"success"` / `"error"` answer to a copy request.
    Copy(CopyOutcome),
    /// Structured message.
    Message(DialogMessage),
}

/// A request tagged with its correlation id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestEnvelope {
    /// Correlation id of this round-trip.
    pub id: CorrelationId,
    /// The request itself.
    pub payload: DialogRequest,
}

/// A response tagged with the correlation id of the request it answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// Correlation id copied from the request.
    pub id: CorrelationId,
    /// The response itself.
    pub payload: DialogResponse,
}
