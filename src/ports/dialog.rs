//! Out-of-band dialog surface port.

use std::error::Error;

use crate::dialog::protocol::RequestEnvelope;
use crate::dialog::DialogReplies;

/// An isolated rendering surface reachable only by message passing.
///
/// The core posts a request; whatever the dialog answers comes back through
/// the [`DialogReplies`] handle, tagged with the request's correlation id.
pub trait DialogSurface: Send + Sync {
    /// Opens the surface (if needed) and posts `request` to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be shown.
    fn open(
        &self,
        request: &RequestEnvelope,
        replies: DialogReplies,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Closes the surface. Closing an already-closed surface is a no-op.
    fn close(&self);
}
