//! Terminal stand-in for the dialog surface.

use std::error::Error;

use crate::dialog::protocol::{
    CopyOutcome, DialogRequest, DialogResponse, RequestEnvelope, ResponseEnvelope,
};
use crate::dialog::DialogReplies;
use crate::ports::DialogSurface;

/// Prints copy requests so the text can be taken from the terminal.
///
/// Requests that need user input (colour picker, link configuration) are
/// dismissed at once; the CLI passes those values as arguments instead.
pub struct ConsoleDialog;

impl DialogSurface for ConsoleDialog {
    fn open(
        &self,
        request: &RequestEnvelope,
        replies: DialogReplies,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        match &request.payload {
            DialogRequest::Copy { text } => {
                println!("{text}");
                replies.deliver(ResponseEnvelope {
                    id: request.id,
                    payload: DialogResponse::Copy(CopyOutcome::Success),
                });
            }
            other => {
                tracing::debug!(request = ?other, "no interactive dialog in the terminal");
                replies.dismiss(request.id);
            }
        }
        Ok(())
    }

    fn close(&self) {}
}
