//! Scripted dialog surface.

use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::dialog::protocol::{DialogResponse, RequestEnvelope, ResponseEnvelope};
use crate::dialog::DialogReplies;
use crate::ports::DialogSurface;

/// How the fake dialog answers the next request.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Answer right away with this response.
    Immediate(DialogResponse),
    /// Never answer.
    Silent,
}

#[derive(Debug, Default)]
struct Inner {
    script: VecDeque<ScriptedReply>,
    posted: Vec<RequestEnvelope>,
    open: bool,
}

/// Dialog that answers from a script; unscripted requests get no answer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDialog {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDialog {
    /// Creates a dialog that will answer with `script`, in order.
    #[must_use]
    pub fn new(script: Vec<ScriptedReply>) -> Self {
        let inner = Inner {
            script: script.into(),
            ..Inner::default()
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Appends one more scripted answer.
    pub fn push(&self, reply: ScriptedReply) {
        self.lock().script.push_back(reply);
    }

    /// Every request posted so far.
    #[must_use]
    pub fn posted(&self) -> Vec<RequestEnvelope> {
        self.lock().posted.clone()
    }

    /// Whether the surface is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("dialog lock poisoned")
    }
}

impl DialogSurface for MemoryDialog {
    fn open(
        &self,
        request: &RequestEnvelope,
        replies: DialogReplies,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let reply = {
            let mut inner = self.lock();
            inner.open = true;
            inner.posted.push(request.clone());
            inner.script.pop_front()
        };
        if let Some(ScriptedReply::Immediate(payload)) = reply {
            replies.deliver(ResponseEnvelope {
                id: request.id,
                payload,
            });
        }
        Ok(())
    }

    fn close(&self) {
        self.lock().open = false;
    }
}
