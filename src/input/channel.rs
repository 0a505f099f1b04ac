//! Input Channel
//!
//! Unbounded FIFO multi-producer/single-consumer queue of
//! `(Source, Command)` pairs. Pushes from one producer keep their order;
//! across producers only arrival-order interleaving is guaranteed, so
//! the last conflicting direction to arrive in a drain wins.

use tokio::sync::mpsc;
use tracing::trace;

use crate::game::command::{normalize, Command, Source};

/// Producer handle. Cheap to clone; one per listener task. An embedding
/// renderer can clone it to inject translated key events.
#[derive(Clone, Debug)]
pub struct InputSender {
    tx: mpsc::UnboundedSender<(Source, Command)>,
}

impl InputSender {
    /// Push a normalized command.
    ///
    /// A closed channel (consumer gone during shutdown) is not an
    /// error; the pair is silently dropped.
    pub fn push(&self, source: Source, cmd: Command) {
        let _ = self.tx.send((source, cmd));
    }

    /// Normalize a raw token and push it if it maps to a command.
    /// Malformed tokens are dropped without a trace of state change.
    pub fn push_raw(&self, source: Source, raw: &str) {
        match normalize(raw) {
            Some(cmd) => self.push(source, cmd),
            None => trace!(?source, raw, "dropped unknown token"),
        }
    }
}

/// Consumer end, owned by the scheduler loop.
#[derive(Debug)]
pub struct InputChannel {
    rx: mpsc::UnboundedReceiver<(Source, Command)>,
}

impl InputChannel {
    /// Create the channel and its first producer handle.
    pub fn new() -> (Self, InputSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, InputSender { tx })
    }

    /// Pop the next pending pair without blocking.
    ///
    /// The scheduler calls this in a loop each iteration, draining the
    /// queue to empty so bursty input never backs up.
    pub fn try_recv(&mut self) -> Option<(Source, Command)> {
        self.rx.try_recv().ok()
    }
}
