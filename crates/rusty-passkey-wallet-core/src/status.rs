//! Shared status line: a single-slot, last-write-wins observable value.
//! One writer at a time, no queuing.

use std::sync::Mutex;

/// Lifecycle of the status line. Every user-triggered action transitions out
/// of `Idle` and eventually back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPhase {
    #[default]
    Idle,
    Working,
}

/// Sink for human-readable status updates emitted by the flows.
pub trait StatusSink: Send + Sync {
    /// A new operation started.
    fn begin(&self, message: &str);
    /// The running operation moved to a later step.
    fn progress(&self, message: &str);
    /// The operation succeeded; the final message is retained until the
    /// next action.
    fn finish(&self, message: &str);
    /// The operation failed; the message is cleared.
    fn fail(&self);
    /// Explicitly drop the current message (e.g. on disconnect).
    fn clear(&self);
}

#[derive(Debug, Default)]
struct StatusInner {
    phase: StatusPhase,
    message: Option<String>,
}

/// The one status value shared by all panels.
#[derive(Debug, Default)]
pub struct StatusSlot {
    inner: Mutex<StatusInner>,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StatusPhase {
        self.inner.lock().unwrap().phase
    }

    pub fn message(&self) -> Option<String> {
        self.inner.lock().unwrap().message.clone()
    }
}

impl StatusSink for StatusSlot {
    fn begin(&self, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = StatusPhase::Working;
        inner.message = Some(message.to_owned());
    }

    fn progress(&self, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = StatusPhase::Working;
        inner.message = Some(message.to_owned());
    }

    fn finish(&self, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = StatusPhase::Idle;
        inner.message = Some(message.to_owned());
    }

    fn fail(&self) {
        self.clear();
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = StatusPhase::Idle;
        inner.message = None;
    }
}
