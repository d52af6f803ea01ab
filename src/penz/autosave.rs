//! Debounced auto-save: a single-slot cancellable delayed task.
//!
//! Scheduling a draft supersedes whatever was pending (the old timer is
//! aborted, never fired), so within any quiet window at most one save goes
//! out, carrying the last values (last-write-wins). Due saves arrive on the
//! channel handed out by [`AutoSave::new`]; whoever drives persistence drains
//! it.

use crate::model::PenDraft;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiet period before a scheduled save fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_secs(2);

pub struct AutoSave {
    delay: Duration,
    tx: UnboundedSender<PenDraft>,
    pending: Option<JoinHandle<()>>,
}

impl AutoSave {
    /// Returns the scheduler and the channel on which due saves arrive.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<PenDraft>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Arm the timer for `draft`, superseding any pending save.
    pub fn schedule(&mut self, draft: PenDraft) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            // Receiver may be gone if the session was dropped mid-wait
            let _ = tx.send(draft);
        }));
    }

    /// Abort the pending save, if any. An aborted timer never fires.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Emit `draft` immediately, superseding any pending save.
    pub fn flush(&mut self, draft: PenDraft) {
        self.cancel();
        let _ = self.tx.send(draft);
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for AutoSave {
    fn drop(&mut self) {
        self.cancel();
    }
}
