use super::timer::{StepTimer, TimerToken};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// A step timer backed by the tokio runtime.
///
/// Each scheduled step sleeps on its own task and then sends its token down
/// the channel returned by [`TokioTimer::new`]. Cancelling, rescheduling or
/// dropping the timer aborts the pending task. A token that was already sent
/// before the abort is rejected by the engine's generation check.
///
/// Must be used from within a tokio runtime.
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<TimerToken>,
    pending: Option<(TimerToken, JoinHandle<()>)>,
}

impl TokioTimer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, pending: None }, rx)
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(_, handle)| !handle.is_finished())
    }
}

impl StepTimer for TokioTimer {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        if let Some((previous, handle)) = self.pending.take() {
            debug!(?previous, "Replacing pending step timer");
            handle.abort();
        }
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver may be gone if the view was torn down.
            let _ = tx.send(token);
        });
        self.pending = Some((token, handle));
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some((pending, handle)) = self.pending.take() {
            if pending == token {
                handle.abort();
            } else {
                self.pending = Some((pending, handle));
            }
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}
