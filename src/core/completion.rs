//! # One-shot completion handle.
//!
//! [`Completion`] is returned by a successful admission. It is closed exactly
//! once, by the job's execution task, after the supervisor state already
//! reports the job as completed. Any number of clones may wait on it.

use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

use crate::error::JobError;

/// Completion signal of one admitted job.
#[derive(Clone, Debug)]
pub struct Completion {
    done: CancellationToken,
    result: Arc<OnceLock<Result<(), JobError>>>,
}

impl Completion {
    pub(crate) fn new() -> Self {
        Self {
            done: CancellationToken::new(),
            result: Arc::new(OnceLock::new()),
        }
    }

    /// Stores the terminal result and closes the signal.
    ///
    /// Only the first call has an effect.
    pub(crate) fn close(&self, result: Result<(), JobError>) {
        let _ = self.result.set(result);
        self.done.cancel();
    }

    /// Waits until the job has finished.
    pub async fn wait(&self) {
        self.done.cancelled().await;
    }

    /// Returns `true` once the job has finished.
    pub fn is_closed(&self) -> bool {
        self.done.is_cancelled()
    }

    /// Terminal result of the job, available once closed.
    pub fn result(&self) -> Option<&Result<(), JobError>> {
        self.result.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_close_once() {
        let c = Completion::new();
        let waiter = c.clone();
        assert!(!c.is_closed());
        assert!(c.result().is_none());

        c.close(Err(JobError::Canceled));
        c.close(Ok(()));

        waiter.wait().await;
        assert!(waiter.is_closed());
        assert_eq!(waiter.result(), Some(&Err(JobError::Canceled)));
    }
}
