//! # Execution context handed to a running job.

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

use crate::logging::LoggerRef;

/// What a job sees while it runs.
///
/// Built by the supervisor at admission time:
/// - `token` is cancelled by [`Supervisor::cancel`](crate::Supervisor::cancel) or an OS signal;
/// - `logger` is the tee of the job's in-memory log and the caller's logger.
#[derive(Clone)]
pub struct JobContext {
    job_name: String,
    token: CancellationToken,
    logger: LoggerRef,
}

impl JobContext {
    /// Creates a context. Mostly useful to drive a job directly in tests.
    pub fn new(job_name: impl Into<String>, token: CancellationToken, logger: LoggerRef) -> Self {
        Self {
            job_name: job_name.into(),
            token,
            logger,
        }
    }

    /// Name of the job this context belongs to.
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// Cancellation token of this run.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns `true` once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when cancellation is requested.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// Logger installed for this run.
    pub fn logger(&self) -> &LoggerRef {
        &self.logger
    }
}
