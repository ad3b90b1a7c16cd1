//! Error types used by the jobvisor supervisor and by jobs.
//!
//! This module defines two main error enums:
//!
//! - [`SupervisorError`]: errors raised by the supervisor itself (admission, reset).
//! - [`JobError`]: errors returned by a job body and stored as the job's terminal result.
//!
//! Both types provide `as_label` for logs/events.

use thiserror::Error;

/// # Errors produced by the supervisor.
///
/// All of them are returned synchronously to the caller and never change
/// supervisor state.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupervisorError {
    /// A job is currently running; the new admission was rejected.
    #[error("a job is already in progress: {job}")]
    AlreadyRunning {
        /// Name of the running job.
        job: String,
    },

    /// A finished job is still held for inspection; call `reset` before admitting another.
    #[error("job {job} has finished but was not reset")]
    ResetRequired {
        /// Name of the finished job.
        job: String,
    },

    /// `reset` was called while a job is running.
    #[error("cannot reset while job {job} is running")]
    ResetWhileRunning {
        /// Name of the running job.
        job: String,
    },

    /// `admit` was called outside a tokio runtime; nothing was spawned.
    #[error("cannot admit job {job}: no tokio runtime")]
    NoRuntime {
        /// Name of the rejected job.
        job: String,
    },

    /// The awaited job finished with an error.
    #[error("job {job} failed: {source}")]
    JobFailed {
        /// Name of the failed job.
        job: String,
        /// Terminal error returned by the job.
        #[source]
        source: JobError,
    },
}

impl SupervisorError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use jobvisor::SupervisorError;
    ///
    /// let err = SupervisorError::AlreadyRunning { job: "copy".into() };
    /// assert_eq!(err.as_label(), "supervisor_already_running");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SupervisorError::AlreadyRunning { .. } => "supervisor_already_running",
            SupervisorError::ResetRequired { .. } => "supervisor_reset_required",
            SupervisorError::ResetWhileRunning { .. } => "supervisor_reset_while_running",
            SupervisorError::NoRuntime { .. } => "supervisor_no_runtime",
            SupervisorError::JobFailed { .. } => "supervisor_job_failed",
        }
    }
}

/// # Errors produced by job execution.
///
/// A job body returns these; the supervisor stores them verbatim as the
/// job's last error and never retries.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// Job execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Job observed cancellation and stopped early.
    #[error("context cancelled")]
    Canceled,

    /// Job body panicked; the panic was caught by the supervisor.
    #[error("job panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl JobError {
    /// Shorthand for [`JobError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        JobError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use jobvisor::JobError;
    ///
    /// assert_eq!(JobError::Canceled.as_label(), "job_canceled");
    /// assert_eq!(JobError::fail("boom").as_label(), "job_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            JobError::Fail { .. } => "job_failed",
            JobError::Canceled => "job_canceled",
            JobError::Panicked { .. } => "job_panicked",
        }
    }

    /// Returns `true` if the job stopped because it was cancelled.
    pub fn is_canceled(&self) -> bool {
        matches!(self, JobError::Canceled)
    }
}
