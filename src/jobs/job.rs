//! # Job abstraction.
//!
//! This module defines the [`Job`] trait (async, cancelable). The common handle
//! type is [`JobRef`], an `Arc<dyn Job>` shared between the caller and the
//! supervisor, which keeps it after the job finishes for status reporting.
//!
//! A job receives a [`JobContext`] and should check its token to stop
//! cooperatively; the supervisor never aborts a job.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::JobError;
use crate::jobs::JobContext;

/// # Asynchronous, cancelable unit of work.
///
/// A `Job` has a stable [`name`](Job::name) and an async [`run`](Job::run) method
/// that receives a [`JobContext`]. Implementors should regularly check
/// cancellation and return promptly once it is requested.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use jobvisor::{Job, JobContext, JobError};
///
/// struct Vacuum;
///
/// #[async_trait]
/// impl Job for Vacuum {
///     fn name(&self) -> &str { "vacuum" }
///
///     async fn run(&self, ctx: JobContext) -> Result<(), JobError> {
///         for table in ["a", "b"] {
///             if ctx.is_cancelled() {
///                 return Err(JobError::Canceled);
///             }
///             ctx.logger().info(&format!("vacuuming {table}"));
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Job: Send + Sync + 'static {
    /// Returns a stable, human-readable job name.
    fn name(&self) -> &str;

    /// Returns a longer description for status output.
    ///
    /// Defaults to [`name`](Job::name).
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Executes the job until completion or cancellation.
    async fn run(&self, ctx: JobContext) -> Result<(), JobError>;
}

/// Shared reference to a job.
pub type JobRef = Arc<dyn Job>;
