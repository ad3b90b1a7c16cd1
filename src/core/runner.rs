//! # Run one admitted job to its terminal result.
//!
//! Executes [`Job::run`] outside the supervisor lock and converts every way the
//! body can end into a `Result<(), JobError>`:
//!
//! ```text
//! Success:       job.run() → Ok(())               → "[info] job finished"
//! Failure:       job.run() → Err(Fail/Canceled)   → "[error] job failed: .."
//! Panic:         job.run() panics → catch_unwind  → Err(Panicked) → "[error] job failed: .."
//! ```
//!
//! ## Rules
//! - Never panics itself; a panicking job becomes [`JobError::Panicked`].
//! - Writes start/end lines to the job's own logger, so they land in the
//!   in-memory log and the caller's logger alike.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::error::JobError;
use crate::jobs::{JobContext, JobRef};

/// Executes `job` with `ctx` and returns its terminal result.
pub(crate) async fn run_job(job: JobRef, ctx: JobContext) -> Result<(), JobError> {
    let logger = ctx.logger().clone();
    logger.info(&format!("starting job {}", job.name()));
    debug!(job = job.name(), "job started");

    let res = match AssertUnwindSafe(job.run(ctx)).catch_unwind().await {
        Ok(res) => res,
        Err(payload) => Err(JobError::Panicked {
            info: panic_message(payload.as_ref()),
        }),
    };

    match &res {
        Ok(()) => {
            logger.info(&format!("job {} finished", job.name()));
            debug!(job = job.name(), "job finished");
        }
        Err(e) => {
            logger.error(&format!("job {} failed: {e}", job.name()));
            warn!(job = job.name(), error = %e, label = e.as_label(), "job failed");
        }
    }
    res
}

/// Renders a panic payload as text.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
