//! # Job abstractions.
//!
//! This module provides the job-related types:
//! - [`Job`] - trait for implementing async cancelable jobs
//! - [`JobFn`] - function-backed job implementation
//! - [`JobRef`] - shared reference to a job (`Arc<dyn Job>`)
//! - [`JobContext`] - what a running job receives: cancellation token and logger

mod context;
mod job;
mod job_fn;

pub use context::JobContext;
pub use job::{Job, JobRef};
pub use job_fn::JobFn;
