//! # jobvisor
//!
//! **jobvisor** is a single-flight, cancellable job supervisor for tokio.
//!
//! It admits at most one long-running job at a time, tracks it through a small
//! state machine, lets callers (or an OS signal) request cooperative
//! cancellation, and keeps the job's log and terminal result until it is
//! explicitly reset. It is meant to sit behind a command dispatcher or an RPC
//! service that owns one [`Supervisor`].
//!
//! ## Architecture
//! ```text
//!   caller (CLI / RPC)                         OS signal listener
//!     │ admit / cancel / reset / status           │ SIGINT / SIGTERM / SIGQUIT
//!     ▼                                           ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Supervisor                                                   │
//! │  Mutex<JobState>:  Idle | Running{job,log,token} | Completed  │
//! │  Bus (broadcast lifecycle events)                             │
//! └──────┬───────────────────────────────────────────▲────────────┘
//!        │ Handle::spawn                             │ lock, Completed{result}
//!        ▼                                           │
//!   runner::run_job(job, JobContext{token, tee}) ────┘ ──► Completion::close()
//!        │
//!        └─► TeeLogger ──► MemoryLogger (status)  +  caller logger
//! ```
//!
//! ### Lifecycle
//! ```text
//! Idle ──admit──► Running ──job returns──► Completed ──reset──► Idle
//!                   │                          │
//!                   └─ admit → AlreadyRunning  └─ admit → ResetRequired
//!                   └─ reset → ResetWhileRunning
//! ```
//!
//! ## Features
//! | Area              | Description                                                    | Key types / traits                          |
//! |-------------------|----------------------------------------------------------------|---------------------------------------------|
//! | **Supervision**   | Single-flight admission, cancellation, reset, status.          | [`Supervisor`], [`JobStatus`], [`Completion`] |
//! | **Jobs**          | Define jobs as trait impls or closures.                        | [`Job`], [`JobFn`], [`JobRef`], [`JobContext`] |
//! | **Logging**       | Per-job in-memory log teed with the caller's logger.           | [`Logger`], [`MemoryLogger`], [`TeeLogger`], [`ConsoleLogger`] |
//! | **Events**        | Broadcast lifecycle events.                                    | [`Event`], [`EventKind`]                    |
//! | **Errors**        | Typed errors for admission and job execution.                  | [`SupervisorError`], [`JobError`]           |
//! | **Configuration** | Event bus size and idle-signal behavior.                       | [`SupervisorConfig`]                        |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use jobvisor::{JobContext, JobError, JobFn, JobPhase, JobRef, SupervisorConfig, Supervisor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sup = Supervisor::builder(SupervisorConfig::default()).build();
//!     sup.install_signal_handlers();
//!
//!     let job: JobRef = JobFn::arc("resharding", |ctx: JobContext| async move {
//!         for step in 0..3 {
//!             if ctx.is_cancelled() {
//!                 return Err(JobError::Canceled);
//!             }
//!             ctx.logger().info(&format!("step {step}"));
//!             tokio::time::sleep(Duration::from_millis(5)).await;
//!         }
//!         Ok(())
//!     });
//!
//!     let done = sup.admit_with_default_logger(job)?;
//!     done.wait().await;
//!
//!     let status = sup.status();
//!     assert_eq!(status.phase, JobPhase::Completed);
//!     assert!(status.last_error.is_none());
//!     print!("{}", status.log_text());
//!
//!     sup.reset()?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod jobs;
mod logging;

// ---- Public re-exports ----

pub use core::{
    Completion, JobPhase, JobStatus, ShutdownAction, Supervisor, SupervisorBuilder,
    SupervisorConfig,
};
pub use error::{JobError, SupervisorError};
pub use events::{Event, EventKind};
pub use jobs::{Job, JobContext, JobFn, JobRef};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, Logger, LoggerRef, MemoryLogger, TeeLogger};
