//! Supervisor core: admission, execution, and lifecycle.
//!
//! The public API from this module is [`Supervisor`] (with its builder and
//! config), the [`Completion`] handle, and the [`JobStatus`] snapshot.
//!
//! Internal modules:
//! - [`state`]: the `Idle / Running / Completed` state machine;
//! - [`runner`]: executes one job body, catching panics and logging the outcome;
//! - [`supervisor`]: single-flight admission, cancellation, reset, status;
//! - [`shutdown`]: cross-platform termination signal handling.

mod builder;
mod completion;
mod config;
mod runner;
mod shutdown;
mod state;
mod status;
mod supervisor;

pub use builder::SupervisorBuilder;
pub use completion::Completion;
pub use config::SupervisorConfig;
pub use status::{JobPhase, JobStatus};
pub use supervisor::{ShutdownAction, Supervisor};
