//! # Supervisor state machine.
//!
//! ```text
//!            admit                 job returns
//!   Idle ───────────► Running ───────────────► Completed
//!    ▲                   │ cancel (token only)     │
//!    │                   ▼                         │
//!    └──────────────────── reset ◄─────────────────┘
//! ```
//!
//! ## Rules
//! - Admission is accepted from `Idle` only.
//! - `Running → Completed` happens exactly once per admission.
//! - `reset` is refused from `Running`.
//!
//! Each variant carries only the fields valid in that state, so a
//! "running without a cancel token" combination cannot be represented.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{JobError, SupervisorError};
use crate::jobs::JobRef;
use crate::logging::MemoryLogger;

/// Job currently executing.
pub(crate) struct RunningJob {
    pub job: JobRef,
    pub log: Arc<MemoryLogger>,
    pub cancel: CancellationToken,
}

/// Job that has finished and is kept for inspection until reset.
pub(crate) struct CompletedJob {
    pub job: JobRef,
    pub log: Arc<MemoryLogger>,
    pub result: Result<(), JobError>,
}

/// Current supervisor state.
#[derive(Default)]
pub(crate) enum JobState {
    #[default]
    Idle,
    Running(RunningJob),
    Completed(CompletedJob),
}

impl JobState {
    /// Returns the reason why a new job cannot be admitted, if any.
    pub fn check_admission(&self) -> Result<(), SupervisorError> {
        match self {
            JobState::Idle => Ok(()),
            JobState::Running(r) => Err(SupervisorError::AlreadyRunning {
                job: r.job.name().to_string(),
            }),
            JobState::Completed(c) => Err(SupervisorError::ResetRequired {
                job: c.job.name().to_string(),
            }),
        }
    }

    /// Moves `Running → Completed` with the given result.
    ///
    /// Returns `false` (and changes nothing) when no job is running.
    pub fn complete(&mut self, result: Result<(), JobError>) -> bool {
        match std::mem::take(self) {
            JobState::Running(RunningJob { job, log, .. }) => {
                *self = JobState::Completed(CompletedJob { job, log, result });
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Moves back to `Idle`, returning the discarded job.
    ///
    /// Refused while a job is running.
    pub fn reset(&mut self) -> Result<Option<JobRef>, SupervisorError> {
        if let JobState::Running(r) = self {
            return Err(SupervisorError::ResetWhileRunning {
                job: r.job.name().to_string(),
            });
        }
        Ok(match std::mem::take(self) {
            JobState::Completed(c) => Some(c.job),
            _ => None,
        })
    }

    /// Job held by the state (running or completed).
    pub fn job(&self) -> Option<&JobRef> {
        match self {
            JobState::Idle => None,
            JobState::Running(r) => Some(&r.job),
            JobState::Completed(c) => Some(&c.job),
        }
    }

    /// In-memory log of the held job.
    pub fn log(&self) -> Option<&Arc<MemoryLogger>> {
        match self {
            JobState::Idle => None,
            JobState::Running(r) => Some(&r.log),
            JobState::Completed(c) => Some(&c.log),
        }
    }
}
