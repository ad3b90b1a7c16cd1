//! # Status snapshot.

use std::fmt;

use crate::error::JobError;
use crate::jobs::JobRef;
use crate::logging::LogEntry;

/// Phase of the supervisor state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    /// No job held (never run, or reset).
    Idle,
    /// A job is executing.
    Running,
    /// A job has finished and is held until reset.
    Completed,
}

/// Consistent snapshot of the supervisor, taken under its lock.
#[derive(Clone)]
pub struct JobStatus {
    /// Current phase.
    pub phase: JobPhase,
    /// Held job (running or completed).
    pub job: Option<JobRef>,
    /// Entries of the held job's in-memory log at snapshot time.
    pub log: Vec<LogEntry>,
    /// Error of the completed job; `None` while idle, running, or after success.
    pub last_error: Option<JobError>,
}

impl JobStatus {
    /// Returns `true` while a job is executing.
    pub fn is_running(&self) -> bool {
        self.phase == JobPhase::Running
    }

    /// Name of the held job.
    pub fn job_name(&self) -> Option<&str> {
        self.job.as_ref().map(|j| j.name())
    }

    /// Renders the log, one entry per line.
    pub fn log_text(&self) -> String {
        let mut out = String::new();
        for e in &self.log {
            out.push_str(&e.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobStatus")
            .field("phase", &self.phase)
            .field("job", &self.job_name())
            .field("log_entries", &self.log.len())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl fmt::Display for JobStatus {
    /// Human-readable status, e.g. `running: split-clone` or `failed: copy (context cancelled)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let describe = self.job.as_ref().map(|j| j.describe()).unwrap_or_default();
        match (self.phase, &self.last_error) {
            (JobPhase::Idle, _) => f.write_str("idle"),
            (JobPhase::Running, _) => write!(f, "running: {describe}"),
            (JobPhase::Completed, None) => write!(f, "done: {describe}"),
            (JobPhase::Completed, Some(e)) => write!(f, "failed: {describe} ({e})"),
        }
    }
}
