//! # Lifecycle events emitted by the supervisor.
//!
//! The [`EventKind`] enum classifies events across three groups:
//! - **Admission events**: a job was admitted or rejected
//! - **Control events**: cancellation, reset, shutdown signal
//! - **Terminal events**: the admitted job completed or failed
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Terminal events are published after the completion state is written and before
//! the job's [`Completion`](crate::Completion) is closed.
//!
//! ## Example
//! ```rust
//! use jobvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::JobFailed)
//!     .with_job("split-clone")
//!     .with_reason("execution failed: boom");
//!
//! assert_eq!(ev.kind, EventKind::JobFailed);
//! assert_eq!(ev.job.as_deref(), Some("split-clone"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of supervisor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Admission ===
    /// A job was admitted and its execution task spawned.
    ///
    /// Sets: `job`
    JobAdmitted,

    /// An admission was refused (`AlreadyRunning` or `ResetRequired`).
    ///
    /// Sets: `job` (the rejected job), `reason` (error label)
    AdmissionRejected,

    // === Control ===
    /// Cancellation was requested for the running job.
    ///
    /// Sets: `job`
    CancelRequested,

    /// Supervisor state was reset to idle.
    ///
    /// Sets: `job` (the discarded job, if any)
    StateReset,

    /// Termination signal observed.
    ///
    /// Sets: `job` (the running job, if any)
    ShutdownRequested,

    // === Terminal ===
    /// Job returned `Ok(())`.
    ///
    /// Sets: `job`
    JobCompleted,

    /// Job returned an error (including cancellation and panics).
    ///
    /// Sets: `job`, `reason` (error message)
    JobFailed,
}

/// Supervisor event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the job, if applicable.
    pub job: Option<Arc<str>>,
    /// Human-readable reason (errors, rejection labels).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            job: None,
            reason: None,
        }
    }

    /// Attaches a job name.
    #[inline]
    pub fn with_job(mut self, job: impl Into<Arc<str>>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns `true` for `JobCompleted` and `JobFailed`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, EventKind::JobCompleted | EventKind::JobFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::JobAdmitted);
        let b = Event::new(EventKind::JobCompleted);
        assert!(b.seq > a.seq);
        assert!(b.is_terminal());
        assert!(!a.is_terminal());
    }
}
