//! # Supervisor: single-flight admission, cancellation, and result capture.
//!
//! The [`Supervisor`] owns the slot for "the current job". It admits at most one
//! job at a time, spawns it on the tokio runtime, mediates cancellation (explicit
//! or OS-signal driven), and keeps the finished job, its log, and its result
//! until [`Supervisor::reset`].
//!
//! ## High-level architecture
//! ```text
//! admit(job, logger)
//!   ├─► Handle::try_current()    ── none      ─► Err(NoRuntime)
//!   │    (one critical section from here on)
//!   ├─► state.check_admission()  ── Running   ─► Err(AlreadyRunning)
//!   │                            └─ Completed ─► Err(ResetRequired)
//!   ├─► log    = MemoryLogger::new()
//!   ├─► token  = CancellationToken::new()
//!   ├─► tee    = TeeLogger(log, logger | ConsoleLogger if logger is the default)
//!   ├─► state  = Running { job, log, token }
//!   └─► Handle::spawn ─┐
//!                      ▼
//!            runner::run_job(job, JobContext { token, tee })     (no lock held)
//!                     │
//!                     ▼
//!            lock ─► state = Completed { job, log, result } ─► unlock
//!                     ├─► Bus.publish(JobCompleted | JobFailed)
//!                     └─► Completion::close(result)
//!
//! cancel()            lock ─► Running? token.cancel()
//! on_shutdown_signal  lock ─► Running? token.cancel() : process::exit(idle_exit_code)
//! reset()             lock ─► Running? Err(ResetWhileRunning) : state = Idle
//! status()            lock ─► JobStatus snapshot
//! ```
//!
//! ## Rules
//! - All state reads and writes happen under one mutex; the job body never runs under it.
//! - The completion handle is closed strictly after the `Completed` state is written.
//! - Cancellation is cooperative and idempotent; the supervisor never aborts a job.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use jobvisor::{JobContext, JobError, JobFn, JobRef, Supervisor, SupervisorConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sup = Supervisor::new(SupervisorConfig::default());
//!
//!     let job: JobRef = JobFn::arc("ticker", |ctx: JobContext| async move {
//!         while !ctx.is_cancelled() {
//!             tokio::time::sleep(Duration::from_millis(10)).await;
//!         }
//!         Err::<(), JobError>(JobError::Canceled)
//!     });
//!
//!     let done = sup.admit_with_default_logger(job)?;
//!     sup.cancel();
//!     done.wait().await;
//!
//!     assert_eq!(sup.status().last_error, Some(JobError::Canceled));
//!     sup.reset()?;
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::{
    builder::SupervisorBuilder,
    completion::Completion,
    config::SupervisorConfig,
    runner, shutdown,
    state::{JobState, RunningJob},
    status::{JobPhase, JobStatus},
};
use crate::error::SupervisorError;
use crate::events::{Bus, Event, EventKind};
use crate::jobs::{JobContext, JobRef};
use crate::logging::{ConsoleLogger, LoggerRef, MemoryLogger, TeeLogger};

/// What a termination signal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownAction {
    /// The running job was asked to stop.
    Cancelled,
    /// No job was running; the process exits unless disabled by config.
    Idle,
}

/// Single-flight job supervisor.
pub struct Supervisor {
    cfg: SupervisorConfig,
    bus: Bus,
    state: Arc<Mutex<JobState>>,
    default_logger: LoggerRef,
}

impl Supervisor {
    /// Creates a supervisor with a [`ConsoleLogger`] as its default logger.
    pub fn new(cfg: SupervisorConfig) -> Self {
        Self::with_default_logger(cfg, Arc::new(ConsoleLogger::new()))
    }

    pub(crate) fn with_default_logger(cfg: SupervisorConfig, default_logger: LoggerRef) -> Self {
        let bus = Bus::new(cfg.bus_capacity_clamped());
        Self {
            cfg,
            bus,
            state: Arc::new(Mutex::new(JobState::Idle)),
            default_logger,
        }
    }

    /// Returns a builder.
    pub fn builder(cfg: SupervisorConfig) -> SupervisorBuilder {
        SupervisorBuilder::new(cfg)
    }

    /// Supervisor configuration.
    pub fn config(&self) -> &SupervisorConfig {
        &self.cfg
    }

    /// The supervisor's own default logger.
    ///
    /// Passing this instance to [`admit`](Self::admit) makes the job log to a
    /// fresh [`ConsoleLogger`] instead of to this instance.
    pub fn default_logger(&self) -> LoggerRef {
        Arc::clone(&self.default_logger)
    }

    /// Creates a receiver for lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Admits `job` and starts it in the background.
    ///
    /// The job logs through a tee of a fresh in-memory log (read by
    /// [`status`](Self::status)) and `logger`. When `logger` is
    /// [`default_logger`](Self::default_logger), a new [`ConsoleLogger`] is
    /// used in its place.
    ///
    /// The job is spawned on the runtime of the calling context.
    ///
    /// ### Errors
    /// - [`SupervisorError::NoRuntime`] if called outside a tokio runtime
    /// - [`SupervisorError::AlreadyRunning`] if a job is running
    /// - [`SupervisorError::ResetRequired`] if a finished job was not reset
    ///
    /// None of them changes state.
    pub fn admit(&self, job: JobRef, logger: LoggerRef) -> Result<Completion, SupervisorError> {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                return Err(self.reject(
                    &job,
                    SupervisorError::NoRuntime {
                        job: job.name().to_string(),
                    },
                ));
            }
        };

        let mut state = self.lock();
        if let Err(e) = state.check_admission() {
            return Err(self.reject(&job, e));
        }

        let log = Arc::new(MemoryLogger::new());
        let token = CancellationToken::new();
        let forward: LoggerRef = if Arc::ptr_eq(&logger, &self.default_logger) {
            Arc::new(ConsoleLogger::new())
        } else {
            logger
        };
        let tee: LoggerRef = Arc::new(TeeLogger::new(log.clone(), forward));
        let ctx = JobContext::new(job.name(), token.clone(), tee);

        *state = JobState::Running(RunningJob {
            job: Arc::clone(&job),
            log,
            cancel: token,
        });
        info!(job = job.name(), "job admitted");
        self.bus
            .publish(Event::new(EventKind::JobAdmitted).with_job(job.name()));

        let completion = Completion::new();
        self.spawn_job(&runtime, job, ctx, completion.clone());
        Ok(completion)
    }

    fn reject(&self, job: &JobRef, e: SupervisorError) -> SupervisorError {
        warn!(job = job.name(), reason = e.as_label(), "admission rejected");
        self.bus.publish(
            Event::new(EventKind::AdmissionRejected)
                .with_job(job.name())
                .with_reason(e.as_label()),
        );
        e
    }

    /// Shorthand for `admit(job, self.default_logger())`.
    pub fn admit_with_default_logger(&self, job: JobRef) -> Result<Completion, SupervisorError> {
        self.admit(job, self.default_logger())
    }

    /// Spawns the execution task; called with the state lock held.
    fn spawn_job(&self, runtime: &Handle, job: JobRef, ctx: JobContext, completion: Completion) {
        let state = Arc::clone(&self.state);
        let bus = self.bus.clone();

        runtime.spawn(async move {
            let name = job.name().to_string();
            let result = runner::run_job(job, ctx).await;

            let completed = lock(&state).complete(result.clone());
            debug_assert!(completed, "job finished while supervisor was not running it");

            let ev = match &result {
                Ok(()) => Event::new(EventKind::JobCompleted).with_job(name.as_str()),
                Err(e) => Event::new(EventKind::JobFailed)
                    .with_job(name.as_str())
                    .with_reason(e.to_string()),
            };
            bus.publish(ev);
            completion.close(result);
        });
    }

    /// Requests cooperative cancellation of the running job.
    ///
    /// Returns `true` if a job was running. Calling it again, or with no job
    /// running, is a no-op.
    pub fn cancel(&self) -> bool {
        let state = self.lock();
        match &*state {
            JobState::Running(r) => {
                self.cancel_running(r);
                true
            }
            _ => false,
        }
    }

    fn cancel_running(&self, r: &RunningJob) {
        if r.cancel.is_cancelled() {
            debug!(job = r.job.name(), "cancellation already requested");
            return;
        }
        info!(job = r.job.name(), "cancelling job");
        r.cancel.cancel();
        self.bus
            .publish(Event::new(EventKind::CancelRequested).with_job(r.job.name()));
    }

    /// Reacts to a termination signal.
    ///
    /// Cancels the running job, or, when idle, exits the process with
    /// [`SupervisorConfig::idle_exit_code`] unless
    /// [`SupervisorConfig::exit_on_idle_signal`] is `false`.
    pub fn on_shutdown_signal(&self) -> ShutdownAction {
        let state = self.lock();
        let mut ev = Event::new(EventKind::ShutdownRequested);
        if let Some(job) = state.job() {
            ev = ev.with_job(job.name());
        }
        self.bus.publish(ev);

        match &*state {
            JobState::Running(r) => {
                self.cancel_running(r);
                ShutdownAction::Cancelled
            }
            _ => {
                if self.cfg.exit_on_idle_signal {
                    info!(code = self.cfg.idle_exit_code, "shutting down idle supervisor after signal");
                    std::process::exit(self.cfg.idle_exit_code);
                }
                info!("termination signal received while idle");
                ShutdownAction::Idle
            }
        }
    }

    /// Spawns a listener that calls [`on_shutdown_signal`](Self::on_shutdown_signal)
    /// for every SIGINT/SIGTERM/SIGQUIT (Ctrl-C on Windows).
    ///
    /// Listeners are registered once and stay registered for the lifetime of
    /// the task, so signals arriving while one is handled are not lost.
    /// The task exits if registration fails.
    pub fn install_signal_handlers(self: &Arc<Self>) -> JoinHandle<()> {
        let sup = Arc::clone(self);
        tokio::spawn(async move {
            let mut signals = match shutdown::ShutdownSignals::new() {
                Ok(signals) => signals,
                Err(e) => {
                    warn!(error = %e, "failed to listen for termination signals");
                    return;
                }
            };
            loop {
                let signal = signals.recv().await;
                let action = sup.on_shutdown_signal();
                info!(signal, ?action, "termination signal handled");
            }
        })
    }

    /// Discards the finished job, its log, and its result.
    ///
    /// ### Errors
    /// [`SupervisorError::ResetWhileRunning`] while a job runs; state is unchanged.
    pub fn reset(&self) -> Result<(), SupervisorError> {
        let mut state = self.lock();
        let discarded = state.reset()?;

        let mut ev = Event::new(EventKind::StateReset);
        if let Some(job) = &discarded {
            ev = ev.with_job(job.name());
        }
        info!(job = discarded.as_ref().map(|j| j.name()), "supervisor reset");
        self.bus.publish(ev);
        Ok(())
    }

    /// Returns a consistent snapshot of the supervisor state.
    pub fn status(&self) -> JobStatus {
        let state = self.lock();
        let log = state.log().map(|l| l.entries()).unwrap_or_default();
        let job = state.job().cloned();
        match &*state {
            JobState::Idle => JobStatus {
                phase: JobPhase::Idle,
                job,
                log,
                last_error: None,
            },
            JobState::Running(_) => JobStatus {
                phase: JobPhase::Running,
                job,
                log,
                last_error: None,
            },
            JobState::Completed(c) => JobStatus {
                phase: JobPhase::Completed,
                job,
                log,
                last_error: c.result.clone().err(),
            },
        }
    }

    /// Returns `true` while a job is executing.
    pub fn is_running(&self) -> bool {
        matches!(&*self.lock(), JobState::Running(_))
    }

    /// Handle to the in-memory log of the held job.
    ///
    /// The handle stays valid after the next admission replaces the log.
    pub fn current_log(&self) -> Option<Arc<MemoryLogger>> {
        self.lock().log().cloned()
    }

    /// Admits `job`, then waits for it to finish.
    ///
    /// If `token` is cancelled first, the job is cancelled and the call keeps
    /// waiting until the job actually returns.
    ///
    /// ### Errors
    /// - admission errors from [`admit`](Self::admit)
    /// - [`SupervisorError::JobFailed`] if the job returned an error
    pub async fn run_and_wait(
        &self,
        job: JobRef,
        logger: LoggerRef,
        token: &CancellationToken,
    ) -> Result<(), SupervisorError> {
        let name = job.name().to_string();
        let done = self.admit(job, logger)?;

        tokio::select! {
            _ = done.wait() => {}
            _ = token.cancelled() => {
                self.cancel();
                done.wait().await;
            }
        }

        match done.result() {
            Some(Err(e)) => Err(SupervisorError::JobFailed {
                job: name,
                source: e.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, JobState> {
        lock(&self.state)
    }
}

/// Locks the state, ignoring poisoning: no code path panics while holding it.
fn lock(state: &Mutex<JobState>) -> MutexGuard<'_, JobState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::sync::Notify;
    use tokio::time::timeout;

    use super::*;
    use crate::error::JobError;
    use crate::jobs::JobFn;

    fn test_supervisor() -> Supervisor {
        Supervisor::new(SupervisorConfig {
            exit_on_idle_signal: false,
            ..SupervisorConfig::default()
        })
    }

    /// Job that runs until cancelled, then returns `Canceled`.
    fn until_cancelled(name: &'static str) -> JobRef {
        JobFn::arc(name, |ctx: JobContext| async move {
            ctx.logger().info("waiting for cancellation");
            ctx.cancelled().await;
            Err::<(), JobError>(JobError::Canceled)
        })
    }

    async fn wait(done: &Completion) {
        timeout(Duration::from_secs(5), done.wait())
            .await
            .expect("job did not finish in time");
    }

    #[tokio::test]
    async fn test_second_admit_rejected_while_running() {
        let sup = test_supervisor();
        let done = sup.admit_with_default_logger(until_cancelled("a")).expect("admit a");

        let err = sup.admit_with_default_logger(until_cancelled("b")).err();
        assert_eq!(err, Some(SupervisorError::AlreadyRunning { job: "a".into() }));

        let st = sup.status();
        assert_eq!(st.phase, JobPhase::Running);
        assert_eq!(st.job_name(), Some("a"));
        assert!(st.last_error.is_none());

        sup.cancel();
        wait(&done).await;
    }

    #[tokio::test]
    async fn test_success_reported_after_completion() {
        let sup = test_supervisor();
        let job: JobRef = JobFn::arc("quick", |_ctx: JobContext| async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<(), JobError>(())
        });

        let done = sup.admit_with_default_logger(job).expect("admit");
        wait(&done).await;

        let st = sup.status();
        assert_eq!(st.phase, JobPhase::Completed);
        assert_eq!(st.job_name(), Some("quick"));
        assert!(st.last_error.is_none());
        assert_eq!(done.result(), Some(&Ok(())));
        assert!(!sup.is_running());
    }

    #[tokio::test]
    async fn test_job_error_stored_as_last_error() {
        let sup = test_supervisor();
        let job: JobRef = JobFn::arc("bad", |_ctx: JobContext| async move {
            Err::<(), JobError>(JobError::fail("topology unavailable"))
        });

        let done = sup.admit_with_default_logger(job).expect("admit");
        wait(&done).await;

        let st = sup.status();
        assert_eq!(st.phase, JobPhase::Completed);
        assert_eq!(st.last_error, Some(JobError::fail("topology unavailable")));
        assert_eq!(
            st.to_string(),
            "failed: bad (execution failed: topology unavailable)"
        );
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let sup = test_supervisor();
        assert!(!sup.cancel());

        let done = sup.admit_with_default_logger(until_cancelled("a")).expect("admit");
        assert!(sup.cancel());
        assert!(sup.cancel() || done.is_closed());
        wait(&done).await;

        assert!(!sup.cancel());
        assert_eq!(sup.status().last_error, Some(JobError::Canceled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_until_job_honours_cancel() {
        let sup = test_supervisor();
        let release = Arc::new(Notify::new());
        let gate = release.clone();
        let job: JobRef = JobFn::arc("stubborn", move |_ctx: JobContext| {
            let gate = gate.clone();
            async move {
                gate.notified().await;
                Ok::<(), JobError>(())
            }
        });

        let done = sup.admit_with_default_logger(job).expect("admit");
        assert!(sup.cancel());
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(!done.is_closed());
        assert_eq!(sup.status().phase, JobPhase::Running);

        release.notify_one();
        wait(&done).await;
        assert_eq!(sup.status().phase, JobPhase::Completed);
    }

    #[tokio::test]
    async fn test_reset_semantics() {
        let sup = test_supervisor();
        assert!(sup.reset().is_ok());

        let done = sup.admit_with_default_logger(until_cancelled("a")).expect("admit");
        assert_eq!(
            sup.reset(),
            Err(SupervisorError::ResetWhileRunning { job: "a".into() })
        );
        assert!(sup.is_running());

        sup.cancel();
        wait(&done).await;

        assert_eq!(
            sup.admit_with_default_logger(until_cancelled("b")).err(),
            Some(SupervisorError::ResetRequired { job: "a".into() })
        );

        sup.reset().expect("reset");
        let st = sup.status();
        assert_eq!(st.phase, JobPhase::Idle);
        assert!(st.job.is_none());
        assert!(st.log.is_empty());
        assert!(st.last_error.is_none());

        let done = sup.admit_with_default_logger(until_cancelled("b")).expect("admit b");
        sup.cancel();
        wait(&done).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_admits_single_winner() {
        let sup = Arc::new(test_supervisor());
        let wins = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for i in 0..16 {
            let sup = sup.clone();
            let wins = wins.clone();
            handles.push(tokio::spawn(async move {
                let name = format!("job-{i}");
                let job: JobRef = JobFn::arc(name, |ctx: JobContext| async move {
                    ctx.cancelled().await;
                    Ok::<(), JobError>(())
                });
                match sup.admit_with_default_logger(job) {
                    Ok(done) => {
                        wins.fetch_add(1, Ordering::SeqCst);
                        Some(done)
                    }
                    Err(e) => {
                        assert!(matches!(e, SupervisorError::AlreadyRunning { .. }));
                        None
                    }
                }
            }));
        }

        let mut winner = None;
        for h in handles {
            if let Some(done) = h.await.expect("join") {
                winner = Some(done);
            }
        }
        assert_eq!(wins.load(Ordering::SeqCst), 1);

        sup.cancel();
        wait(&winner.expect("one winner")).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_status_never_torn() {
        let sup = Arc::new(test_supervisor());
        let job: JobRef = JobFn::arc("spin", |ctx: JobContext| async move {
            for i in 0..50 {
                ctx.logger().info(&format!("step {i}"));
                tokio::task::yield_now().await;
            }
            Ok::<(), JobError>(())
        });
        let done = sup.admit_with_default_logger(job).expect("admit");

        let reader = {
            let sup = sup.clone();
            let done = done.clone();
            tokio::spawn(async move {
                while !done.is_closed() {
                    let st = sup.status();
                    match st.phase {
                        JobPhase::Running => {
                            assert_eq!(st.job_name(), Some("spin"));
                            assert!(st.last_error.is_none());
                        }
                        JobPhase::Completed => assert_eq!(st.job_name(), Some("spin")),
                        JobPhase::Idle => panic!("idle while job held"),
                    }
                    tokio::task::yield_now().await;
                }
            })
        };

        wait(&done).await;
        reader.await.expect("reader");
        assert_eq!(sup.status().phase, JobPhase::Completed);
    }

    #[tokio::test]
    async fn test_state_settled_before_completion_closes() {
        let sup = Arc::new(test_supervisor());
        let job: JobRef = JobFn::arc("fails", |_ctx: JobContext| async move {
            Err::<(), JobError>(JobError::fail("boom"))
        });
        let done = sup.admit_with_default_logger(job).expect("admit");

        let observer = {
            let sup = sup.clone();
            let done = done.clone();
            tokio::spawn(async move {
                done.wait().await;
                sup.status()
            })
        };

        let st = observer.await.expect("observer");
        assert_eq!(st.phase, JobPhase::Completed);
        assert_eq!(st.last_error, Some(JobError::fail("boom")));
    }

    #[tokio::test]
    async fn test_log_is_teed_and_replaced_per_job() {
        let sup = test_supervisor();
        let caller = Arc::new(MemoryLogger::new());

        let job: JobRef = JobFn::arc("first", |ctx: JobContext| async move {
            ctx.logger().warn("lagging replica");
            Ok::<(), JobError>(())
        });
        let done = sup.admit(job, caller.clone()).expect("admit");
        wait(&done).await;

        let first_log = sup.current_log().expect("log");
        assert_eq!(first_log.entries(), caller.entries());
        assert!(sup.status().log_text().contains("[warn] lagging replica"));

        sup.reset().expect("reset");
        let job: JobRef = JobFn::arc("second", |ctx: JobContext| async move {
            ctx.logger().info("second run");
            Ok::<(), JobError>(())
        });
        let done = sup.admit(job, caller.clone()).expect("admit");
        wait(&done).await;

        assert!(!first_log.render().contains("second run"));
        assert!(sup.status().log_text().contains("second run"));
        assert!(!sup.status().log_text().contains("lagging replica"));
    }

    #[tokio::test]
    async fn test_default_logger_is_not_teed_into() {
        let default = Arc::new(MemoryLogger::new());
        let sup = Supervisor::builder(SupervisorConfig::default())
            .with_default_logger(default.clone())
            .build();

        let job: JobRef = JobFn::arc("quiet", |ctx: JobContext| async move {
            ctx.logger().info("hello");
            Ok::<(), JobError>(())
        });
        let done = sup.admit_with_default_logger(job).expect("admit");
        wait(&done).await;

        assert!(default.is_empty());
        assert!(sup.status().log_text().contains("hello"));
    }

    fn shutdown_jobs(rx: &mut broadcast::Receiver<Event>) -> Vec<Option<String>> {
        let mut jobs = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if ev.kind == EventKind::ShutdownRequested {
                jobs.push(ev.job.as_deref().map(str::to_string));
            }
        }
        jobs
    }

    #[tokio::test]
    async fn test_shutdown_signal_cancels_running_job() {
        let sup = test_supervisor();
        let mut rx = sup.subscribe();
        assert_eq!(sup.on_shutdown_signal(), ShutdownAction::Idle);
        assert_eq!(shutdown_jobs(&mut rx), vec![None]);

        let done = sup.admit_with_default_logger(until_cancelled("a")).expect("admit");
        assert_eq!(sup.on_shutdown_signal(), ShutdownAction::Cancelled);
        assert_eq!(shutdown_jobs(&mut rx), vec![Some("a".to_string())]);
        wait(&done).await;

        assert_eq!(sup.status().last_error, Some(JobError::Canceled));
        assert_eq!(sup.on_shutdown_signal(), ShutdownAction::Idle);
        assert_eq!(shutdown_jobs(&mut rx), vec![Some("a".to_string())]);

        sup.reset().expect("reset");
        assert_eq!(sup.on_shutdown_signal(), ShutdownAction::Idle);
        assert_eq!(shutdown_jobs(&mut rx), vec![None]);
    }

    #[test]
    fn test_admit_outside_runtime_leaves_state_idle() {
        let sup = test_supervisor();
        let mut rx = sup.subscribe();

        let err = sup.admit_with_default_logger(until_cancelled("a")).err();
        assert_eq!(err, Some(SupervisorError::NoRuntime { job: "a".into() }));
        assert_eq!(sup.status().phase, JobPhase::Idle);
        assert!(sup.status().job.is_none());
        assert!(sup.reset().is_ok());

        let ev = rx.try_recv().expect("rejection event");
        assert_eq!(ev.kind, EventKind::AdmissionRejected);
        assert_eq!(ev.reason.as_deref(), Some("supervisor_no_runtime"));

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        rt.block_on(async {
            let done = sup.admit_with_default_logger(until_cancelled("b")).expect("admit b");
            assert_eq!(sup.status().job_name(), Some("b"));
            sup.cancel();
            wait(&done).await;
        });
    }

    #[tokio::test]
    async fn test_events_follow_lifecycle() {
        let sup = test_supervisor();
        let mut rx = sup.subscribe();

        let done = sup.admit_with_default_logger(until_cancelled("a")).expect("admit");
        let _ = sup.admit_with_default_logger(until_cancelled("b"));
        sup.cancel();
        wait(&done).await;
        sup.on_shutdown_signal();
        sup.reset().expect("reset");

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::JobAdmitted,
                EventKind::AdmissionRejected,
                EventKind::CancelRequested,
                EventKind::JobFailed,
                EventKind::ShutdownRequested,
                EventKind::StateReset,
            ]
        );
    }

    #[tokio::test]
    async fn test_run_and_wait() {
        let sup = test_supervisor();
        let token = CancellationToken::new();
        let ok: JobRef = JobFn::arc("ok", |_ctx: JobContext| async move { Ok::<(), JobError>(()) });
        sup.run_and_wait(ok, sup.default_logger(), &token)
            .await
            .expect("ok job");

        sup.reset().expect("reset");
        token.cancel();
        let err = sup
            .run_and_wait(until_cancelled("long"), sup.default_logger(), &token)
            .await
            .err();
        assert_eq!(
            err,
            Some(SupervisorError::JobFailed {
                job: "long".into(),
                source: JobError::Canceled,
            })
        );
    }
}
