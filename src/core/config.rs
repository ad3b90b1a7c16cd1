//! # Supervisor configuration.
//!
//! Provides [`SupervisorConfig`] centralized settings for the supervisor.
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by the bus
//! - `exit_on_idle_signal = false` → a termination signal received while no job
//!   runs is only published as an event (useful in tests and embedders that own
//!   process shutdown themselves)

/// Global configuration for the supervisor.
///
/// ## Field semantics
/// - `bus_capacity`: Event bus ring buffer size (min 1; clamped by Bus)
/// - `exit_on_idle_signal`: Terminate the process when a signal arrives and no job runs
/// - `idle_exit_code`: Exit code used in that case
#[derive(Clone, Debug)]
pub struct SupervisorConfig {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Receivers that lag behind more than `bus_capacity` events observe
    /// `Lagged` and skip older items.
    pub bus_capacity: usize,

    /// Whether a termination signal with no running job exits the process.
    ///
    /// When a job is running, the signal only cancels it.
    pub exit_on_idle_signal: bool,

    /// Process exit code for an idle shutdown.
    pub idle_exit_code: i32,
}

impl SupervisorConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for SupervisorConfig {
    /// Default configuration:
    ///
    /// - `bus_capacity = 256`
    /// - `exit_on_idle_signal = true`
    /// - `idle_exit_code = 0`
    fn default() -> Self {
        Self {
            bus_capacity: 256,
            exit_on_idle_signal: true,
            idle_exit_code: 0,
        }
    }
}
