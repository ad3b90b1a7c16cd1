//! # Console logger.
//!
//! [`ConsoleLogger`] forwards every entry to `tracing`, so job output ends up
//! wherever the host process routes its logs. It is the supervisor's default
//! logger.

use tracing::{error, info, warn};

use super::logger::{LogEntry, LogLevel, Logger};

/// Logger that forwards entries to `tracing` under the `jobvisor::job` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    /// Construct a new [`ConsoleLogger`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info | LogLevel::Console => {
                info!(target: "jobvisor::job", "{}", entry.message)
            }
            LogLevel::Warning => warn!(target: "jobvisor::job", "{}", entry.message),
            LogLevel::Error => error!(target: "jobvisor::job", "{}", entry.message),
        }
    }
}
