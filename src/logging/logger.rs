//! # Logger trait and log entries.
//!
//! [`Logger`] is a synchronous sink for [`LogEntry`] values. Jobs hold it as a
//! [`LoggerRef`] (`Arc<dyn Logger>`) and usually call the level helpers
//! ([`Logger::info`], [`Logger::warn`], ...) instead of building entries.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Progress information.
    Info,
    /// Something unexpected that the job recovered from.
    Warning,
    /// Failure reported by the job.
    Error,
    /// Raw console output (printed as-is, without a level prefix).
    Console,
}

impl LogLevel {
    /// Returns a short stable label for rendering.
    pub fn as_label(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
            LogLevel::Console => "console",
        }
    }
}

/// One structured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time the entry was created.
    pub at: SystemTime,
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

impl LogEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            at: SystemTime::now(),
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    /// Renders the entry as a single line, e.g. `[info] copying shard 3`.
    ///
    /// Console entries are rendered without a prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Console => f.write_str(&self.message),
            level => write!(f, "[{}] {}", level.as_label(), self.message),
        }
    }
}

/// # Sink accepting structured log lines.
///
/// Implementations must be cheap and non-blocking: jobs call them from their
/// own execution task, and the supervisor calls them while bookkeeping.
pub trait Logger: Send + Sync + 'static {
    /// Records one entry.
    fn log(&self, entry: LogEntry);

    /// Records an info line.
    fn info(&self, message: &str) {
        self.log(LogEntry::now(LogLevel::Info, message));
    }

    /// Records a warning line.
    fn warn(&self, message: &str) {
        self.log(LogEntry::now(LogLevel::Warning, message));
    }

    /// Records an error line.
    fn error(&self, message: &str) {
        self.log(LogEntry::now(LogLevel::Error, message));
    }

    /// Records raw console output.
    fn console(&self, message: &str) {
        self.log(LogEntry::now(LogLevel::Console, message));
    }
}

/// Shared handle to a logger.
pub type LoggerRef = Arc<dyn Logger>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let e = LogEntry::now(LogLevel::Warning, "slow tablet");
        assert_eq!(e.to_string(), "[warn] slow tablet");

        let e = LogEntry::now(LogLevel::Console, "raw line");
        assert_eq!(e.to_string(), "raw line");
    }
}
