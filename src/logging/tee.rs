//! # Tee logger.
//!
//! [`TeeLogger`] duplicates each entry into two sinks. The supervisor builds one
//! per admitted job: the job's [`MemoryLogger`](super::MemoryLogger) first, the
//! caller's logger second.

use super::logger::{LogEntry, Logger, LoggerRef};

/// Logger that writes every entry to both `first` and `second`.
pub struct TeeLogger {
    first: LoggerRef,
    second: LoggerRef,
}

impl TeeLogger {
    /// Creates a tee over two sinks.
    pub fn new(first: LoggerRef, second: LoggerRef) -> Self {
        Self { first, second }
    }
}

impl Logger for TeeLogger {
    fn log(&self, entry: LogEntry) {
        self.first.log(entry.clone());
        self.second.log(entry);
    }
}
