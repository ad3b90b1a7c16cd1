//! # Job loggers.
//!
//! A job writes its progress through a [`Logger`]. The supervisor composes the
//! caller's logger with a fresh [`MemoryLogger`] into a [`TeeLogger`] at
//! admission time, so every line is both forwarded and retained for status
//! queries.
//!
//! ```text
//! job ── ctx.logger().info(..) ──► TeeLogger ──┬──► MemoryLogger (per job, read by status())
//!                                              └──► caller logger (ConsoleLogger → tracing, ...)
//! ```
//!
//! ## Contents
//! - [`Logger`], [`LoggerRef`] sink trait and shared handle
//! - [`LogEntry`], [`LogLevel`] one structured log line
//! - [`MemoryLogger`] in-memory sink
//! - [`ConsoleLogger`] forwards to `tracing`
//! - [`TeeLogger`] duplicates into two sinks

mod console;
mod logger;
mod memory;
mod tee;

pub use console::ConsoleLogger;
pub use logger::{LogEntry, LogLevel, Logger, LoggerRef};
pub use memory::MemoryLogger;
pub use tee::TeeLogger;
