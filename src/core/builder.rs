use std::sync::Arc;

use crate::core::{config::SupervisorConfig, supervisor::Supervisor};
use crate::logging::{ConsoleLogger, LoggerRef};

/// Builder for constructing a [`Supervisor`] with optional settings.
pub struct SupervisorBuilder {
    cfg: SupervisorConfig,
    default_logger: Option<LoggerRef>,
}

impl SupervisorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: SupervisorConfig) -> Self {
        Self {
            cfg,
            default_logger: None,
        }
    }

    /// Replaces the default logger (a [`ConsoleLogger`] otherwise).
    ///
    /// Jobs admitted with this instance still log to a fresh console logger;
    /// see [`Supervisor::admit`].
    pub fn with_default_logger(mut self, logger: LoggerRef) -> Self {
        self.default_logger = Some(logger);
        self
    }

    /// Builds and returns the supervisor, shared so it can be handed to
    /// [`Supervisor::install_signal_handlers`] and to command dispatchers.
    pub fn build(self) -> Arc<Supervisor> {
        let logger = self
            .default_logger
            .unwrap_or_else(|| Arc::new(ConsoleLogger::new()));
        Arc::new(Supervisor::with_default_logger(self.cfg, logger))
    }
}
