//! Routes an inference library's log messages into the host's `tracing` setup.
//!
//! The library reports messages with its own five-level [`Severity`]. A
//! [`SeverityFilteredLogger`] drops severities that are currently suppressed, demotes the
//! chatty verbose and info levels to debug, and aborts the process on internal errors.
//! [`get_logger`] hands out the process-wide instance, which is also registered under
//! [`DEFAULT_LOGGER_NAME`] in the [`logger_registry`].

pub mod config;
pub mod ffi;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod tracing;

pub use config::LoggerConfig;
pub use logger::{
    get_logger, InferLogger, SeverityFilteredLogger, SuppressionGuard, DEFAULT_LOGGER_NAME,
};
pub use registry::{logger_registry, LoggerRegistry, RegistryError};
pub use severity::{is_valid_severity, ParseSeverityError, Severity};
pub use sink::{LogSink, TracingSink};
