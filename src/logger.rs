//! The severity-filtered logger handed to the inference library.
//!
//! Messages are tagged with the logger's name and routed to the host sink:
//!
//! | Library severity | Host level |
//! |------------------|------------|
//! | Verbose, Info    | Debug      |
//! | Warning          | Warn       |
//! | Error            | Error      |
//! | InternalError    | Fatal, then the process aborts |
//!
//! The library's info level is too chatty for the host's info level, hence the demotion.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    OnceLock,
};

use crate::{
    config::LoggerConfig,
    severity::Severity,
    sink::{abort_on_fatal, LogSink, TracingSink},
    tracing::{shim_macros::warn, HostLevel},
};

/// Name of the default logger, also its identifier in the global registry.
pub const DEFAULT_LOGGER_NAME: &str = "DefaultLogger";

/// The logger interface the inference library calls into.
pub trait InferLogger: Send + Sync {
    /// Must not unwind, see [`crate::ffi`] for the C boundary.
    fn log(&self, severity: Severity, msg: &str);
}

/// One bit per [`Severity`], set bits are dropped.
#[derive(Debug, Default)]
pub struct SuppressionMask(AtomicU32);

impl SuppressionMask {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Returns whether the severity was suppressed before.
    pub fn suppress(&self, severity: Severity) -> bool {
        self.0.fetch_or(severity.bit(), Ordering::AcqRel) & severity.bit() != 0
    }

    /// Returns whether the severity was suppressed before.
    pub fn unsuppress(&self, severity: Severity) -> bool {
        self.0.fetch_and(!severity.bit(), Ordering::AcqRel) & severity.bit() != 0
    }

    pub fn is_suppressed(&self, severity: Severity) -> bool {
        self.bits() & severity.bit() != 0
    }

    pub fn bits(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }
}

pub struct SeverityFilteredLogger<S = TracingSink> {
    name: String,
    suppressed: SuppressionMask,
    sink: S,
}

impl SeverityFilteredLogger<TracingSink> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, TracingSink)
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = Self::new(config.name.clone());
        for &severity in &config.suppressed {
            logger.suppress_logger_msgs(severity);
        }
        logger
    }
}

impl<S: LogSink> SeverityFilteredLogger<S> {
    pub fn with_sink(name: impl Into<String>, sink: S) -> Self {
        Self {
            name: name.into(),
            suppressed: SuppressionMask::new(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forwards `msg` to the host sink unless `severity` is suppressed.
    ///
    /// An [`Severity::InternalError`] message aborts the process after it is written.
    pub fn log(&self, severity: Severity, msg: &str) {
        if self.suppressed.is_suppressed(severity) {
            return;
        }

        let level = match severity {
            Severity::Verbose | Severity::Info => HostLevel::Debug,
            Severity::Warning => HostLevel::Warn,
            Severity::Error => HostLevel::Error,
            Severity::InternalError => HostLevel::Fatal,
        };

        // armed before the write so a panicking sink still ends in an abort
        let _abort = (level == HostLevel::Fatal).then_some(AbortOnDrop);

        self.sink
            .write(level, format_args!("{} {}", self.name, msg));
    }

    /// Same as [`log`](Self::log) for a raw ABI severity; unknown values are ignored.
    pub fn log_raw(&self, raw: i32, msg: &str) {
        if let Some(severity) = Severity::from_raw(raw) {
            self.log(severity, msg);
        }
    }

    pub fn suppress_logger_msgs(&self, severity: Severity) {
        self.suppressed.suppress(severity);
    }

    pub fn unsuppress_logger_msgs(&self, severity: Severity) {
        self.suppressed.unsuppress(severity);
    }

    pub fn suppress_raw(&self, raw: i32) {
        if let Some(severity) = Severity::from_raw(raw) {
            self.suppress_logger_msgs(severity);
        }
    }

    pub fn unsuppress_raw(&self, raw: i32) {
        if let Some(severity) = Severity::from_raw(raw) {
            self.unsuppress_logger_msgs(severity);
        }
    }

    pub fn is_suppressed(&self, severity: Severity) -> bool {
        self.suppressed.is_suppressed(severity)
    }

    /// Raw mask, bit `n` belongs to the severity with raw value `n`.
    pub fn suppressed_mask(&self) -> u32 {
        self.suppressed.bits()
    }

    /// Suppresses `severity` until the returned guard is dropped.
    pub fn scoped_suppression(&self, severity: Severity) -> SuppressionGuard<'_> {
        let was_suppressed = self.suppressed.suppress(severity);
        SuppressionGuard {
            mask: &self.suppressed,
            severity,
            was_suppressed,
        }
    }
}

impl<S: LogSink> InferLogger for SeverityFilteredLogger<S> {
    fn log(&self, severity: Severity, msg: &str) {
        SeverityFilteredLogger::log(self, severity, msg)
    }
}

impl<S> std::fmt::Debug for SeverityFilteredLogger<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeverityFilteredLogger")
            .field("name", &self.name)
            .field("suppressed", &format_args!("{:#07b}", self.suppressed.bits()))
            .finish()
    }
}

struct AbortOnDrop;

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        abort_on_fatal();
    }
}

/// Restores the previous suppression state of one severity when dropped.
#[must_use = "dropping the guard immediately restores the previous suppression state"]
pub struct SuppressionGuard<'a> {
    mask: &'a SuppressionMask,
    severity: Severity,
    was_suppressed: bool,
}

impl<'a> SuppressionGuard<'a> {
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl<'a> Drop for SuppressionGuard<'a> {
    fn drop(&mut self) {
        if !self.was_suppressed {
            self.mask.unsuppress(self.severity);
        }
    }
}

/// The process-wide logger, created on first access and never torn down.
///
/// Suppressions listed in `TRT_LOGGER_SUPPRESS` are applied once at construction.
pub fn get_logger() -> &'static SeverityFilteredLogger {
    static LOGGER: OnceLock<SeverityFilteredLogger> = OnceLock::new();

    LOGGER.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_else(|err| {
            warn!("ignoring {}: {err}", crate::config::SUPPRESS_ENV_VAR);
            LoggerConfig::default()
        });
        SeverityFilteredLogger::from_config(&config)
    })
}
