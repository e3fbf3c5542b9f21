pub mod shim_macros;
pub mod tracing_subscriber;

/// Levels of the host logging subsystem that inference library messages end up at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HostLevel {
    Debug,
    Warn,
    Error,
    /// Logged, then the process is aborted. See [`crate::sink::abort_on_fatal`].
    Fatal,
}

impl HostLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostLevel::Debug => "DEBUG",
            HostLevel::Warn => "WARN",
            HostLevel::Error => "ERROR",
            HostLevel::Fatal => "FATAL",
        }
    }
}

#[cfg(feature = "build-tracing")]
impl HostLevel {
    /// `tracing` has no fatal level, fatal records are emitted as errors.
    pub fn into_tracing_level(&self) -> tracing::Level {
        match self {
            HostLevel::Debug => tracing::Level::DEBUG,
            HostLevel::Warn => tracing::Level::WARN,
            HostLevel::Error | HostLevel::Fatal => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_level_ordering() {
        assert!(HostLevel::Debug < HostLevel::Warn);
        assert!(HostLevel::Warn < HostLevel::Error);
        assert!(HostLevel::Error < HostLevel::Fatal);
    }

    #[cfg(feature = "build-tracing")]
    #[test]
    fn test_fatal_maps_to_tracing_error() {
        assert_eq!(HostLevel::Fatal.into_tracing_level(), tracing::Level::ERROR);
        assert_eq!(HostLevel::Debug.into_tracing_level(), tracing::Level::DEBUG);
    }
}
