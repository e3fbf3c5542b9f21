use std::fmt::{Arguments, Display};

use crate::tracing::HostLevel;

/// Level-specific write operations of the host logging subsystem.
///
/// Implementations must not abort on [`HostLevel::Fatal`] themselves, the logger does
/// that once the write returns or unwinds.
pub trait LogSink: Send + Sync {
    fn write(&self, level: HostLevel, args: Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, level: HostLevel, args: Arguments<'_>) {
        (**self).write(level, args)
    }
}

/// Forwards records to `tracing`, or to colored stderr lines without `build-tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: HostLevel, args: Arguments<'_>) {
        #[cfg(feature = "build-tracing")]
        match level {
            HostLevel::Debug => tracing::debug!("{}", args),
            HostLevel::Warn => tracing::warn!("{}", args),
            HostLevel::Error => tracing::error!("{}", args),
            HostLevel::Fatal => tracing::error!(fatal = true, "{}", args),
        };

        #[cfg(not(feature = "build-tracing"))]
        {
            use std::io::Write;

            #[rustfmt::skip]
            let text = match level {
                HostLevel::Debug => "DEBUG",
                HostLevel::Warn =>  "WARN ",
                HostLevel::Error => "ERROR",
                HostLevel::Fatal => "FATAL",
            };
            let color = Colored(level, &text);
            // a closed stderr has nowhere to report to
            let _ = writeln!(std::io::stderr().lock(), "{color} {args}");
        }
    }
}

pub struct Colored<'a>(pub HostLevel, pub &'a dyn Display);

impl<'a> Display for Colored<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use nu_ansi_term::Color::*;
        let color = match self.0 {
            HostLevel::Debug => Blue,
            HostLevel::Warn => Yellow,
            HostLevel::Error => Red,
            HostLevel::Fatal => Purple,
        };

        write!(f, "{}{}{}", color.prefix(), self.1, color.suffix())
    }
}

/// Irrecoverable-error policy: terminates the process after a fatal record.
///
/// Internal errors reported by the inference library leave it in an unknown state, so the
/// host treats them like its own fatal log statements. `abort` skips unwinding, which
/// keeps this usable from inside a C callback.
pub fn abort_on_fatal() -> ! {
    std::process::abort()
}

/// Runs `f` under a plain-text subscriber and returns everything it printed.
#[cfg(all(test, feature = "build-tracing"))]
pub(crate) fn capture_events(f: impl FnOnce()) -> String {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
