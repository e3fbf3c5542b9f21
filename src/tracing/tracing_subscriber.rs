use crate::severity::Severity;

/// Installs a compact stderr subscriber so forwarded messages become visible.
///
/// With a severity, records at or above the host level that severity is routed to are
/// shown. Verbose and Info are demoted to debug by the logger, so both enable DEBUG.
/// Without one, `RUST_LOG` decides.
#[cfg(feature = "build-tracing")]
pub fn install_tracing_subscriber(severity: Option<Severity>) {
    use tracing_subscriber::{
        prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_thread_ids(false)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .compact();

    if let Some(severity) = severity {
        let filter = level_filter(severity);

        tracing_subscriber::registry()
            .with(formatter)
            .with(filter)
            .try_init()
            .unwrap_or_else(|_| eprintln!("Failed to set tracing subscriber."));
    } else {
        let filter = EnvFilter::from_default_env();

        tracing_subscriber::registry()
            .with(formatter)
            .with(filter)
            .try_init()
            .unwrap_or_else(|_| eprintln!("Failed to set tracing subscriber."));
    };
}

#[cfg(feature = "build-tracing")]
fn level_filter(severity: Severity) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter;

    match severity {
        Severity::Verbose | Severity::Info => LevelFilter::DEBUG,
        Severity::Warning => LevelFilter::WARN,
        Severity::Error | Severity::InternalError => LevelFilter::ERROR,
    }
}

#[cfg(not(feature = "build-tracing"))]
pub fn install_tracing_subscriber(_severity: Option<Severity>) {}
