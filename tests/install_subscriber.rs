use trt_logger::{get_logger, tracing::tracing_subscriber::install_tracing_subscriber, Severity};

#[test]
fn severity_sets_the_global_level_filter() {
    install_tracing_subscriber(Some(Severity::Warning));

    #[cfg(feature = "build-tracing")]
    {
        assert!(tracing::enabled!(tracing::Level::WARN));
        assert!(tracing::enabled!(tracing::Level::ERROR));
        assert!(!tracing::enabled!(tracing::Level::DEBUG));
    }

    // a second install is reported and leaves the first filter in place
    install_tracing_subscriber(None);

    #[cfg(feature = "build-tracing")]
    assert!(!tracing::enabled!(tracing::Level::DEBUG));

    get_logger().log(Severity::Warning, "visible after install");
    get_logger().log(Severity::Info, "filtered out at warn");
}
