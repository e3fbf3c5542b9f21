//! An internal error aborts the process, so it is observed from a child process running
//! this same test binary.

use std::{
    fmt::Arguments,
    process::{Command, Output},
};

use trt_logger::{tracing::HostLevel, LogSink, Severity, SeverityFilteredLogger};

const CHILD_ENV: &str = "TRT_LOGGER_ABORT_CHILD";

fn is_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test: &str) -> Output {
    let exe = std::env::current_exe().expect("current exe");
    Command::new(exe)
        .args(["--exact", test, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("child test runs")
}

fn assert_aborted(output: &Output) {
    assert!(!output.status.success());

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT");
    }
}

struct PanickingSink;

impl LogSink for PanickingSink {
    fn write(&self, level: HostLevel, args: Arguments<'_>) {
        if level == HostLevel::Fatal {
            panic!("sink failed while writing: {args}");
        }
    }
}

#[test]
fn child_logs_internal_error() {
    if !is_child() {
        return;
    }

    #[cfg(feature = "build-tracing")]
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let logger = SeverityFilteredLogger::new("AbortingLogger");
    logger.log(Severity::InternalError, "engine state corrupted");

    // only reached if the abort did not happen
    std::process::exit(0);
}

#[test]
fn child_internal_error_with_panicking_sink() {
    if !is_child() {
        return;
    }

    let logger = SeverityFilteredLogger::with_sink("PanickingLogger", PanickingSink);
    let unwound = std::panic::catch_unwind(|| {
        logger.log(Severity::InternalError, "engine state corrupted");
    });

    // only reached if the panic escaped past the abort
    eprintln!("still running, unwound={}", unwound.is_err());
    std::process::exit(0);
}

#[test]
fn internal_error_terminates_the_process() {
    let output = run_child("child_logs_internal_error");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AbortingLogger engine state corrupted"), "{stderr}");
    #[cfg(feature = "build-tracing")]
    assert!(stderr.contains("fatal=true"), "{stderr}");
    #[cfg(not(feature = "build-tracing"))]
    assert!(stderr.contains("FATAL"), "{stderr}");
}

#[test]
fn panicking_sink_cannot_swallow_internal_error() {
    let output = run_child("child_internal_error_with_panicking_sink");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("still running"), "{stderr}");
}

#[test]
fn suppressed_internal_error_keeps_running() {
    let logger = SeverityFilteredLogger::new("Survivor");
    logger.suppress_logger_msgs(Severity::InternalError);
    logger.log(Severity::InternalError, "ignored");
}
