//! C entry points operating on the default logger.
//!
//! Severities arrive as the library's raw integers. Nothing here may unwind into the
//! caller, so every call runs under `catch_unwind` and a panic is swallowed after being
//! reported as an error event.

use std::{
    ffi::{c_char, CStr},
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{logger::get_logger, tracing::shim_macros::error};

fn guarded(entry: &str, f: impl FnOnce()) {
    if catch_unwind(AssertUnwindSafe(f)).is_err() {
        error!("panic in {entry} was not propagated");
    }
}

/// # Safety
///
/// `msg` must be null or point to a nul-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn trt_logger_log(severity: i32, msg: *const c_char) {
    guarded("trt_logger_log", || {
        let msg = if msg.is_null() {
            "".into()
        } else {
            unsafe { CStr::from_ptr(msg) }.to_string_lossy()
        };
        get_logger().log_raw(severity, &msg);
    });
}

#[no_mangle]
pub extern "C" fn trt_logger_suppress(severity: i32) {
    guarded("trt_logger_suppress", || get_logger().suppress_raw(severity));
}

#[no_mangle]
pub extern "C" fn trt_logger_unsuppress(severity: i32) {
    guarded("trt_logger_unsuppress", || {
        get_logger().unsuppress_raw(severity)
    });
}
