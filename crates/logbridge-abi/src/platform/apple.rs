//! Unified logging backend (macOS, iOS and friends).
//!
//! `os_log(log, "%{public}s", message)` is a C macro; this module performs
//! its expansion by hand: check `os_log_type_enabled`, encode the single
//! public string argument, and call `_os_log_impl` with the image's
//! `__dso_handle` so the platform can resolve the format string.

use std::ffi::{CStr, c_char, c_void};

use logbridge_core::format::{PUBLIC_STRING_FORMAT, encode_public_string_args};
use logbridge_core::{LogHandle, Severity};

#[repr(C)]
struct OsLog {
    _private: [u8; 0],
}

type OsLogRef = *mut OsLog;

#[allow(non_upper_case_globals)]
unsafe extern "C" {
    static _os_log_default: OsLog;
    static __dso_handle: u8;

    fn _os_log_impl(
        dso: *const c_void,
        log: OsLogRef,
        log_type: u8,
        format: *const c_char,
        buf: *mut u8,
        size: u32,
    );
    fn os_log_create(subsystem: *const c_char, category: *const c_char) -> OsLogRef;
    fn os_log_type_enabled(log: OsLogRef, log_type: u8) -> bool;
}

fn as_os_log(handle: LogHandle) -> OsLogRef {
    handle.as_raw() as OsLogRef
}

#[allow(unused_unsafe)]
pub(super) fn default_handle() -> LogHandle {
    // SAFETY: address only; the object is never read here.
    LogHandle::from_raw(unsafe { &raw const _os_log_default } as usize)
}

pub(super) fn emit(handle: LogHandle, severity: Severity, message: &CStr) {
    let log = as_os_log(handle);
    let log_type = severity.type_code();
    // SAFETY: `log` is a platform log object; `message` outlives the call and
    // the argument buffer describes exactly one pointer to it.
    unsafe {
        if !os_log_type_enabled(log, log_type) {
            return;
        }
        let mut args = encode_public_string_args(message.as_ptr() as usize);
        _os_log_impl(
            (&raw const __dso_handle).cast::<c_void>(),
            log,
            log_type,
            PUBLIC_STRING_FORMAT.as_ptr(),
            args.as_mut_ptr(),
            args.len() as u32,
        );
    }
}

pub(super) fn type_enabled(handle: LogHandle, severity: Severity) -> bool {
    // SAFETY: query only; `handle` is a platform log object.
    unsafe { os_log_type_enabled(as_os_log(handle), severity.type_code()) }
}

pub(super) fn create_handle(subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
    // SAFETY: both arguments are valid C strings for the duration of the call.
    let log = unsafe { os_log_create(subsystem.as_ptr(), category.as_ptr()) };
    if log.is_null() {
        None
    } else {
        Some(LogHandle::from_raw(log as usize))
    }
}
