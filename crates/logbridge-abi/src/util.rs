//! Shared internal utilities for ABI adapters.

use std::ffi::{CStr, c_char, c_void};

use logbridge_core::{LogHandle, Severity};

use crate::bridge;

/// Handle as it crosses the C boundary (`logbridge_handle_t`).
pub type RawLogHandle = *mut c_void;

#[inline]
#[must_use]
pub fn handle_from_raw(log: RawLogHandle) -> LogHandle {
    LogHandle::from_raw(log as usize)
}

#[inline]
#[must_use]
pub fn handle_to_raw(handle: LogHandle) -> RawLogHandle {
    handle.as_raw() as RawLogHandle
}

/// Borrow a C message for the duration of one call. `None` for NULL.
///
/// # Safety
///
/// A non-null `ptr` must reference a NUL-terminated string that stays
/// readable and unmodified for `'a`.
#[inline]
pub unsafe fn message_ref<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) })
    }
}

/// Emit `message` at `severity` against `log` (NULL = default handle).
///
/// # Safety
///
/// Same contract as [`message_ref`]; a non-null `log` must be a handle issued
/// by this library.
#[inline]
pub unsafe fn forward(log: RawLogHandle, severity: Severity, message: *const c_char) {
    if let Some(message) = unsafe { message_ref(message) } {
        bridge().emit_with(handle_from_raw(log), severity, message);
    }
}

/// Emit `message` at `severity` against the default handle.
///
/// # Safety
///
/// Same contract as [`message_ref`].
#[inline]
pub unsafe fn forward_default(severity: Severity, message: *const c_char) {
    if let Some(message) = unsafe { message_ref(message) } {
        bridge().emit(severity, message);
    }
}
