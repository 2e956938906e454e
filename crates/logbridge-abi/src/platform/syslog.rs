//! syslog(3) backend.
//!
//! A handle points at a [`Tag`]. The default tag has no prefix, so records
//! carry only the process identity syslog already adds. Created tags prefix
//! the body with `[subsystem:category]`. Tags are leaked: a handle stays
//! valid for the life of the process. The registry in the parent module makes
//! sure each `subsystem:category` pair is leaked at most once.

use std::ffi::{CStr, CString, c_int};

use logbridge_core::format::{PASSTHROUGH_FORMAT, TAGGED_PASSTHROUGH_FORMAT};
use logbridge_core::{LogHandle, Severity};

struct Tag {
    prefix: Option<CString>,
}

static DEFAULT_TAG: Tag = Tag { prefix: None };

pub(super) fn priority(severity: Severity) -> c_int {
    match severity {
        Severity::Default => libc::LOG_NOTICE,
        Severity::Info => libc::LOG_INFO,
        Severity::Debug => libc::LOG_DEBUG,
        Severity::Error => libc::LOG_ERR,
        Severity::Fault => libc::LOG_CRIT,
    }
}

pub(super) fn default_handle() -> LogHandle {
    LogHandle::from_raw(&DEFAULT_TAG as *const Tag as usize)
}

pub(super) fn emit(handle: LogHandle, severity: Severity, message: &CStr) {
    // SAFETY: handles originate from default_handle/create_handle and their
    // tags are never freed.
    let tag = unsafe { &*(handle.as_raw() as *const Tag) };
    let priority = priority(severity);
    match &tag.prefix {
        // SAFETY: constant format consumes exactly the C strings passed.
        None => unsafe { libc::syslog(priority, PASSTHROUGH_FORMAT.as_ptr(), message.as_ptr()) },
        Some(prefix) => unsafe {
            libc::syslog(
                priority,
                TAGGED_PASSTHROUGH_FORMAT.as_ptr(),
                prefix.as_ptr(),
                message.as_ptr(),
            )
        },
    }
}

pub(super) fn type_enabled(_handle: LogHandle, severity: Severity) -> bool {
    // A zero mask queries without changing anything.
    let mask = unsafe { libc::setlogmask(0) };
    mask & (1 << priority(severity)) != 0
}

pub(super) fn create_handle(subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
    let mut bytes = Vec::with_capacity(subsystem.count_bytes() + category.count_bytes() + 1);
    bytes.extend_from_slice(subsystem.to_bytes());
    bytes.push(b':');
    bytes.extend_from_slice(category.to_bytes());
    let prefix = CString::new(bytes).ok()?;
    let tag: &'static Tag = Box::leak(Box::new(Tag {
        prefix: Some(prefix),
    }));
    Some(LogHandle::from_raw(tag as *const Tag as usize))
}
