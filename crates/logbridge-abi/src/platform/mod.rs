//! Platform backends.
//!
//! Apple targets bind the unified logging system directly. Other Unix targets
//! fall back to syslog(3). Both are exposed as [`PlatformSink`].
//!
//! Created handles are registered by `subsystem` and `category`; asking for
//! the same pair again returns the handle issued the first time.

use std::ffi::{CStr, CString};

use logbridge_core::{LogHandle, Severity, Sink};
use parking_lot::Mutex;

#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(target_vendor = "apple")]
use apple as imp;

#[cfg(all(unix, not(target_vendor = "apple")))]
mod syslog;
#[cfg(all(unix, not(target_vendor = "apple")))]
use syslog as imp;

#[cfg(not(unix))]
compile_error!("logbridge needs unified logging (Apple) or syslog(3) (Unix)");

struct Registered {
    subsystem: CString,
    category: CString,
    handle: LogHandle,
}

static CREATED: Mutex<Vec<Registered>> = Mutex::new(Vec::new());

fn create_or_reuse(subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
    let mut created = CREATED.lock();
    if let Some(existing) = created
        .iter()
        .find(|r| r.subsystem.as_c_str() == subsystem && r.category.as_c_str() == category)
    {
        return Some(existing.handle);
    }
    let handle = imp::create_handle(subsystem, category)?;
    created.push(Registered {
        subsystem: subsystem.to_owned(),
        category: category.to_owned(),
        handle,
    });
    Some(handle)
}

/// The operating system's logging subsystem.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSink;

impl Sink for PlatformSink {
    fn default_handle(&self) -> LogHandle {
        imp::default_handle()
    }

    fn emit(&self, handle: LogHandle, severity: Severity, message: &CStr) {
        imp::emit(handle, severity, message);
    }

    fn type_enabled(&self, handle: LogHandle, severity: Severity) -> bool {
        imp::type_enabled(handle, severity)
    }

    fn create_handle(&self, subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
        create_or_reuse(subsystem, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handle_is_stable_and_non_null() {
        let first = PlatformSink.default_handle();
        assert!(!first.is_null());
        assert_eq!(PlatformSink.default_handle(), first);
    }

    #[test]
    fn created_handle_differs_from_default() {
        let created = PlatformSink
            .create_handle(c"com.example.logbridge", c"tests")
            .unwrap();
        assert_ne!(created, PlatformSink.default_handle());
        PlatformSink.emit(created, Severity::Debug, c"created handle smoke test");
    }

    #[test]
    fn repeated_pair_reuses_handle() {
        let first = PlatformSink.create_handle(c"com.example", c"net").unwrap();
        let second = PlatformSink.create_handle(c"com.example", c"net").unwrap();
        let other = PlatformSink.create_handle(c"com.example", c"disk").unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);

        let registered = CREATED
            .lock()
            .iter()
            .filter(|r| r.subsystem.as_c_str() == c"com.example" && r.category.as_c_str() == c"net")
            .count();
        assert_eq!(registered, 1);
    }
}
