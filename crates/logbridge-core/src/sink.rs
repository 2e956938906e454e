//! Backend seam between the bridge and a logging subsystem.

use std::ffi::CStr;
use std::sync::Arc;

use crate::handle::LogHandle;
use crate::severity::Severity;

/// A logging subsystem the bridge can forward records to.
///
/// Implementations must be safe to call from any thread concurrently; the
/// bridge adds no locking of its own.
pub trait Sink: Send + Sync {
    /// The process-wide default handle. Must return the same value on every call.
    fn default_handle(&self) -> LogHandle;

    /// Deliver one record. Best effort; failures are not reported.
    fn emit(&self, handle: LogHandle, severity: Severity, message: &CStr);

    /// Whether records of `severity` against `handle` would be kept.
    fn type_enabled(&self, _handle: LogHandle, _severity: Severity) -> bool {
        true
    }

    /// Ask the subsystem for a handle tagged with `subsystem` and `category`.
    fn create_handle(&self, subsystem: &CStr, category: &CStr) -> Option<LogHandle>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn default_handle(&self) -> LogHandle {
        (**self).default_handle()
    }

    fn emit(&self, handle: LogHandle, severity: Severity, message: &CStr) {
        (**self).emit(handle, severity, message);
    }

    fn type_enabled(&self, handle: LogHandle, severity: Severity) -> bool {
        (**self).type_enabled(handle, severity)
    }

    fn create_handle(&self, subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
        (**self).create_handle(subsystem, category)
    }
}
