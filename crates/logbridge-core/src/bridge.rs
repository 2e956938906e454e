//! The bridge façade.
//!
//! Stateless forwarding from `(severity, [handle], message)` to one sink call.
//! The only decision made here is resolving the null handle to the sink's
//! default handle; everything else is the sink's business.

use std::ffi::{CStr, CString};

use crate::error::BridgeError;
use crate::handle::LogHandle;
use crate::severity::Severity;
use crate::sink::Sink;

#[derive(Debug, Default, Clone)]
pub struct Bridge<S> {
    sink: S,
}

impl<S> Bridge<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: Sink> Bridge<S> {
    /// The sink's process-wide default handle.
    #[must_use]
    pub fn default_handle(&self) -> LogHandle {
        self.sink.default_handle()
    }

    /// Null handles address the default handle; anything else passes through.
    #[must_use]
    pub fn resolve(&self, handle: LogHandle) -> LogHandle {
        if handle.is_null() {
            self.default_handle()
        } else {
            handle
        }
    }

    /// Emit against the default handle.
    pub fn emit(&self, severity: Severity, message: &CStr) {
        self.sink.emit(self.default_handle(), severity, message);
    }

    /// Emit against an explicit handle.
    pub fn emit_with(&self, handle: LogHandle, severity: Severity, message: &CStr) {
        self.sink.emit(self.resolve(handle), severity, message);
    }

    pub fn log(&self, message: &CStr) {
        self.emit(Severity::Default, message);
    }

    pub fn info(&self, message: &CStr) {
        self.emit(Severity::Info, message);
    }

    pub fn debug(&self, message: &CStr) {
        self.emit(Severity::Debug, message);
    }

    pub fn error(&self, message: &CStr) {
        self.emit(Severity::Error, message);
    }

    pub fn fault(&self, message: &CStr) {
        self.emit(Severity::Fault, message);
    }

    #[must_use]
    pub fn type_enabled(&self, handle: LogHandle, severity: Severity) -> bool {
        self.sink.type_enabled(self.resolve(handle), severity)
    }

    /// Obtain a handle tagged with `subsystem` (reverse-DNS) and `category`.
    pub fn create_handle(&self, subsystem: &str, category: &str) -> Result<LogHandle, BridgeError> {
        let c_subsystem =
            CString::new(subsystem).map_err(|_| BridgeError::InteriorNul { field: "subsystem" })?;
        let c_category =
            CString::new(category).map_err(|_| BridgeError::InteriorNul { field: "category" })?;
        self.sink
            .create_handle(&c_subsystem, &c_category)
            .ok_or_else(|| BridgeError::HandleCreation {
                subsystem: subsystem.to_string(),
                category: category.to_string(),
            })
    }
}
