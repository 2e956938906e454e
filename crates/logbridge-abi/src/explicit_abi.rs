//! Explicit-handle surface: every call names the handle it logs against.
//!
//! Passing the value returned by `logbridge_default_handle` (or NULL) is
//! equivalent to the implicit-handle surface.

use logbridge_core::Severity;

severity_fns! {
    explicit:
    /// Default-tier record.
    logbridge_log => Severity::Default;
    logbridge_log_info => Severity::Info;
    logbridge_log_debug => Severity::Debug;
    logbridge_log_error => Severity::Error;
    logbridge_log_fault => Severity::Fault;
}
