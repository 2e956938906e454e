//! Implicit-handle surface: every call logs against the default handle.

use logbridge_core::Severity;

severity_fns! {
    implicit:
    /// Default-tier record.
    logbridge_default_log => Severity::Default;
    logbridge_default_log_info => Severity::Info;
    logbridge_default_log_debug => Severity::Debug;
    logbridge_default_log_error => Severity::Error;
    logbridge_default_log_fault => Severity::Fault;
}
