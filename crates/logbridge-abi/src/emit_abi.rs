//! Severity-by-code entry points.
//!
//! `type_code` is the numeric `os_log_type_t` value; unknown codes select the
//! default tier.

use std::ffi::c_char;

use logbridge_core::Severity;

use crate::bridge;
use crate::util::{RawLogHandle, forward, handle_from_raw};

abi_fn! {
    fn logbridge_emit(log: RawLogHandle, type_code: u8, message: *const c_char) {
        forward(log, Severity::from_type_code(type_code), message)
    }
}

abi_fn! {
    /// Whether a record of `type_code` against `log` would currently be kept.
    fn logbridge_type_enabled(log: RawLogHandle, type_code: u8) -> bool {
        bridge().type_enabled(handle_from_raw(log), Severity::from_type_code(type_code))
    }
}
