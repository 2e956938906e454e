//! Handle accessors.
//!
//! Handles are platform objects. The library hands them out and accepts them
//! back; it never frees one.

use std::ffi::c_char;
use std::ptr;

use logbridge_core::Sink;

use crate::bridge;
use crate::util::{RawLogHandle, handle_to_raw, message_ref};

/// The platform's default handle. Identical on every call.
#[unsafe(no_mangle)]
pub extern "C" fn logbridge_default_handle() -> RawLogHandle {
    handle_to_raw(bridge().default_handle())
}

abi_fn! {
    /// Handle tagged with `subsystem` (reverse-DNS) and `category`.
    /// NULL when either argument is NULL or the platform declines.
    fn logbridge_create_handle(subsystem: *const c_char, category: *const c_char) -> RawLogHandle {
        let (Some(subsystem), Some(category)) = (message_ref(subsystem), message_ref(category))
        else {
            return ptr::null_mut();
        };
        bridge()
            .sink()
            .create_handle(subsystem, category)
            .map_or(ptr::null_mut(), handle_to_raw)
    }
}
