// Every extern "C" export takes raw pointers from C callers and documents its
// contract in include/logbridge.h; per-function safety docs would repeat it.
#![allow(clippy::missing_safety_doc)]
//! # logbridge
//!
//! C ABI boundary forwarding text messages to the platform logging subsystem.
//!
//! This crate produces a `cdylib` (`liblogbridge`) exposing the functions
//! declared in `include/logbridge.h`. Each export resolves its arguments and
//! makes exactly one call into the platform backend through the
//! [`Bridge`](logbridge_core::Bridge) façade in `logbridge-core`.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> Bridge -> PlatformSink -> os_log / syslog
//! ```
//!
//! Two surfaces are selectable with Cargo features, both on by default:
//! - `explicit-handle`: `logbridge_log*(handle, message)`.
//! - `implicit-handle`: `logbridge_default_log*(message)`.
//!
//! Rust callers can also route the `log` facade through the same backend with
//! the initialisers in [`logger`].

#[macro_use]
mod macros;

pub mod emit_abi;
#[cfg(feature = "explicit-handle")]
pub mod explicit_abi;
pub mod handle_abi;
#[cfg(feature = "implicit-handle")]
pub mod implicit_abi;
pub mod logger;
pub mod platform;
pub mod util;

use logbridge_core::Bridge;

pub use platform::PlatformSink;
pub use util::RawLogHandle;

static BRIDGE: Bridge<PlatformSink> = Bridge::new(PlatformSink);

/// The process-wide bridge over the platform backend.
#[must_use]
pub fn bridge() -> &'static Bridge<PlatformSink> {
    &BRIDGE
}
