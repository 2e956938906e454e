//! # logbridge-core
//!
//! Safe model of the platform logging bridge.
//!
//! This crate owns everything about the bridge that does not touch the
//! platform: the closed [`Severity`] set, the opaque [`LogHandle`] token, the
//! fixed public-string format policy, the [`Sink`] backend seam, and the
//! [`Bridge`] façade that the C ABI in `logbridge-abi` drives. No `unsafe`
//! code is permitted at the crate level.
//!
//! ```text
//! C caller -> ABI entry (logbridge-abi) -> Bridge -> Sink (platform / memory)
//! ```

#![deny(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod handle;
pub mod logger;
pub mod memory;
pub mod severity;
pub mod sink;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use handle::LogHandle;
pub use logger::BridgeLogger;
pub use memory::{CapturedRecord, MemorySink};
pub use severity::Severity;
pub use sink::Sink;
