//! Errors raised by bridge setup.
//!
//! The emit path never fails from the caller's point of view. Only the
//! operations that build something (handles, the global logger, parsed
//! configuration) report errors.

use thiserror::Error;

/// Failures of the setup operations. Emitting a record never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A string destined for the platform contains a NUL byte.
    #[error("{field} contains an interior NUL byte")]
    InteriorNul { field: &'static str },
    /// `log` already has a global logger for this process.
    #[error("a global logger is already installed")]
    LoggerAlreadySet,
    /// The platform returned no handle.
    #[error("platform refused to create a log handle for {subsystem}:{category}")]
    HandleCreation { subsystem: String, category: String },
    /// A severity name matching no tier or accepted alias.
    #[error("unknown severity `{0}`")]
    UnknownSeverity(String),
}
