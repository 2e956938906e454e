//! `log` facade initialisers.
//!
//! Install a [`BridgeLogger`] over the platform backend. Use [`init`] to log
//! with the system's default behaviour; use [`init_custom`] when records
//! should be tagged with a subsystem and category for filtering.
//!
//! ```no_run
//! logbridge::logger::init_custom("com.example.crate", "category")
//!     .expect("logger already installed");
//! log::info!("ready");
//! ```

use log::LevelFilter;
use logbridge_core::{BridgeConfig, BridgeError, BridgeLogger};

use crate::{PlatformSink, bridge};

/// Default handle, every level.
pub fn init() -> Result<(), BridgeError> {
    init_with_level(LevelFilter::Trace)
}

/// Default handle, records up to `max_level`.
pub fn init_with_level(max_level: LevelFilter) -> Result<(), BridgeError> {
    BridgeLogger::with_default_handle(PlatformSink, max_level).install()
}

/// Custom handle for `subsystem` (reverse-DNS, e.g. `com.example.crate`) and
/// `category`, every level.
pub fn init_custom(subsystem: &str, category: &str) -> Result<(), BridgeError> {
    init_with_config(&BridgeConfig::default().with_subsystem(subsystem, category))
}

pub fn init_with_config(config: &BridgeConfig) -> Result<(), BridgeError> {
    let handle = match config.subsystem.as_deref() {
        Some(subsystem) => bridge().create_handle(subsystem, config.category_or_default())?,
        None => bridge().default_handle(),
    };
    BridgeLogger::new(PlatformSink, handle, config.max_level).install()
}

/// Configure from `LOGBRIDGE_SUBSYSTEM`, `LOGBRIDGE_CATEGORY`, `LOGBRIDGE_LEVEL`.
pub fn init_from_env() -> Result<(), BridgeError> {
    init_with_config(&BridgeConfig::from_env())
}
