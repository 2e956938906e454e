//! Runtime configuration.
//!
//! Read from the environment:
//! - `LOGBRIDGE_SUBSYSTEM`: reverse-DNS subsystem for a custom handle. Unset
//!   means records go to the default handle.
//! - `LOGBRIDGE_CATEGORY`: category within the subsystem (default `default`).
//! - `LOGBRIDGE_LEVEL`: maximum `log` level forwarded (default `trace`).
//!
//! Which C entry points exist (explicit-handle, implicit-handle, or both) is a
//! build-time choice made with `logbridge-abi` Cargo features, not here.

use std::sync::atomic::{AtomicU8, Ordering};

use log::LevelFilter;

pub const SUBSYSTEM_ENV: &str = "LOGBRIDGE_SUBSYSTEM";
pub const CATEGORY_ENV: &str = "LOGBRIDGE_CATEGORY";
pub const LEVEL_ENV: &str = "LOGBRIDGE_LEVEL";

/// Category used when a subsystem is configured without one.
pub const DEFAULT_CATEGORY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub subsystem: Option<String>,
    pub category: Option<String>,
    pub max_level: LevelFilter,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            subsystem: None,
            category: None,
            max_level: LevelFilter::Trace,
        }
    }
}

impl BridgeConfig {
    /// Build from the process environment. The level is the cached value from
    /// [`configured_max_level`].
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            subsystem: non_empty_env(SUBSYSTEM_ENV),
            category: non_empty_env(CATEGORY_ENV),
            max_level: configured_max_level(),
        }
    }

    #[must_use]
    pub fn with_subsystem(mut self, subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        self.subsystem = Some(subsystem.into());
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Category to pair with the subsystem, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a level name (case-insensitive). Unknown names yield `Trace`.
#[must_use]
pub fn parse_level_loose(raw: &str) -> LevelFilter {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" | "none" | "disabled" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// 0=unresolved, 1..=6 = LevelFilter + 1, 255=resolving.
static CACHED_LEVEL: AtomicU8 = AtomicU8::new(0);

const LEVEL_UNRESOLVED: u8 = 0;
const LEVEL_RESOLVING: u8 = 255;

fn level_to_u8(level: LevelFilter) -> u8 {
    level as u8 + 1
}

fn u8_to_level(v: u8) -> LevelFilter {
    match v {
        1 => LevelFilter::Off,
        2 => LevelFilter::Error,
        3 => LevelFilter::Warn,
        4 => LevelFilter::Info,
        5 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Max level from `LOGBRIDGE_LEVEL`, read on first call and cached thereafter.
///
/// Resolution is a non-blocking state machine: a caller that arrives while
/// another thread is reading the environment gets `Trace` rather than waiting.
#[must_use]
pub fn configured_max_level() -> LevelFilter {
    let cached = CACHED_LEVEL.load(Ordering::Acquire);
    if cached != LEVEL_UNRESOLVED && cached != LEVEL_RESOLVING {
        return u8_to_level(cached);
    }
    if cached == LEVEL_RESOLVING {
        return LevelFilter::Trace;
    }

    if CACHED_LEVEL
        .compare_exchange(
            LEVEL_UNRESOLVED,
            LEVEL_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_LEVEL.load(Ordering::Acquire);
        return if v != LEVEL_UNRESOLVED && v != LEVEL_RESOLVING {
            u8_to_level(v)
        } else {
            LevelFilter::Trace
        };
    }

    let level = std::env::var(LEVEL_ENV)
        .map(|v| parse_level_loose(&v))
        .unwrap_or(LevelFilter::Trace);
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
    level
}
