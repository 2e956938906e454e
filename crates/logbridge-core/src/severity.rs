//! Severity tiers of the platform logging subsystem.
//!
//! The set is closed: `default`, `info`, `debug`, `error`, `fault`. A severity
//! only selects which platform entry point receives a message. The bridge
//! defines no ordering between tiers; visibility rules belong to the platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Platform log type selected for one emitted record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Default tier. Captured unless the platform is configured otherwise.
    #[default]
    Default,
    /// Helpful but not essential information.
    Info,
    /// Development-time diagnostics. Usually not persisted.
    Debug,
    /// Process-level errors.
    Error,
    /// System-level or multi-process faults.
    Fault,
}

impl Severity {
    /// Every tier, in platform type-code order.
    pub const ALL: [Severity; 5] = [
        Severity::Default,
        Severity::Info,
        Severity::Debug,
        Severity::Error,
        Severity::Fault,
    ];

    /// Numeric `os_log_type_t` value for this tier.
    #[must_use]
    pub const fn type_code(self) -> u8 {
        match self {
            Self::Default => 0x00,
            Self::Info => 0x01,
            Self::Debug => 0x02,
            Self::Error => 0x10,
            Self::Fault => 0x11,
        }
    }

    /// Inverse of [`Severity::type_code`]. Unknown codes select the default tier.
    #[must_use]
    pub const fn from_type_code(code: u8) -> Self {
        match code {
            0x01 => Self::Info,
            0x02 => Self::Debug,
            0x10 => Self::Error,
            0x11 => Self::Fault,
            _ => Self::Default,
        }
    }

    /// Lowercase tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }

    /// Map a `log` crate level onto the closest platform tier.
    ///
    /// The names overlap but the meanings do not: a `log` error is a platform
    /// fault, a warning is a platform error, and so on down.
    #[must_use]
    pub const fn from_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Fault,
            log::Level::Warn => Self::Error,
            log::Level::Info => Self::Default,
            log::Level::Debug => Self::Info,
            log::Level::Trace => Self::Debug,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        Self::from_level(level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = BridgeError;

    /// Case-insensitive; accepts the syslog spellings as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "notice" => Ok(Self::Default),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "error" | "err" => Ok(Self::Error),
            "fault" | "crit" | "critical" => Ok(Self::Fault),
            _ => Err(BridgeError::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_match_platform_values() {
        assert_eq!(Severity::Default.type_code(), 0x00);
        assert_eq!(Severity::Info.type_code(), 0x01);
        assert_eq!(Severity::Debug.type_code(), 0x02);
        assert_eq!(Severity::Error.type_code(), 0x10);
        assert_eq!(Severity::Fault.type_code(), 0x11);
    }

    #[test]
    fn type_code_inverse_covers_all_tiers() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_type_code(severity.type_code()), severity);
        }
    }

    #[test]
    fn unknown_type_code_is_default() {
        assert_eq!(Severity::from_type_code(0x03), Severity::Default);
        assert_eq!(Severity::from_type_code(0xFF), Severity::Default);
    }

    #[test]
    fn log_levels_shift_one_tier() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Fault);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Error);
        assert_eq!(Severity::from(log::Level::Info), Severity::Default);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Info);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("fault".parse::<Severity>().unwrap(), Severity::Fault);
        assert_eq!("CRIT".parse::<Severity>().unwrap(), Severity::Fault);
        assert_eq!(" Info ".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("notice".parse::<Severity>().unwrap(), Severity::Default);
        assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
        assert!(matches!(
            "warning".parse::<Severity>(),
            Err(BridgeError::UnknownSeverity(name)) if name == "warning"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Fault).unwrap();
        assert_eq!(json, "\"fault\"");
    }
}
