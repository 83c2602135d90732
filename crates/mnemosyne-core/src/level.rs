//! Severity levels for leveled log sinks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a leveled log record.
///
/// Levels are totally ordered (`Debug < Info < Warn < Error`); a record is
/// suppressed when its level is below the configured minimum.
///
/// # Examples
///
/// ```rust
/// use mnemosyne_core::Level;
///
/// assert!(Level::Debug < Level::Error);
/// assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Diagnostic detail, normally filtered in production.
    Debug,
    /// Routine operational messages.
    #[default]
    Info,
    /// Something unexpected that did not prevent the operation.
    Warn,
    /// Operation failure.
    Error,
}

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Numeric weight of the level (10/20/30/40).
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warn => 30,
            Self::Error => 40,
        }
    }

    /// Uppercase name as it appears in formatted log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses the uppercase level names; `WARNING` is accepted as an alias
    /// for `WARN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_weights() {
        assert_eq!(Level::Debug.weight(), 10);
        assert_eq!(Level::Info.weight(), 20);
        assert_eq!(Level::Warn.weight(), 30);
        assert_eq!(Level::Error.weight(), 40);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert!("TRACE".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_display_uppercase() {
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Info.as_str(), "INFO");
    }

    #[test]
    fn test_level_serde_roundtrip() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, "\"WARN\"");
        let level: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(level, Level::Warn);
    }
}
