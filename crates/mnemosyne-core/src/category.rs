//! Log categories and their file-layout / rotation mapping.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// One of the six log destinations.
///
/// Each category owns exactly one file under
/// `base_directory/<category>/<name>.<category>.log` and one rotation
/// policy: the four leveled categories rotate by size, the two audit
/// categories (`customer`, `admin`) rotate on the wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Leveled debug sink.
    Debug,
    /// Leveled info sink.
    Info,
    /// Leveled warn sink.
    Warn,
    /// Leveled error sink.
    Error,
    /// Customer-facing audit sink.
    Customer,
    /// Admin audit sink.
    Admin,
}

/// How a category's file is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    /// Rotate when the file would exceed the configured byte limit.
    Size,
    /// Rotate on every wall-clock hour boundary, regardless of volume.
    Hourly,
}

impl Category {
    /// All categories, leveled sinks first.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Customer,
        Self::Admin,
    ];

    /// Directory (and file-name component) for this category.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }

    /// Severity associated with a leveled category; `None` for the audit
    /// categories.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Customer | Self::Admin => None,
        }
    }

    /// Rotation policy for this category's file.
    #[must_use]
    pub const fn rotation(self) -> RotationPolicy {
        match self {
            Self::Debug | Self::Info | Self::Warn | Self::Error => RotationPolicy::Size,
            Self::Customer | Self::Admin => RotationPolicy::Hourly,
        }
    }

    /// Active log file path for this category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use mnemosyne_core::Category;
    ///
    /// let path = Category::Info.log_path(Path::new("/var/log/app"), "orders");
    /// assert_eq!(path, Path::new("/var/log/app/info/orders.info.log"));
    /// ```
    #[must_use]
    pub fn log_path(self, base_directory: &Path, name: &str) -> PathBuf {
        let dir = self.dir_name();
        base_directory.join(dir).join(format!("{name}.{dir}.log"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses the lowercase category names.
    ///
    /// `warning` is accepted as an alias for `warn`, and `record` for
    /// `customer`, so that dispatch kind tags match the logging method
    /// names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "customer" | "record" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
