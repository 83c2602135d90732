//! Logger configuration.

use std::path::{Path, PathBuf};

use crate::level::Level;

/// Default message format: tab-separated timestamp, source location, level
/// and message.
pub const DEFAULT_MESSAGE_FORMAT: &str = "{timestamp}\t{file}:{line}\t{level}\t{message}";

/// Default size limit for the leveled sinks (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Construction-time configuration for a logger.
///
/// Immutable once the logger is built; there is no dynamic reload. The
/// defaults mirror the historical deployment of this logger: name `dq`,
/// base directory `/tmp`, minimum level `INFO`, 10 MiB size limit and
/// unbounded backup retention.
///
/// # Examples
///
/// ```rust
/// use mnemosyne_core::{Level, LoggerConfig};
///
/// let config = LoggerConfig::new("orders")
///     .with_base_directory("/var/log/orders")
///     .with_minimum_level(Level::Debug)
///     .with_backup_count(8);
///
/// assert_eq!(config.name, "orders");
/// assert_eq!(config.backup_count, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Logger name; the first component of every category file name.
    pub name: String,

    /// Directory under which the six category directories are created.
    pub base_directory: PathBuf,

    /// Records below this level are suppressed on the leveled sinks.
    pub minimum_level: Level,

    /// Line template with `{timestamp}`, `{file}`, `{line}`, `{level}` and
    /// `{message}` placeholders.
    pub message_format: String,

    /// Rotated files retained per category; `0` keeps every rotated file.
    pub backup_count: usize,

    /// Size threshold for the size-rotated (leveled) sinks.
    pub max_file_size_bytes: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "dq".to_string(),
            base_directory: PathBuf::from("/tmp"),
            minimum_level: Level::Info,
            message_format: DEFAULT_MESSAGE_FORMAT.to_string(),
            backup_count: 0,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl LoggerConfig {
    /// Creates a configuration for the given logger name with default
    /// settings for everything else.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the base directory.
    #[must_use]
    pub fn with_base_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_directory = dir.into();
        self
    }

    /// Sets the minimum severity for the leveled sinks.
    #[must_use]
    pub const fn with_minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }

    /// Sets the line template.
    #[must_use]
    pub fn with_message_format(mut self, format: impl Into<String>) -> Self {
        self.message_format = format.into();
        self
    }

    /// Sets how many rotated files each category retains (`0` = unbounded).
    #[must_use]
    pub const fn with_backup_count(mut self, count: usize) -> Self {
        self.backup_count = count;
        self
    }

    /// Sets the size threshold for the leveled sinks.
    #[must_use]
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    /// Returns the base directory as a borrowed path.
    #[must_use]
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
