//! Per-call log records.

use std::panic::Location;

use chrono::{DateTime, Local};

use crate::level::Level;
use crate::message::LogMessage;

/// Timestamp rendering used in formatted lines (local time, second
/// precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One leveled log entry, produced per call and discarded after the write.
///
/// The source location is the call site of the public logging method,
/// captured via [`std::panic::Location`] rather than stack inspection.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Local time the record was produced.
    pub timestamp: DateTime<Local>,
    /// Severity of the record.
    pub level: Level,
    /// Source file of the caller.
    pub file: &'static str,
    /// Source line of the caller.
    pub line: u32,
    /// Rendered message payload.
    pub message: String,
}

impl LogRecord {
    /// Builds a record for `level` at the given call site, stamping it with
    /// the current local time.
    #[must_use]
    pub fn new(level: Level, location: &'static Location<'static>, message: &LogMessage) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            file: location.file(),
            line: location.line(),
            message: message.to_text(),
        }
    }

    /// The timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn here() -> &'static Location<'static> {
        Location::caller()
    }

    #[test]
    fn test_record_captures_call_site() {
        let location = here();
        let record = LogRecord::new(Level::Info, location, &LogMessage::from("msg"));
        assert!(record.file.ends_with("record.rs"));
        assert_eq!(record.line, location.line());
        assert_eq!(record.message, "msg");
    }

    #[test]
    fn test_timestamp_format_shape() {
        let record = LogRecord::new(Level::Info, Location::caller(), &LogMessage::from("x"));
        let ts = record.formatted_timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b' ');
        assert_eq!(ts.as_bytes()[13], b':');
    }
}
