//! The multi-sink leveled logger.

use std::panic::Location;

use serde_json::{Map, Value};

use mnemosyne_core::{
    Category, CallerContext, InitError, Level, LogMessage, LogRecord, LoggerConfig,
    MessageTemplate,
};
use mnemosyne_sink::{HourlyRotatingSink, Sink, SinkError, SizeRotatingSink};

/// Routes messages by severity and audience category into six
/// independently rotated files.
///
/// The four leveled sinks (`debug`/`info`/`warn`/`error`) rotate by size
/// and honor the configured minimum level; the `customer` and `admin`
/// audit sinks rotate hourly and take JSON field maps instead of formatted
/// lines.
///
/// Once constructed, no logging call ever surfaces an error: a failed
/// write is traced internally and dropped, so the logger cannot fault the
/// application it observes.
///
/// # Examples
///
/// ```rust
/// use mnemosyne_logger::LeveledLogger;
/// use mnemosyne_core::{Level, LoggerConfig};
/// use serde_json::json;
///
/// let dir = tempfile::tempdir().unwrap();
/// let log = LeveledLogger::initialize(
///     LoggerConfig::new("test")
///         .with_base_directory(dir.path())
///         .with_minimum_level(Level::Debug),
/// )
/// .unwrap();
///
/// log.info(json!({"123": "123"}));
/// log.debug(123);
/// ```
#[derive(Debug)]
pub struct LeveledLogger {
    config: LoggerConfig,
    template: MessageTemplate,
    debug_sink: SizeRotatingSink,
    info_sink: SizeRotatingSink,
    warn_sink: SizeRotatingSink,
    error_sink: SizeRotatingSink,
    customer_sink: HourlyRotatingSink,
    admin_sink: HourlyRotatingSink,
}

fn into_init_error(err: SinkError) -> InitError {
    let (path, source) = err.into_parts();
    InitError::PathCreation { path, source }
}

impl LeveledLogger {
    /// Builds a logger from `config`: parses the message format, derives
    /// the six category paths, creates every category directory and opens
    /// one sink per category.
    ///
    /// Building a second logger over the same directories is permitted
    /// (the sinks append), but handles of a replaced instance are not
    /// flushed first - do not re-initialize mid-use.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::PathCreation`] when a directory or file cannot
    /// be created, and [`InitError::MessageFormat`] when the template does
    /// not parse.
    pub fn initialize(config: LoggerConfig) -> Result<Self, InitError> {
        let template = MessageTemplate::parse(&config.message_format)?;

        let path = |category: Category| category.log_path(&config.base_directory, &config.name);
        let size = |category: Category| {
            SizeRotatingSink::open(path(category), config.max_file_size_bytes, config.backup_count)
                .map_err(into_init_error)
        };

        let debug_sink = size(Category::Debug)?;
        let info_sink = size(Category::Info)?;
        let warn_sink = size(Category::Warn)?;
        let error_sink = size(Category::Error)?;
        let customer_sink = HourlyRotatingSink::open(path(Category::Customer), config.backup_count)
            .map_err(into_init_error)?;
        let admin_sink = HourlyRotatingSink::open(path(Category::Admin), config.backup_count)
            .map_err(into_init_error)?;

        Ok(Self {
            config,
            template,
            debug_sink,
            info_sink,
            warn_sink,
            error_sink,
            customer_sink,
            admin_sink,
        })
    }

    /// The configuration this logger was built from.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Writes a debug-level record.
    #[track_caller]
    pub fn debug(&self, message: impl Into<LogMessage>) {
        self.leveled(Level::Debug, &message.into(), Location::caller());
    }

    /// Writes an info-level record.
    #[track_caller]
    pub fn info(&self, message: impl Into<LogMessage>) {
        self.leveled(Level::Info, &message.into(), Location::caller());
    }

    /// Writes a warn-level record.
    #[track_caller]
    pub fn warning(&self, message: impl Into<LogMessage>) {
        self.leveled(Level::Warn, &message.into(), Location::caller());
    }

    /// Writes an error-level record.
    ///
    /// Like every other sink, a failed write here is swallowed - even the
    /// error log must never raise into the application.
    #[track_caller]
    pub fn error(&self, message: impl Into<LogMessage>) {
        self.leveled(Level::Error, &message.into(), Location::caller());
    }

    /// Routes `payload` by a string kind tag: `customer`/`record` and
    /// `admin` go to the audit sinks, the level names go to the matching
    /// leveled sink, and anything unrecognized falls back to `info`.
    ///
    /// Audit payloads that are not JSON objects are wrapped under a
    /// `message` key.
    #[track_caller]
    pub fn dispatch(&self, ctx: Option<&dyn CallerContext>, payload: Value, kind: &str) {
        let location = Location::caller();
        match kind.parse::<Category>() {
            Ok(Category::Customer) => self.record(ctx, into_fields(payload)),
            Ok(Category::Admin) => self.admin(ctx, into_fields(payload)),
            Ok(category) => {
                let level = category.level().unwrap_or(Level::Info);
                self.leveled(level, &LogMessage::from(payload), location);
            }
            Err(_) => self.leveled(Level::Info, &LogMessage::from(payload), location),
        }
    }

    /// Flushes every sink. Failures are traced and swallowed, like any
    /// other write-path error.
    pub fn flush(&self) {
        for sink in self.sinks() {
            if let Err(error) = sink.flush() {
                tracing::debug!(path = %sink.path().display(), %error, "flush failed");
            }
        }
    }

    fn leveled(
        &self,
        level: Level,
        message: &LogMessage,
        location: &'static Location<'static>,
    ) {
        if level < self.config.minimum_level {
            return;
        }

        let record = LogRecord::new(level, location, message);
        let line = self.template.render(&record);
        let sink: &dyn Sink = match level {
            Level::Debug => &self.debug_sink,
            Level::Info => &self.info_sink,
            Level::Warn => &self.warn_sink,
            Level::Error => &self.error_sink,
        };
        if let Err(error) = sink.append_line(&line) {
            tracing::warn!(path = %sink.path().display(), %error, "dropping log record after write failure");
        }
    }

    pub(crate) const fn customer_sink(&self) -> &HourlyRotatingSink {
        &self.customer_sink
    }

    pub(crate) const fn admin_sink(&self) -> &HourlyRotatingSink {
        &self.admin_sink
    }

    fn sinks(&self) -> [&dyn Sink; 6] {
        [
            &self.debug_sink,
            &self.info_sink,
            &self.warn_sink,
            &self.error_sink,
            &self.customer_sink,
            &self.admin_sink,
        ]
    }
}

fn into_fields(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("message".to_string(), other);
            map
        }
    }
}
