//! # Mnemosyne Logger
//!
//! Multi-sink leveled logger: records are routed by severity
//! (debug/info/warn/error) and by audience category (customer and admin
//! audit logs) into separate files, each independently size- or
//! time-rotated.
//!
//! - [`LeveledLogger`] - the logger itself; construct with
//!   [`LeveledLogger::initialize`]
//! - [`global`] - optional init-once process-wide instance
//! - Enrichment/redaction of audit entries happens internally from a
//!   [`CallerContext`] the application supplies
//!
//! ## Example
//!
//! ```rust
//! use mnemosyne_logger::LeveledLogger;
//! use mnemosyne_core::{Level, LoggerConfig};
//! use serde_json::{json, Map};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let log = LeveledLogger::initialize(
//!     LoggerConfig::new("orders")
//!         .with_base_directory(dir.path())
//!         .with_minimum_level(Level::Debug),
//! )
//! .unwrap();
//!
//! // Leveled sinks take message payloads.
//! log.info("service started");
//! log.error(json!({"code": 500, "detail": "upstream timeout"}));
//!
//! // Audit sinks take field maps; a caller context would add enrichment.
//! let mut fields = Map::new();
//! fields.insert("action".to_string(), json!("checkout"));
//! log.record(None, fields);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audit;
mod enrich;
pub mod global;
mod logger;

pub use enrich::{redact_args, IMAGE_DATA_KEY, MASKED_ARG_KEYS, MASKED_VALUE};
pub use global::GlobalInitError;
pub use logger::LeveledLogger;

// Re-export the core vocabulary so most users need only this crate.
pub use mnemosyne_core::{
    CallerContext, Category, InitError, Level, LogMessage, LoggerConfig, MessageTemplate,
    RequestInfo, UserIdentity,
};
