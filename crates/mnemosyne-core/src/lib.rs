//! # Mnemosyne Core
//!
//! Core types for the Mnemosyne multi-sink leveled logger.
//!
//! This crate provides the foundational data structures shared by the sink
//! and logger crates:
//!
//! - [`Level`] / [`Category`] - severity and destination taxonomy
//! - [`LoggerConfig`] - construction-time logger configuration
//! - [`MessageTemplate`] - the `{placeholder}` line format
//! - [`LogRecord`] / [`LogMessage`] - per-call record and payload values
//! - [`CallerContext`] - the request-capability trait the audit sinks
//!   consume
//! - [`InitError`] - the one error surface of logger construction
//!
//! ## Example
//!
//! ```rust
//! use mnemosyne_core::{Category, Level, LoggerConfig};
//! use std::path::Path;
//!
//! let config = LoggerConfig::new("orders").with_minimum_level(Level::Debug);
//! let path = Category::Error.log_path(config.base_directory(), &config.name);
//! assert_eq!(path, Path::new("/tmp/error/orders.error.log"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod category;
pub mod config;
pub mod context;
pub mod error;
pub mod level;
pub mod message;
pub mod record;
pub mod template;


// Re-export main types at crate root
pub use category::{Category, ParseCategoryError, RotationPolicy};
pub use config::{LoggerConfig, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_MESSAGE_FORMAT};
pub use context::{CallerContext, RequestInfo, UserIdentity};
pub use error::{InitError, TemplateError};
pub use level::{Level, ParseLevelError};
pub use message::LogMessage;
pub use record::{LogRecord, TIMESTAMP_FORMAT};
pub use template::{MessageTemplate, Placeholder};
