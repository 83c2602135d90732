//! # Mnemosyne Sink
//!
//! Rotating file-sink primitives for the Mnemosyne multi-sink logger.
//!
//! A [`Sink`] is one open append target plus its rotation state. Two
//! policies are provided:
//!
//! - [`SizeRotatingSink`] - rotates when the file would exceed a byte
//!   limit; backs the leveled (debug/info/warn/error) categories
//! - [`HourlyRotatingSink`] - rotates on the wall-clock hour boundary;
//!   backs the customer/admin audit categories
//!
//! Both name rotated files by appending a timestamp suffix (hour
//! granularity, with a numeric sequence for same-hour collisions) and prune
//! old rotated files down to a configured backup count.
//!
//! ## Example
//!
//! ```rust
//! use mnemosyne_sink::{Sink, SizeRotatingSink};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let sink = SizeRotatingSink::open(dir.path().join("app.info.log"), 1024, 4).unwrap();
//! sink.append_line("ready").unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod hourly;
mod rotation;
mod sink;
mod size;

pub use error::SinkError;
pub use hourly::HourlyRotatingSink;
pub use rotation::SuffixGranularity;
pub use sink::Sink;
pub use size::SizeRotatingSink;
