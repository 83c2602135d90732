//! # Mnemosyne Test
//!
//! Test support for the Mnemosyne logging workspace:
//!
//! - [`MockContext`] - a builder-style [`CallerContext`](mnemosyne_core::CallerContext)
//!   implementation for exercising the audit sinks without a web layer
//! - [`log_files`] - helpers for reading written log files back in
//!   assertions
//!
//! ## Example
//!
//! ```rust
//! use mnemosyne_test::MockContext;
//! use serde_json::json;
//!
//! let ctx = MockContext::end_user().with_arg("password", json!("secret"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod log_files;
mod mock_context;

pub use log_files::{category_lines, category_size, read_lines, rotated_siblings};
pub use mock_context::MockContext;
