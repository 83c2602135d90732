//! The sink abstraction shared by all rotation policies.

use std::fmt::Debug;
use std::path::Path;

use crate::error::SinkError;

/// A line-oriented append target with internal rotation state.
///
/// Implementations serialize appends and rotations behind an internal lock,
/// so concurrent callers never interleave partial lines and rotation is
/// atomic with respect to appends.
pub trait Sink: Send + Sync + Debug {
    /// Appends one line (a trailing newline is added by the sink), rotating
    /// first when the policy requires it.
    ///
    /// # Errors
    ///
    /// Returns an error if the append or a required rotation fails.
    fn append_line(&self, line: &str) -> Result<(), SinkError>;

    /// Flushes the active file handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    fn flush(&self) -> Result<(), SinkError>;

    /// Path of the active log file.
    fn path(&self) -> &Path;
}
