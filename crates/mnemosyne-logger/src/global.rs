//! Optional process-wide logger instance.
//!
//! The logger itself is a plain value meant to be constructed explicitly
//! and handed to the code that logs. For applications that want one
//! process-wide instance instead of threading a reference through, this
//! module offers an init-once global: [`init`] exactly once during
//! startup, [`get`] everywhere after. There is no re-initialization and
//! no teardown - the instance lives until process exit.

use once_cell::sync::OnceCell;
use thiserror::Error;

use mnemosyne_core::{InitError, LoggerConfig};

use crate::logger::LeveledLogger;

static GLOBAL: OnceCell<LeveledLogger> = OnceCell::new();

/// Errors from [`init`].
#[derive(Debug, Error)]
pub enum GlobalInitError {
    /// Building the logger failed.
    #[error(transparent)]
    Init(#[from] InitError),

    /// [`init`] was already called for this process.
    #[error("global logger is already initialized")]
    AlreadyInitialized,
}

/// Initializes the process-wide logger. Call once during startup.
///
/// # Errors
///
/// Returns [`GlobalInitError::AlreadyInitialized`] on a second call, or
/// the underlying [`InitError`] when construction fails.
pub fn init(config: LoggerConfig) -> Result<(), GlobalInitError> {
    let logger = LeveledLogger::initialize(config)?;
    GLOBAL
        .set(logger)
        .map_err(|_already| GlobalInitError::AlreadyInitialized)
}

/// The process-wide logger, if [`init`] has run.
#[must_use]
pub fn get() -> Option<&'static LeveledLogger> {
    GLOBAL.get()
}
