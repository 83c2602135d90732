//! Error types for logger construction.
//!
//! Only initialization surfaces errors to callers; once a logger is built,
//! write failures are swallowed at the logging call boundary so that the
//! logging subsystem can never fault the application it observes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while initializing a logger.
#[derive(Debug, Error)]
pub enum InitError {
    /// A category directory or log file could not be created.
    #[error("failed to create log path {}: {source}", path.display())]
    PathCreation {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured message format does not parse.
    #[error("invalid message format: {0}")]
    MessageFormat(#[from] TemplateError),
}

/// Errors that can occur while parsing a message-format template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template names a placeholder the formatter does not know.
    #[error("unknown placeholder '{{{name}}}' in message format")]
    UnknownPlaceholder {
        /// The unrecognized placeholder name.
        name: String,
    },

    /// A `{` was opened but never closed.
    #[error("unclosed '{{' in message format")]
    UnclosedPlaceholder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_creation_display() {
        let err = InitError::PathCreation {
            path: PathBuf::from("/var/log/app/info"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to create log path /var/log/app/info: denied"
        );
    }

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::UnknownPlaceholder {
            name: "pid".to_string(),
        };
        assert_eq!(err.to_string(), "unknown placeholder '{pid}' in message format");
    }
}
