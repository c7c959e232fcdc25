//! Error types for entitydoc.
//!
//! Library crates use [`EntitydocError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all entitydoc operations.
#[derive(Debug, thiserror::Error)]
pub enum EntitydocError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A comment reference points at a file whose extension has no formatter.
    #[error("unsupported comment file type {extension:?} at {path:?}")]
    UnsupportedComment { path: PathBuf, extension: String },

    /// The record's `type` field has no registered renderer.
    #[error("no renderer registered for entity type {entity_type:?}")]
    UnknownEntityType { entity_type: String },

    /// Record deserialization or shape error.
    #[error("record parse error: {message}")]
    Parse { message: String },

    /// Template loading or rendering error.
    #[error("template error: {0}")]
    Template(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, EntitydocError>;

impl EntitydocError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create an unsupported-comment error for a file and its extension.
    pub fn unsupported_comment(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::UnsupportedComment {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create an unknown-entity-type error for an unregistered type name.
    pub fn unknown_entity_type(entity_type: impl Into<String>) -> Self {
        Self::UnknownEntityType {
            entity_type: entity_type.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = EntitydocError::config("missing templates directory");
        assert_eq!(err.to_string(), "config error: missing templates directory");

        let err = EntitydocError::unsupported_comment("/tmp/notes.docx", "docx");
        assert!(err.to_string().contains("docx"));
        assert!(err.to_string().contains("notes.docx"));

        let err = EntitydocError::unknown_entity_type("Widget");
        assert!(err.to_string().contains("Widget"));
    }
}
