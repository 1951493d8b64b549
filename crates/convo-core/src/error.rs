//! Error types for convo

use crate::types::CommentId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for convo
#[derive(Debug, Error)]
pub enum ConvoError {
    /// Comment id already present in the store
    #[error("Comment {0} already exists")]
    DuplicateId(CommentId),

    /// Referenced parent id is not in the store
    #[error("Parent comment {0} does not exist")]
    ParentNotFound(CommentId),

    /// Comment not found
    #[error("Comment {0} does not exist")]
    CommentNotFound(CommentId),

    /// Malformed import text (structure-level, after the syntax layer)
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON syntax error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML syntax error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required markup attribute or element is absent
    #[error("Missing `{name}` on <{element}> element")]
    MissingAttribute { element: String, name: String },

    /// Failure writing serialized output to a named sink
    #[error("Failed to write {path}: {source}")]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Requested export format is not registered
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ConvoError>,
    },
}

impl ConvoError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ConvoError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for convo
pub type Result<T> = std::result::Result<T, ConvoError>;
