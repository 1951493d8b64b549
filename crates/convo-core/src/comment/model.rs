//! Comment data model

use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// A single comment in a discussion thread.
///
/// Identity and parentage are fixed at creation; only `text` and
/// `author` are mutable afterwards. The `children` list holds the ids
/// of direct replies in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier (caller-assigned)
    pub id: CommentId,
    /// Comment body
    pub text: String,
    /// Author name
    pub author: String,
    /// Parent comment, absent for roots
    pub parent_id: Option<CommentId>,
    /// Direct replies, in insertion order
    #[serde(default)]
    pub children: Vec<CommentId>,
}

impl Comment {
    /// Create a comment with no replies yet
    pub(crate) fn new(
        id: CommentId,
        text: impl Into<String>,
        author: impl Into<String>,
        parent_id: Option<CommentId>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
            parent_id,
            children: Vec::new(),
        }
    }

    /// Check whether this comment is a root (has no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Number of direct replies
    pub fn reply_count(&self) -> usize {
        self.children.len()
    }
}
