//! Core type definitions for convo

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a comment within a store.
///
/// Ids are assigned by the caller, never generated internally; the
/// store only enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl CommentId {
    /// Get the raw id value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CommentId {
    fn from(id: i64) -> Self {
        CommentId(id)
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CommentId(s.parse()?))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
