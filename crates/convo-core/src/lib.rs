//! convo-core - Core library for convo
//!
//! An in-memory hierarchy of discussion comments: the comment store
//! with its mutation invariants, depth- and breadth-first traversal,
//! and lossless round-trip codecs for two exchange formats.

pub mod comment;
pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use comment::{Comment, CommentStore};
pub use error::{ConvoError, Result};
pub use types::CommentId;
