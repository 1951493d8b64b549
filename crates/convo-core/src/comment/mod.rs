//! Comment system module
//!
//! Holds the comment entity, the owning store, and subtree traversal.

pub mod model;
pub mod store;
pub mod traverse;

pub use model::Comment;
pub use store::CommentStore;
