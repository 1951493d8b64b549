//! Comment store with CRUD operations

use super::model::Comment;
use crate::error::{ConvoError, Result};
use crate::types::CommentId;
use indexmap::IndexMap;
use tracing::debug;

/// Owning store for a forest of comments, indexed by id.
///
/// An `IndexMap` keeps insertion order, so [`roots`](Self::roots) and
/// everything derived from it (traversal from roots, export) is
/// deterministic. The store is single-threaded; callers needing shared
/// access must wrap it in their own lock.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    /// All comments by id
    nodes: IndexMap<CommentId, Comment>,
}

impl CommentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment.
    ///
    /// Fails with [`ConvoError::DuplicateId`] if `id` is already
    /// present and with [`ConvoError::ParentNotFound`] if `parent_id`
    /// names an unknown comment. Both are checked before anything is
    /// inserted, so a failed add leaves the store untouched.
    pub fn add(
        &mut self,
        id: CommentId,
        text: impl Into<String>,
        author: impl Into<String>,
        parent_id: Option<CommentId>,
    ) -> Result<CommentId> {
        if self.nodes.contains_key(&id) {
            return Err(ConvoError::DuplicateId(id));
        }
        if let Some(pid) = parent_id {
            if !self.nodes.contains_key(&pid) {
                return Err(ConvoError::ParentNotFound(pid));
            }
        }

        self.nodes.insert(id, Comment::new(id, text, author, parent_id));
        if let Some(pid) = parent_id {
            // Checked above, the parent is still there.
            if let Some(parent) = self.nodes.get_mut(&pid) {
                parent.children.push(id);
            }
        }

        debug!(%id, parent = ?parent_id, "comment added");
        Ok(id)
    }

    /// Remove a comment and return it.
    ///
    /// The comment is detached from its former parent's reply list,
    /// but its own descendants are neither deleted nor reparented:
    /// they stay in the store under their own ids, unreachable from
    /// any root. See `DESIGN.md` on this deliberate pass-through.
    pub fn remove(&mut self, id: CommentId) -> Result<Comment> {
        let comment = self
            .nodes
            .shift_remove(&id)
            .ok_or(ConvoError::CommentNotFound(id))?;

        if let Some(pid) = comment.parent_id {
            // The parent may itself have been removed already.
            if let Some(parent) = self.nodes.get_mut(&pid) {
                parent.children.retain(|child| *child != id);
            }
        }

        debug!(%id, "comment removed");
        Ok(comment)
    }

    /// Update text and/or author of a comment.
    ///
    /// A `None` argument leaves the field untouched. So does an empty
    /// string: `update(id, Some(""), None)` is a no-op, the empty
    /// string is not a valid replacement value.
    pub fn update(
        &mut self,
        id: CommentId,
        text: Option<&str>,
        author: Option<&str>,
    ) -> Result<()> {
        let comment = self
            .nodes
            .get_mut(&id)
            .ok_or(ConvoError::CommentNotFound(id))?;

        if let Some(text) = text {
            if !text.is_empty() {
                comment.text = text.to_string();
            }
        }
        if let Some(author) = author {
            if !author.is_empty() {
                comment.author = author.to_string();
            }
        }
        Ok(())
    }

    /// Get a comment by id
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.nodes.get(&id)
    }

    /// Check if an id is present
    pub fn contains(&self, id: CommentId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over all comments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.nodes.values()
    }

    /// Iterate over root comments (no parent) in insertion order
    pub fn roots(&self) -> impl Iterator<Item = &Comment> {
        self.nodes.values().filter(|c| c.is_root())
    }

    /// Total comment count, orphans included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the store holds no comments
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the entire node index.
    ///
    /// This is the destructive primitive behind both importers: prior
    /// contents are discarded wholesale, never merged.
    pub fn replace_all(&mut self, nodes: IndexMap<CommentId, Comment>) {
        debug!(
            old = self.nodes.len(),
            new = nodes.len(),
            "replacing store contents"
        );
        self.nodes = nodes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn populated_store() -> CommentStore {
        let mut store = CommentStore::new();
        store.add(CommentId(1), "Root comment", "Alice", None).unwrap();
        store
            .add(CommentId(2), "Reply to root", "Bob", Some(CommentId(1)))
            .unwrap();
        store
            .add(CommentId(3), "Another reply", "Charlie", Some(CommentId(1)))
            .unwrap();
        store
            .add(CommentId(4), "Nested reply", "Dave", Some(CommentId(2)))
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_get() {
        let store = populated_store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(CommentId(1)).unwrap().author, "Alice");
        assert_eq!(store.get(CommentId(2)).unwrap().parent_id, Some(CommentId(1)));
    }

    #[test]
    fn test_children_follow_call_order() {
        let store = populated_store();
        let root = store.get(CommentId(1)).unwrap();
        assert_eq!(root.children, vec![CommentId(2), CommentId(3)]);
    }

    #[test]
    fn test_duplicate_add_fails() {
        let mut store = populated_store();
        let err = store.add(CommentId(1), "again", "Mallory", None).unwrap_err();
        assert!(matches!(err, ConvoError::DuplicateId(CommentId(1))));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_unknown_parent_fails_without_mutation() {
        let mut store = populated_store();
        let err = store
            .add(CommentId(5), "lost", "Eve", Some(CommentId(99)))
            .unwrap_err();
        assert!(matches!(err, ConvoError::ParentNotFound(CommentId(99))));
        // The failed child must not have been registered.
        assert!(!store.contains(CommentId(5)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_remove_detaches_from_parent() {
        let mut store = populated_store();
        let removed = store.remove(CommentId(2)).unwrap();
        assert_eq!(removed.id, CommentId(2));

        assert!(!store.contains(CommentId(2)));
        let root = store.get(CommentId(1)).unwrap();
        assert_eq!(root.children, vec![CommentId(3)]);
    }

    #[test]
    fn test_remove_retains_orphans() {
        let mut store = populated_store();
        store.remove(CommentId(2)).unwrap();

        // 4 was a child of 2; it stays addressable with its stale
        // parent link intact.
        let orphan = store.get(CommentId(4)).unwrap();
        assert_eq!(orphan.parent_id, Some(CommentId(2)));
    }

    #[test]
    fn test_remove_orphan_with_gone_parent() {
        let mut store = populated_store();
        store.remove(CommentId(2)).unwrap();
        // Removing the orphan itself must not trip over the missing parent.
        assert!(store.remove(CommentId(4)).is_ok());
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut store = populated_store();
        assert!(matches!(
            store.remove(CommentId(99)),
            Err(ConvoError::CommentNotFound(CommentId(99)))
        ));
    }

    #[test]
    fn test_id_reuse_after_removal() {
        let mut store = populated_store();
        store.remove(CommentId(3)).unwrap();
        assert!(store.add(CommentId(3), "back again", "Frank", None).is_ok());
    }

    #[test]
    fn test_update_selectivity() {
        let mut store = populated_store();

        store.update(CommentId(1), None, Some("Alicia")).unwrap();
        let comment = store.get(CommentId(1)).unwrap();
        assert_eq!(comment.text, "Root comment");
        assert_eq!(comment.author, "Alicia");

        store.update(CommentId(1), Some("Edited"), None).unwrap();
        let comment = store.get(CommentId(1)).unwrap();
        assert_eq!(comment.text, "Edited");
        assert_eq!(comment.author, "Alicia");
    }

    #[test]
    fn test_update_empty_string_is_no_change() {
        let mut store = populated_store();
        store.update(CommentId(1), Some(""), Some("")).unwrap();

        let comment = store.get(CommentId(1)).unwrap();
        assert_eq!(comment.text, "Root comment");
        assert_eq!(comment.author, "Alice");
    }

    #[test]
    fn test_update_missing_fails() {
        let mut store = populated_store();
        assert!(matches!(
            store.update(CommentId(99), Some("x"), None),
            Err(ConvoError::CommentNotFound(CommentId(99)))
        ));
    }

    #[test]
    fn test_roots_in_insertion_order() {
        let mut store = populated_store();
        store.add(CommentId(10), "Second root", "Hank", None).unwrap();
        store.add(CommentId(11), "Third root", "Pam", None).unwrap();

        let roots: Vec<CommentId> = store.roots().map(|c| c.id).collect();
        assert_eq!(roots, vec![CommentId(1), CommentId(10), CommentId(11)]);
    }

    #[test]
    fn test_replace_all_discards_prior_state() {
        let mut store = populated_store();

        let mut nodes = IndexMap::new();
        nodes.insert(CommentId(100), Comment::new(CommentId(100), "fresh", "Zoe", None));
        store.replace_all(nodes);

        assert_eq!(store.len(), 1);
        assert!(!store.contains(CommentId(1)));
        assert!(store.contains(CommentId(100)));
    }
}
