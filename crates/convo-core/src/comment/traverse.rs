//! Read-only traversal over comment subtrees

use super::model::Comment;
use super::store::CommentStore;
use crate::error::{ConvoError, Result};
use crate::types::CommentId;
use std::collections::VecDeque;

impl CommentStore {
    /// Depth-first pre-order walk of the subtree rooted at `start`.
    ///
    /// The start comment is visited first, then each child's subtree
    /// in reply order. Fails with [`ConvoError::CommentNotFound`] if
    /// `start` is absent. The visitor borrows the store immutably, so
    /// mid-walk mutation is ruled out by the borrow checker.
    pub fn traverse_dfs<F>(&self, start: CommentId, mut visit: F) -> Result<()>
    where
        F: FnMut(&Comment),
    {
        let root = self
            .get(start)
            .ok_or(ConvoError::CommentNotFound(start))?;
        self.dfs_walk(root, &mut visit);
        Ok(())
    }

    fn dfs_walk<F>(&self, comment: &Comment, visit: &mut F)
    where
        F: FnMut(&Comment),
    {
        visit(comment);
        for child in &comment.children {
            if let Some(child) = self.get(*child) {
                self.dfs_walk(child, visit);
            }
        }
    }

    /// Breadth-first walk of the subtree rooted at `start`.
    ///
    /// Visits the start comment, then all comments at distance 1, then
    /// distance 2, and so on; within a level, order follows each
    /// parent's reply order. Fails with
    /// [`ConvoError::CommentNotFound`] if `start` is absent.
    pub fn traverse_bfs<F>(&self, start: CommentId, mut visit: F) -> Result<()>
    where
        F: FnMut(&Comment),
    {
        if !self.contains(start) {
            return Err(ConvoError::CommentNotFound(start));
        }

        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            if let Some(comment) = self.get(id) {
                visit(comment);
                queue.extend(comment.children.iter().copied());
            }
        }
        Ok(())
    }

    /// Collect depth-first visitation order as a list of ids
    pub fn collect_dfs(&self, start: CommentId) -> Result<Vec<CommentId>> {
        let mut order = Vec::new();
        self.traverse_dfs(start, |c| order.push(c.id))?;
        Ok(order)
    }

    /// Collect breadth-first visitation order as a list of ids
    pub fn collect_bfs(&self, start: CommentId) -> Result<Vec<CommentId>> {
        let mut order = Vec::new();
        self.traverse_bfs(start, |c| order.push(c.id))?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// 1 ── 2 ── 4
    ///   │    └─ 5
    ///   └─ 3 ── 6
    fn sample_store() -> CommentStore {
        let mut store = CommentStore::new();
        store.add(CommentId(1), "root", "Alice", None).unwrap();
        store.add(CommentId(2), "a", "Bob", Some(CommentId(1))).unwrap();
        store.add(CommentId(3), "b", "Carol", Some(CommentId(1))).unwrap();
        store.add(CommentId(4), "a.a", "Dave", Some(CommentId(2))).unwrap();
        store.add(CommentId(5), "a.b", "Eve", Some(CommentId(2))).unwrap();
        store.add(CommentId(6), "b.a", "Frank", Some(CommentId(3))).unwrap();
        store
    }

    #[test]
    fn test_dfs_preorder() {
        let store = sample_store();
        let order = store.collect_dfs(CommentId(1)).unwrap();
        let ids: Vec<i64> = order.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_bfs_level_order() {
        let store = sample_store();
        let order = store.collect_bfs(CommentId(1)).unwrap();
        let ids: Vec<i64> = order.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_traversal_from_inner_node() {
        let store = sample_store();
        let ids: Vec<i64> = store
            .collect_dfs(CommentId(2))
            .unwrap()
            .iter()
            .map(|id| id.0)
            .collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_traversal_missing_start_fails() {
        let store = sample_store();
        assert!(matches!(
            store.traverse_dfs(CommentId(99), |_| {}),
            Err(ConvoError::CommentNotFound(CommentId(99)))
        ));
        assert!(matches!(
            store.traverse_bfs(CommentId(99), |_| {}),
            Err(ConvoError::CommentNotFound(CommentId(99)))
        ));
    }

    #[test]
    fn test_visitor_sees_comment_fields() {
        let store = sample_store();
        let mut authors = Vec::new();
        store
            .traverse_bfs(CommentId(3), |c| authors.push(c.author.clone()))
            .unwrap();
        assert_eq!(authors, vec!["Carol", "Frank"]);
    }

    #[test]
    fn test_orphan_subtree_excluded_after_removal() {
        let mut store = sample_store();
        store.remove(CommentId(2)).unwrap();

        let ids: Vec<i64> = store
            .collect_dfs(CommentId(1))
            .unwrap()
            .iter()
            .map(|id| id.0)
            .collect();
        assert_eq!(ids, vec![1, 3, 6]);

        // Orphans stay individually traversable as subtree roots.
        let ids: Vec<i64> = store
            .collect_dfs(CommentId(4))
            .unwrap()
            .iter()
            .map(|id| id.0)
            .collect();
        assert_eq!(ids, vec![4]);
    }
}
