//! Terminal rendering of comment forests

use colored::Colorize;
use convo_core::{Comment, CommentId, CommentStore};
use std::collections::VecDeque;
use std::fmt::Write;

fn comment_line(comment: &Comment) -> String {
    format!(
        "{} {}",
        comment.text,
        format!("(by {})", comment.author).dimmed()
    )
}

/// Render the whole forest as a box-drawing tree, one block per root
pub fn render_forest(store: &CommentStore) -> String {
    let mut out = String::new();
    for root in store.roots() {
        render_node(store, root, "", &mut out);
    }
    out
}

fn render_node(store: &CommentStore, comment: &Comment, prefix: &str, out: &mut String) {
    let _ = writeln!(out, "{}{}", prefix, comment_line(comment));

    let children: Vec<&Comment> = comment
        .children
        .iter()
        .filter_map(|id| store.get(*id))
        .collect();
    for (i, child) in children.iter().enumerate() {
        let connector = if i == children.len() - 1 {
            "    └── "
        } else {
            "    ├── "
        };
        render_node(store, child, &format!("{prefix}{connector}"), out);
    }
}

/// Render the depth-first visitation order, indented by depth
pub fn render_dfs(store: &CommentStore, start: CommentId) -> convo_core::Result<String> {
    let mut out = String::from("DFS:\n");
    render_dfs_node(store, start, 0, &mut out)?;
    Ok(out)
}

fn render_dfs_node(
    store: &CommentStore,
    id: CommentId,
    level: usize,
    out: &mut String,
) -> convo_core::Result<()> {
    let comment = store
        .get(id)
        .ok_or(convo_core::ConvoError::CommentNotFound(id))?;
    let _ = writeln!(out, "{}- {}", "    ".repeat(level), comment_line(comment));
    for child in &comment.children {
        if store.get(*child).is_some() {
            render_dfs_node(store, *child, level + 1, out)?;
        }
    }
    Ok(())
}

/// Render the breadth-first visitation order, grouped by level
pub fn render_bfs(store: &CommentStore, start: CommentId) -> convo_core::Result<String> {
    if store.get(start).is_none() {
        return Err(convo_core::ConvoError::CommentNotFound(start));
    }

    let mut out = String::from("BFS:\n");
    let mut queue = VecDeque::from([start]);
    let mut level = 0;

    while !queue.is_empty() {
        let _ = writeln!(out, "\nLevel {level}:");
        for _ in 0..queue.len() {
            let id = queue.pop_front().unwrap_or(start);
            if let Some(comment) = store.get(id) {
                let _ = writeln!(out, "- {}", comment_line(comment));
                queue.extend(comment.children.iter().copied());
            }
        }
        level += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> CommentStore {
        let mut store = CommentStore::new();
        store.add(CommentId(1), "root", "Alice", None).unwrap();
        store.add(CommentId(2), "first", "Bob", Some(CommentId(1))).unwrap();
        store.add(CommentId(3), "second", "Carol", Some(CommentId(1))).unwrap();
        store.add(CommentId(4), "nested", "Dave", Some(CommentId(2))).unwrap();
        store
    }

    #[test]
    fn test_render_forest_connectors() {
        colored::control::set_override(false);
        let out = render_forest(&sample_store());
        assert!(out.contains("root (by Alice)"));
        assert!(out.contains("├── first (by Bob)"));
        assert!(out.contains("└── second (by Carol)"));
        assert!(out.contains("└── nested (by Dave)"));
    }

    #[test]
    fn test_render_dfs_indentation() {
        colored::control::set_override(false);
        let out = render_dfs(&sample_store(), CommentId(1)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "DFS:");
        assert_eq!(lines[1], "- root (by Alice)");
        assert_eq!(lines[2], "    - first (by Bob)");
        assert_eq!(lines[3], "        - nested (by Dave)");
        assert_eq!(lines[4], "    - second (by Carol)");
    }

    #[test]
    fn test_render_bfs_levels() {
        colored::control::set_override(false);
        let out = render_bfs(&sample_store(), CommentId(1)).unwrap();
        assert!(out.contains("Level 0:\n- root (by Alice)"));
        assert!(out.contains("Level 1:\n- first (by Bob)\n- second (by Carol)"));
        assert!(out.contains("Level 2:\n- nested (by Dave)"));
    }

    #[test]
    fn test_render_missing_start() {
        let store = sample_store();
        assert!(render_dfs(&store, CommentId(99)).is_err());
        assert!(render_bfs(&store, CommentId(99)).is_err());
    }
}
