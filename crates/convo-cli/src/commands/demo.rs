//! Demo command - sample-tree walkthrough

use crate::render;
use anyhow::Context;
use clap::Args;
use convo_core::config::Config;
use convo_core::export::ExportManager;
use convo_core::{CommentId, CommentStore};
use std::path::PathBuf;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Directory the exchange files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip writing the exchange files
    #[arg(long)]
    pub no_files: bool,
}

/// Build the sample discussion used throughout the walkthrough:
/// three roots (1, 8, 16) with nested reply threads.
pub fn sample_tree() -> CommentStore {
    let mut store = CommentStore::new();
    let c = CommentId;

    // Mirrors the add-call order of the original demo data set.
    let entries: [(i64, &str, &str, Option<i64>); 17] = [
        (1, "Root comment", "Alice", None),
        (2, "Reply to root", "Bob", Some(1)),
        (3, "Another reply", "Charlie", Some(1)),
        (4, "Nested reply", "Dave", Some(2)),
        (5, "Further nested reply", "Eve", Some(4)),
        (6, "Sibling reply to nested", "Frank", Some(2)),
        (7, "Deeply nested reply", "Grace", Some(5)),
        (8, "Another root-level comment", "Hank", None),
        (9, "Reply to another root-level comment", "Ivy", Some(8)),
        (10, "Nested under Ivy", "Jack", Some(9)),
        (11, "Another reply to Ivy", "Ken", Some(9)),
        (12, "Reply to Charlie", "Liam", Some(3)),
        (13, "Further nesting under Ken", "Mia", Some(11)),
        (14, "Another deeply nested reply", "Nina", Some(13)),
        (15, "Sibling to deeply nested", "Oscar", Some(13)),
        (16, "Independent root-level comment", "Pam", None),
        (17, "Reply to Pam", "Quincy", Some(16)),
    ];

    for (id, text, author, parent) in entries {
        store
            .add(c(id), text, author, parent.map(c))
            .expect("sample tree entries are well-formed");
    }
    store
}

/// Execute the demo command
pub fn execute(args: DemoArgs, config: &Config) -> anyhow::Result<()> {
    let mut store = sample_tree();
    tracing::info!(comments = store.len(), "sample tree built");

    println!("{}", render::render_dfs(&store, CommentId(1))?);
    println!("{}", render::render_bfs(&store, CommentId(1))?);

    store.remove(CommentId(4))?;
    println!("\nRemoved comment 4; its replies are now orphaned.\n");

    let manager = ExportManager::new();
    let format = if config.export.pretty { "json" } else { "json-compact" };

    let json = if args.no_files {
        manager.export(&store, format)?
    } else {
        let path = args.output_dir.join(&config.export.records_file);
        let text = manager
            .export_to_file(&store, format, &path)
            .with_context(|| format!("Failed to export records to {}", path.display()))?;
        println!("Wrote {}", path.display());
        text
    };

    let xml = if args.no_files {
        manager.export(&store, "xml")?
    } else {
        let path = args.output_dir.join(&config.export.markup_file);
        let text = manager
            .export_to_file(&store, "xml", &path)
            .with_context(|| format!("Failed to export markup to {}", path.display()))?;
        println!("Wrote {}", path.display());
        text
    };

    store.import_records(&json)?;
    println!("\nForest reimported from records:");
    print!("{}", render::render_forest(&store));

    store.import_markup(&xml)?;
    println!("\nForest reimported from markup:");
    print!("{}", render::render_forest(&store));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tree_shape() {
        let store = sample_tree();
        assert_eq!(store.len(), 17);

        let roots: Vec<i64> = store.roots().map(|c| c.id.0).collect();
        assert_eq!(roots, vec![1, 8, 16]);
    }
}
