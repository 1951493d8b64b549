//! Show command - render a forest from an exchange file

use crate::render;
use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use convo_core::{CommentId, CommentStore};
use std::path::{Path, PathBuf};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Exchange file to read (.json or .xml)
    pub input: PathBuf,

    /// Input format, inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<ExchangeFormat>,

    /// Print a traversal listing instead of the forest tree
    #[arg(short, long, value_enum)]
    pub traversal: Option<Traversal>,

    /// Start comment id for the traversal listing
    #[arg(short, long, requires = "traversal")]
    pub start: Option<i64>,
}

/// The two exchange formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExchangeFormat {
    /// Structured records (JSON)
    Json,
    /// Markup (XML)
    Xml,
}

impl ExchangeFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(ExchangeFormat::Json),
            Some("xml") => Ok(ExchangeFormat::Xml),
            _ => bail!(
                "Cannot infer format of {}; pass --format",
                path.display()
            ),
        }
    }
}

/// Traversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Traversal {
    /// Depth-first, pre-order
    Dfs,
    /// Breadth-first, level order
    Bfs,
}

/// Load a store from an exchange file
pub fn load_store(path: &Path, format: Option<ExchangeFormat>) -> anyhow::Result<CommentStore> {
    let format = match format {
        Some(format) => format,
        None => ExchangeFormat::from_path(path)?,
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut store = CommentStore::new();
    match format {
        ExchangeFormat::Json => store
            .import_records(&text)
            .with_context(|| format!("Failed to parse records from {}", path.display()))?,
        ExchangeFormat::Xml => store
            .import_markup(&text)
            .with_context(|| format!("Failed to parse markup from {}", path.display()))?,
    }
    Ok(store)
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> anyhow::Result<()> {
    let store = load_store(&args.input, args.format)?;

    match (args.traversal, args.start) {
        (Some(traversal), start) => {
            // Default to the first root when no start id is given.
            let start = match start {
                Some(id) => CommentId(id),
                None => match store.roots().next() {
                    Some(root) => root.id,
                    None => bail!("Forest in {} is empty", args.input.display()),
                },
            };
            let listing = match traversal {
                Traversal::Dfs => render::render_dfs(&store, start)?,
                Traversal::Bfs => render::render_bfs(&store, start)?,
            };
            print!("{listing}");
        }
        (None, _) => print!("{}", render::render_forest(&store)),
    }

    Ok(())
}
