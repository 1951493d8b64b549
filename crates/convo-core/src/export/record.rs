//! Structured-record codec (JSON)
//!
//! The wire shape is a top-level array of root records, replies nested
//! recursively under `children`. Field names are a stable interop
//! contract; do not rename them.

use super::exporter::Exporter;
use crate::comment::{Comment, CommentStore};
use crate::error::{ConvoError, Result};
use crate::types::CommentId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One comment subtree in exchange form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Comment id
    pub comment_id: CommentId,
    /// Comment body
    pub text: String,
    /// Author name
    pub author: String,
    /// Parent id, `null` for roots
    pub parent_id: Option<CommentId>,
    /// Nested replies in reply order
    #[serde(default)]
    pub children: Vec<CommentRecord>,
}

impl CommentRecord {
    /// Build the record subtree for one comment.
    ///
    /// Children whose ids no longer resolve are skipped; that cannot
    /// happen for a store mutated only through its own operations.
    pub fn from_store(store: &CommentStore, comment: &Comment) -> Self {
        let children = comment
            .children
            .iter()
            .filter_map(|id| store.get(*id))
            .map(|child| CommentRecord::from_store(store, child))
            .collect();

        Self {
            comment_id: comment.id,
            text: comment.text.clone(),
            author: comment.author.clone(),
            parent_id: comment.parent_id,
            children,
        }
    }

    fn flatten_into(self, nodes: &mut IndexMap<CommentId, Comment>) -> Result<()> {
        let mut comment = Comment::new(self.comment_id, self.text, self.author, self.parent_id);
        comment.children = self.children.iter().map(|c| c.comment_id).collect();

        if nodes.insert(self.comment_id, comment).is_some() {
            return Err(ConvoError::Parse(format!(
                "duplicate comment id {} in import data",
                self.comment_id
            )));
        }
        for child in self.children {
            child.flatten_into(nodes)?;
        }
        Ok(())
    }
}

/// Build the full-forest record view: all roots in store order,
/// subtrees nested. Orphans are unreachable from any root and thus
/// excluded.
pub fn to_records(store: &CommentStore) -> Vec<CommentRecord> {
    store
        .roots()
        .map(|root| CommentRecord::from_store(store, root))
        .collect()
}

/// Flatten nested records into a node index, pre-order, rejecting
/// duplicate ids. All-or-nothing: errors leave no partial result
/// behind because the caller only swaps the map in on success.
pub fn records_to_nodes(records: Vec<CommentRecord>) -> Result<IndexMap<CommentId, Comment>> {
    let mut nodes = IndexMap::new();
    for record in records {
        record.flatten_into(&mut nodes)?;
    }
    Ok(nodes)
}

/// Parse structured-record text into a node index
pub fn parse_records(text: &str) -> Result<IndexMap<CommentId, Comment>> {
    let records: Vec<CommentRecord> = serde_json::from_str(text)?;
    records_to_nodes(records)
}

impl CommentStore {
    /// Replace the store's contents with the forest parsed from
    /// structured-record text.
    ///
    /// Destructive, never a merge. On any parse failure the store is
    /// left exactly as it was.
    pub fn import_records(&mut self, text: &str) -> Result<()> {
        let nodes = parse_records(text)?;
        debug!(comments = nodes.len(), "importing records");
        self.replace_all(nodes);
        Ok(())
    }
}

/// Structured-record exporter with pretty/compact modes
pub struct RecordExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl RecordExporter {
    /// Create a new record exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

impl Exporter for RecordExporter {
    fn export(&self, store: &CommentStore) -> Result<String> {
        let records = to_records(store);

        let json = if self.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
