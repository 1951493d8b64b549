//! Exporter trait and manager

use crate::comment::CommentStore;
use crate::error::{ConvoError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait for comment-forest exporters
pub trait Exporter: Send + Sync {
    /// Export a store to string
    fn export(&self, store: &CommentStore) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        // Register default exporters
        manager.register(Box::new(super::record::RecordExporter::pretty()));
        manager.register(Box::new(super::record::RecordExporter::compact()));
        manager.register(Box::new(super::markup::MarkupExporter::new()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export a store to the specified format
    pub fn export(&self, store: &CommentStore, format: &str) -> Result<String> {
        let exporter = self.exporters.get(format).ok_or_else(|| {
            ConvoError::UnknownFormat(format.to_string())
        })?;

        exporter.export(store)
    }

    /// Export a store and write the result to a file sink.
    ///
    /// Rendering happens first and the rendered text is returned even
    /// though it was also written; callers that need the text survive
    /// a sink failure by calling [`export`](Self::export) and
    /// [`write_sink`](Self::write_sink) separately. Writing is atomic
    /// (temp file + rename).
    pub fn export_to_file(
        &self,
        store: &CommentStore,
        format: &str,
        path: &Path,
    ) -> Result<String> {
        let content = self.export(store, format)?;

        let exporter = self.exporters.get(format).ok_or_else(|| {
            ConvoError::UnknownFormat(format.to_string())
        })?;

        // Add extension if needed
        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        self.write_sink(&content, &final_path)?;
        Ok(content)
    }

    /// Write already-rendered text to a file sink atomically
    pub fn write_sink(&self, content: &str, path: &Path) -> Result<()> {
        write_atomic(content, path).map_err(|source| ConvoError::SinkWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "sink written");
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

fn write_atomic(content: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path: PathBuf = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&temp_path, path)
}
