//! Serialization codecs and export management
//!
//! Two exchange formats, structurally parallel: structured records
//! (JSON) and markup (XML). Export walks the forest from its roots;
//! import rebuilds a node index and swaps it in wholesale.

pub mod exporter;
pub mod markup;
pub mod record;

pub use exporter::{ExportManager, Exporter};
pub use markup::{markup_to_records, parse_markup, to_markup, MarkupExporter};
pub use record::{parse_records, records_to_nodes, to_records, CommentRecord, RecordExporter};
