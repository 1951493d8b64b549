//! Markup codec (XML)
//!
//! Wire shape: a `<comments>` root holding one `<comment>` element per
//! root comment; each `<comment>` carries `id`, `author` and
//! `parent_id` attributes (the literal `None` for roots), one nested
//! `<text>` element with the body, and its replies as nested
//! `<comment>` elements in reply order.

use super::exporter::Exporter;
use super::record::{records_to_nodes, CommentRecord};
use crate::comment::{Comment, CommentStore};
use crate::error::{ConvoError, Result};
use crate::types::CommentId;
use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

const ROOT_ELEMENT: &str = "comments";
const COMMENT_ELEMENT: &str = "comment";
const TEXT_ELEMENT: &str = "text";

/// Serialize the full forest to markup text
pub fn to_markup(store: &CommentStore) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for root in store.roots() {
        write_comment(&mut writer, store, root)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| ConvoError::Parse(format!("generated markup is not UTF-8: {e}")))
}

fn write_comment(
    writer: &mut Writer<Vec<u8>>,
    store: &CommentStore,
    comment: &Comment,
) -> Result<()> {
    let id = comment.id.to_string();
    let parent = comment
        .parent_id
        .map_or_else(|| "None".to_string(), |p| p.to_string());

    let mut elem = BytesStart::new(COMMENT_ELEMENT);
    elem.push_attribute(("id", id.as_str()));
    elem.push_attribute(("author", comment.author.as_str()));
    elem.push_attribute(("parent_id", parent.as_str()));
    writer.write_event(Event::Start(elem))?;

    writer.write_event(Event::Start(BytesStart::new(TEXT_ELEMENT)))?;
    writer.write_event(Event::Text(BytesText::new(&comment.text)))?;
    writer.write_event(Event::End(BytesEnd::new(TEXT_ELEMENT)))?;

    for child in &comment.children {
        if let Some(child) = store.get(*child) {
            write_comment(writer, store, child)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new(COMMENT_ELEMENT)))?;
    Ok(())
}

/// A `<comment>` element whose subtree is still being read
struct PendingComment {
    id: CommentId,
    author: String,
    parent_id: Option<CommentId>,
    text: Option<String>,
    children: Vec<CommentRecord>,
}

impl PendingComment {
    fn into_record(self) -> Result<CommentRecord> {
        let text = self.text.ok_or_else(|| ConvoError::MissingAttribute {
            element: COMMENT_ELEMENT.to_string(),
            name: TEXT_ELEMENT.to_string(),
        })?;
        Ok(CommentRecord {
            comment_id: self.id,
            text,
            author: self.author,
            parent_id: self.parent_id,
            children: self.children,
        })
    }
}

fn parse_comment_start(elem: &BytesStart<'_>) -> Result<PendingComment> {
    let mut id = None;
    let mut author = None;
    let mut parent_id = None;

    for attr in elem.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => {
                id = Some(value.parse::<CommentId>().map_err(|_| {
                    ConvoError::Parse(format!("invalid comment id `{value}`"))
                })?);
            }
            b"author" => author = Some(value.into_owned()),
            b"parent_id" => {
                // `None`/`none` marks a root; absence of the attribute
                // means the same thing.
                if value != "None" && value != "none" {
                    parent_id = Some(value.parse::<CommentId>().map_err(|_| {
                        ConvoError::Parse(format!("invalid parent id `{value}`"))
                    })?);
                }
            }
            _ => {}
        }
    }

    let missing = |name: &str| ConvoError::MissingAttribute {
        element: COMMENT_ELEMENT.to_string(),
        name: name.to_string(),
    };
    Ok(PendingComment {
        id: id.ok_or_else(|| missing("id"))?,
        author: author.ok_or_else(|| missing("author"))?,
        parent_id,
        text: None,
        children: Vec::new(),
    })
}

/// Parse markup text into nested records, document order
pub fn markup_to_records(text: &str) -> Result<Vec<CommentRecord>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut roots = Vec::new();
    let mut stack: Vec<PendingComment> = Vec::new();
    let mut saw_root = false;
    let mut root_closed = false;

    loop {
        match reader.read_event()? {
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)
            | Event::CData(_) => {}
            Event::Start(elem) => match elem.name().as_ref() {
                b"comments" => {
                    if saw_root {
                        return Err(ConvoError::Parse(
                            "nested <comments> element".to_string(),
                        ));
                    }
                    saw_root = true;
                }
                b"comment" => stack.push(parse_comment_start(&elem)?),
                b"text" => {
                    // read_text yields the raw inner text; entities
                    // like &lt; still need decoding.
                    let raw = reader.read_text(elem.name())?;
                    let body = quick_xml::escape::unescape(&raw)
                        .map_err(quick_xml::Error::from)?
                        .into_owned();
                    let pending = stack.last_mut().ok_or_else(|| {
                        ConvoError::Parse("<text> outside of <comment>".to_string())
                    })?;
                    pending.text = Some(body);
                }
                other => {
                    return Err(ConvoError::Parse(format!(
                        "unexpected element <{}>",
                        String::from_utf8_lossy(other)
                    )));
                }
            },
            Event::Empty(elem) => match elem.name().as_ref() {
                b"comments" => {
                    saw_root = true;
                    root_closed = true;
                }
                b"comment" => {
                    // Self-closing comment: attributes but no body.
                    let record = parse_comment_start(&elem)?.into_record()?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(record),
                        None => roots.push(record),
                    }
                }
                b"text" => {
                    let pending = stack.last_mut().ok_or_else(|| {
                        ConvoError::Parse("<text> outside of <comment>".to_string())
                    })?;
                    pending.text = Some(String::new());
                }
                other => {
                    return Err(ConvoError::Parse(format!(
                        "unexpected element <{}>",
                        String::from_utf8_lossy(other)
                    )));
                }
            },
            Event::End(elem) => match elem.name().as_ref() {
                b"comment" => {
                    let pending = stack.pop().ok_or_else(|| {
                        ConvoError::Parse("unexpected </comment>".to_string())
                    })?;
                    let record = pending.into_record()?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(record),
                        None => roots.push(record),
                    }
                }
                b"comments" => root_closed = true,
                // </text> is consumed by read_text above.
                _ => {}
            },
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    return Err(ConvoError::Parse(format!(
                        "stray text `{}` outside of <text>",
                        text.trim()
                    )));
                }
            }
            Event::Eof => {
                // A truncated document must not pass for an empty or
                // partial forest.
                if !stack.is_empty() {
                    return Err(ConvoError::Parse(
                        "unexpected end of document inside <comment>".to_string(),
                    ));
                }
                if saw_root && !root_closed {
                    return Err(ConvoError::Parse(format!(
                        "unclosed <{ROOT_ELEMENT}> element"
                    )));
                }
                break;
            }
        }
    }

    if !saw_root {
        return Err(ConvoError::Parse(format!(
            "missing <{ROOT_ELEMENT}> root element"
        )));
    }
    Ok(roots)
}

/// Parse markup text into a node index
pub fn parse_markup(text: &str) -> Result<IndexMap<CommentId, Comment>> {
    records_to_nodes(markup_to_records(text)?)
}

impl CommentStore {
    /// Replace the store's contents with the forest parsed from
    /// markup text.
    ///
    /// Destructive, never a merge. On any parse failure the store is
    /// left exactly as it was.
    pub fn import_markup(&mut self, text: &str) -> Result<()> {
        let nodes = parse_markup(text)?;
        debug!(comments = nodes.len(), "importing markup");
        self.replace_all(nodes);
        Ok(())
    }
}

/// Markup exporter
pub struct MarkupExporter;

impl MarkupExporter {
    /// Create a new markup exporter
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkupExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkupExporter {
    fn export(&self, store: &CommentStore) -> Result<String> {
        to_markup(store)
    }

    fn format_name(&self) -> &str {
        "xml"
    }

    fn file_extension(&self) -> &str {
        "xml"
    }
}
