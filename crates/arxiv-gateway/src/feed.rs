//! Atom feed parsing for arXiv export API responses.
//!
//! The reader is namespace-aware: only elements bound to the Atom namespace
//! count, whatever prefix the document uses. Entries are the `entry`
//! children of the root element; inside an entry only direct children are
//! read (`id`, `title`, `summary`, `author`), plus the `name` child of each
//! author. Missing children degrade to empty strings.

use std::mem;

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

use crate::config::api;
use crate::error::FeedError;
use crate::models::{PaperRecord, paper_id_from_url};

/// Parse a feed document into records, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<PaperRecord>, FeedError> {
    let mut reader = NsReader::from_str(xml);
    let mut records = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut saw_root = false;

    loop {
        let (atom, event) = next_event(&mut reader)?;

        match event {
            Event::Start(e) => {
                saw_root = true;
                if open.len() == 1 && atom && e.local_name().as_ref() == b"entry" {
                    records.push(read_entry(&mut reader)?);
                } else {
                    open.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                if open.len() == 1 && atom && e.local_name().as_ref() == b"entry" {
                    records.push(EntryFields::default().finish());
                }
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(FeedError::UnexpectedEof(unclosed));
    }
    if !saw_root {
        return Err(FeedError::MissingRoot);
    }

    tracing::debug!(entries = records.len(), "Parsed Atom feed");
    Ok(records)
}

/// Parse a document whose root element is a single entry.
///
/// The root's own name is not checked.
pub fn parse_entry(xml: &str) -> Result<PaperRecord, FeedError> {
    let mut reader = NsReader::from_str(xml);

    loop {
        match next_event(&mut reader)?.1 {
            Event::Start(_) => return read_entry(&mut reader),
            Event::Empty(_) => return Ok(EntryFields::default().finish()),
            Event::Eof => return Err(FeedError::MissingRoot),
            _ => {}
        }
    }
}

/// Next event, paired with whether its element is in the Atom namespace.
///
/// The resolved namespace borrows the reader, so it is reduced to a flag
/// before the caller reads further.
fn next_event<'i>(reader: &mut NsReader<&'i [u8]>) -> Result<(bool, Event<'i>), FeedError> {
    let (ns, event) = reader.read_resolved_event()?;
    let atom = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == api::ATOM_NS);
    Ok((atom, event))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Title,
    Summary,
    AuthorName,
}

enum Slot {
    Text(Field),
    Author,
}

#[derive(Debug, Default)]
struct EntryFields {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    authors: Vec<String>,
    in_author: bool,
    author_name: Option<String>,
}

impl EntryFields {
    /// Which slot a child element fills, if any.
    ///
    /// `depth` counts levels below the entry (direct children are 1).
    fn slot_for(&self, depth: usize, atom: bool, local: &[u8]) -> Option<Slot> {
        if !atom {
            return None;
        }
        match (depth, local) {
            (1, b"id") if self.id.is_none() => Some(Slot::Text(Field::Id)),
            (1, b"title") if self.title.is_none() => Some(Slot::Text(Field::Title)),
            (1, b"summary") if self.summary.is_none() => Some(Slot::Text(Field::Summary)),
            (1, b"author") => Some(Slot::Author),
            (2, b"name") if self.in_author && self.author_name.is_none() => {
                Some(Slot::Text(Field::AuthorName))
            }
            _ => None,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let target = match field {
            Field::Id => &mut self.id,
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::AuthorName => &mut self.author_name,
        };
        target.get_or_insert(value);
    }

    fn close_author(&mut self) {
        if let Some(name) = self.author_name.take() {
            self.authors.push(name);
        }
        self.in_author = false;
    }

    fn finish(self) -> PaperRecord {
        let paper_id = self.id.as_deref().map(paper_id_from_url).unwrap_or_default().to_string();
        PaperRecord::new(
            paper_id,
            self.title.unwrap_or_default(),
            self.authors.join(", "),
            self.summary.unwrap_or_default(),
        )
    }
}

/// Read the children of an entry whose start tag was just consumed, up to
/// and including its end tag.
fn read_entry(reader: &mut NsReader<&[u8]>) -> Result<PaperRecord, FeedError> {
    let mut fields = EntryFields::default();
    let mut depth = 0usize;
    let mut capture: Option<(Field, usize)> = None;
    let mut text = String::new();

    loop {
        let (atom, event) = next_event(reader)?;

        match event {
            Event::Start(e) => {
                depth += 1;
                match fields.slot_for(depth, atom, e.local_name().as_ref()) {
                    Some(Slot::Text(field)) => {
                        capture = Some((field, depth));
                        text.clear();
                    }
                    Some(Slot::Author) => {
                        fields.in_author = true;
                        fields.author_name = None;
                    }
                    None => {}
                }
            }
            Event::Empty(e) => match fields.slot_for(depth + 1, atom, e.local_name().as_ref()) {
                Some(Slot::Text(field)) => fields.set(field, String::new()),
                // <author/> has no name and is skipped
                Some(Slot::Author) | None => {}
            },
            Event::Text(t) => {
                if matches!(capture, Some((_, d)) if d == depth) {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if matches!(capture, Some((_, d)) if d == depth) {
                    text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Ok(fields.finish());
                }
                if let Some((field, d)) = capture {
                    if d == depth {
                        fields.set(field, mem::take(&mut text));
                        capture = None;
                    }
                }
                if depth == 1 && fields.in_author {
                    fields.close_author();
                }
                depth -= 1;
            }
            Event::Eof => return Err(FeedError::UnexpectedEof("entry".to_string())),
            _ => {}
        }
    }
}
