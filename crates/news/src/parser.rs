//! Feed Parser
//!
//! Streaming RSS 2.0 / Atom parser built on quick-xml. Only the fields the
//! pipeline needs are extracted: title, summary, link and publication date.

use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{NewsError, NewsResult};

/// One `<item>` (RSS) or `<entry>` (Atom).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    /// Raw summary, possibly containing HTML markup.
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Content,
    Link,
    Published,
    Updated,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"description" | b"summary" => Some(Field::Summary),
            // `content:encoded` has local name `encoded`
            b"content" | b"encoded" => Some(Field::Content),
            b"link" => Some(Field::Link),
            b"pubDate" | b"published" => Some(Field::Published),
            b"updated" | b"date" => Some(Field::Updated),
            _ => None,
        }
    }
}

fn is_entry(name: &[u8]) -> bool {
    matches!(name, b"item" | b"entry")
}

/// Entry under construction plus the field currently being read.
#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
    content: Option<String>,
    updated: Option<DateTime<FixedOffset>>,
    field: Option<Field>,
    nested: usize,
    text: String,
}

impl EntryBuilder {
    fn begin_field(&mut self, field: Field) {
        self.field = Some(field);
        self.nested = 0;
        self.text.clear();
    }

    fn end_field(&mut self) {
        let Some(field) = self.field.take() else {
            return;
        };
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        match field {
            Field::Title => self.entry.title = text.to_string(),
            Field::Summary if self.entry.summary.is_none() => {
                self.entry.summary = Some(text.to_string())
            }
            Field::Content if self.content.is_none() => self.content = Some(text.to_string()),
            Field::Link if !text.is_empty() => self.entry.link = Some(text.to_string()),
            Field::Published => self.entry.published = parse_date(text),
            Field::Updated => self.updated = parse_date(text),
            _ => {}
        }
    }

    /// Atom links carry the URL in `href`; prefer `rel="alternate"` or no rel.
    fn take_link_href(&mut self, e: &BytesStart<'_>) {
        if self.entry.link.is_some() {
            return;
        }
        let rel = e
            .try_get_attribute("rel")
            .ok()
            .flatten()
            .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()));
        if !matches!(rel.as_deref(), None | Some("alternate")) {
            return;
        }
        if let Ok(Some(href)) = e.try_get_attribute("href") {
            if let Ok(value) = href.unescape_value() {
                self.entry.link = Some(value.into_owned());
            }
        }
    }

    fn finish(mut self) -> FeedEntry {
        if self.entry.summary.as_deref().map_or(true, str::is_empty) {
            if let Some(content) = self.content.take() {
                self.entry.summary = Some(content);
            }
        }
        if self.entry.published.is_none() {
            self.entry.published = self.updated;
        }
        self.entry
    }
}

/// Parse an RFC 2822 (RSS) or RFC 3339 (Atom) timestamp.
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

/// Parse an RSS or Atom document into its entries, in document order.
///
/// Entries without a title are skipped. Malformed XML is an error.
pub fn parse_feed(xml: &str) -> NewsResult<Vec<FeedEntry>> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut current: Option<EntryBuilder> = None;
    let mut skipped = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name();
                let name = local.as_ref();
                match current.as_mut() {
                    None if is_entry(name) => current = Some(EntryBuilder::default()),
                    None => {}
                    Some(b) if b.field.is_some() => b.nested += 1,
                    Some(b) => {
                        if let Some(field) = Field::from_local_name(name) {
                            if field == Field::Link {
                                b.take_link_href(e);
                            }
                            b.begin_field(field);
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(b) = current.as_mut() {
                    if b.field.is_none() && e.local_name().as_ref() == b"link" {
                        b.take_link_href(e);
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(b) = current.as_mut().filter(|b| b.field.is_some()) {
                    match e.unescape() {
                        Ok(text) => b.text.push_str(&text),
                        Err(_) => b.text.push_str(&String::from_utf8_lossy(e)),
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(b) = current.as_mut().filter(|b| b.field.is_some()) {
                    b.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(ref e)) => {
                let local = e.local_name();
                let name = local.as_ref();
                if let Some(b) = current.as_mut() {
                    if b.field.is_some() {
                        if b.nested == 0 {
                            b.end_field();
                        } else {
                            b.nested -= 1;
                        }
                    } else if is_entry(name) {
                        if let Some(done) = current.take() {
                            let entry = done.finish();
                            if entry.title.is_empty() {
                                skipped += 1;
                            } else {
                                entries.push(entry);
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(NewsError::parse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped feed entries without a title");
    }
    Ok(entries)
}
