//! Atom 1.0 renderer

use chrono::{DateTime, SecondsFormat, Utc};

use super::xml::XmlDocument;
use crate::domain::entities::{Feed, FeedItem};
use crate::error::SinkError;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Render a feed as an Atom document
pub fn render_atom(feed: &Feed) -> Result<Vec<u8>, SinkError> {
    let mut doc = XmlDocument::new()?;

    doc.start("feed", &[("xmlns", ATOM_NS)])?;
    doc.text_element("title", &feed.title)?;
    doc.text_element("id", &feed.link_href)?;
    doc.text_element("updated", &atom_date(&feed.created_at))?;
    doc.text_element("subtitle", &feed.description)?;
    doc.empty("link", &[("href", feed.link_href.as_str()), ("rel", "alternate")])?;

    for item in &feed.items {
        render_entry(&mut doc, item)?;
    }

    doc.end("feed")?;
    Ok(doc.finish())
}

fn render_entry(doc: &mut XmlDocument, item: &FeedItem) -> Result<(), SinkError> {
    let created = atom_date(&item.created_at);

    doc.start("entry", &[])?;
    doc.text_element("title", &item.title)?;
    doc.text_element("updated", &created)?;
    doc.text_element("id", &item.link_href)?;
    doc.empty("link", &[("href", item.link_href.as_str()), ("rel", "alternate")])?;
    doc.text_element("published", &created)?;
    doc.end("entry")
}

fn atom_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
