//! RSS 2.0 renderer

use super::xml::XmlDocument;
use crate::domain::entities::{Feed, FeedItem};
use crate::error::SinkError;

/// Render a feed as an RSS 2.0 document
pub fn render_rss(feed: &Feed) -> Result<Vec<u8>, SinkError> {
    let mut doc = XmlDocument::new()?;

    doc.start("rss", &[("version", "2.0")])?;
    doc.start("channel", &[])?;
    doc.text_element("title", &feed.title)?;
    doc.text_element("link", &feed.link_href)?;
    doc.text_element("description", &feed.description)?;
    doc.text_element("lastBuildDate", &feed.created_at.to_rfc2822())?;

    for item in &feed.items {
        render_item(&mut doc, item)?;
    }

    doc.end("channel")?;
    doc.end("rss")?;
    Ok(doc.finish())
}

fn render_item(doc: &mut XmlDocument, item: &FeedItem) -> Result<(), SinkError> {
    doc.start("item", &[])?;
    doc.text_element("title", &item.title)?;
    doc.text_element("link", &item.link_href)?;
    doc.text_element("guid", &item.link_href)?;
    doc.text_element("pubDate", &item.created_at.to_rfc2822())?;
    doc.end("item")
}
