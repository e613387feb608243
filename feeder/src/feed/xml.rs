//! Thin wrapper over the quick-xml event writer

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::SinkError;

pub(crate) struct XmlDocument {
    writer: Writer<Vec<u8>>,
}

impl XmlDocument {
    pub(crate) fn new() -> Result<Self, SinkError> {
        let mut doc = Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        doc.write(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        Ok(doc)
    }

    pub(crate) fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), SinkError> {
        let start = BytesStart::new(tag).with_attributes(attrs.iter().copied());
        self.write(Event::Start(start))
    }

    pub(crate) fn end(&mut self, tag: &str) -> Result<(), SinkError> {
        self.write(Event::End(BytesEnd::new(tag)))
    }

    pub(crate) fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), SinkError> {
        let element = BytesStart::new(tag).with_attributes(attrs.iter().copied());
        self.write(Event::Empty(element))
    }

    /// `<tag>text</tag>`, with `text` escaped
    pub(crate) fn text_element(&mut self, tag: &str, text: &str) -> Result<(), SinkError> {
        self.write(Event::Start(BytesStart::new(tag)))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new(tag)))
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        let mut bytes = self.writer.into_inner();
        bytes.push(b'\n');
        bytes
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), SinkError> {
        self.writer
            .write_event(event)
            .map_err(|e| SinkError::Xml(e.to_string()))
    }
}
