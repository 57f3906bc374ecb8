//! Streaming record reader.
//!
//! Reads a markup document event by event and yields each record
//! (any element whose name is the record tag, at any depth) as a standalone [Element].
//! Only the record being built is kept in memory.
use std::collections::HashMap;
use std::io::BufRead;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::element::Element;
use super::entities;
use crate::error::SourceReadError;

pub struct RecordReader<R> {
    reader: Reader<R>,
    record_tag: &'static str,
    entities: HashMap<String, String>,
    buf: Vec<u8>,
    seen_root: bool,
    closed_root: bool,
    // elements opened outside of records and not closed yet
    open: usize,
    done: bool,
    records: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R, record_tag: &'static str) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.expand_empty_elements(true);

        Self {
            reader,
            record_tag,
            entities: HashMap::new(),
            buf: Vec::new(),
            seen_root: false,
            closed_root: false,
            open: 0,
            done: false,
            records: 0,
        }
    }

    /// Entities declared in the document type declaration seen so far.
    pub fn entities(&self) -> &HashMap<String, String> {
        &self.entities
    }

    fn next_record(&mut self) -> Result<Option<Element>, SourceReadError> {
        let mut buf = std::mem::take(&mut self.buf);
        let record = self.read_record(&mut buf);
        self.buf = buf;
        record
    }

    fn read_record(&mut self, buf: &mut Vec<u8>) -> Result<Option<Element>, SourceReadError> {
        // open elements of the record being built, the record itself at the bottom
        let mut stack: Vec<Element> = Vec::new();

        loop {
            buf.clear();
            let event = self
                .reader
                .read_event_into(buf)
                .map_err(|e| self.xml_error(e))?;

            match event {
                Event::DocType(doctype) => {
                    let declarations = entities::parse_declarations(&String::from_utf8_lossy(&doctype));
                    debug!("{} entities declared in doctype", declarations.len());
                    self.entities.extend(declarations);
                }
                Event::Start(start) => {
                    if self.closed_root {
                        return Err(self.outside_root());
                    }
                    self.seen_root = true;
                    if !stack.is_empty() || start.name().as_ref() == self.record_tag.as_bytes() {
                        stack.push(self.element(&start)?);
                    } else {
                        self.open += 1;
                    }
                }
                Event::End(_) => match stack.pop() {
                    Some(element) => match stack.last_mut() {
                        Some(parent) => parent.push_child(element),
                        None => {
                            self.records += 1;
                            self.closed_root = self.open == 0;
                            return Ok(Some(element));
                        }
                    },
                    None => {
                        self.open = self.open.saturating_sub(1);
                        self.closed_root = self.open == 0;
                    }
                },
                Event::Text(text) => match stack.last_mut() {
                    Some(current) => {
                        let text = text
                            .unescape_with(|name| self.entities.get(name).map(String::as_str))
                            .map_err(|e| self.xml_error(e))?;
                        current.push_text(&text);
                    }
                    None => {
                        if self.open == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                            return Err(self.outside_root());
                        }
                    }
                },
                Event::CData(cdata) => match stack.last_mut() {
                    Some(current) => {
                        let text = self
                            .reader
                            .decoder()
                            .decode(&cdata)
                            .map_err(|e| self.xml_error(e))?;
                        current.push_text(&text);
                    }
                    None => {
                        if self.open == 0 {
                            return Err(self.outside_root());
                        }
                    }
                },
                Event::Eof => {
                    if !stack.is_empty() || self.open > 0 {
                        return Err(SourceReadError::Truncated {
                            records: self.records,
                        });
                    }
                    if !self.seen_root {
                        return Err(SourceReadError::NoRoot);
                    }
                    return Ok(None);
                }
                _ => (),
            }
        }
    }

    fn element(&self, start: &BytesStart) -> Result<Element, SourceReadError> {
        let decoder = self.reader.decoder();
        let qname = start.name();
        let name = decoder
            .decode(qname.as_ref())
            .map_err(|e| self.xml_error(e))?;
        let mut element = Element::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e.into()))?;
            let key = decoder
                .decode(attr.key.as_ref())
                .map_err(|e| self.xml_error(e))?;
            let value = attr
                .unescape_value_with(|name| self.entities.get(name).map(String::as_str))
                .map_err(|e| self.xml_error(e))?;
            element = element.with_attribute(key, value);
        }

        Ok(element)
    }

    fn outside_root(&self) -> SourceReadError {
        SourceReadError::OutsideRoot {
            position: self.reader.buffer_position(),
        }
    }

    fn xml_error(&self, source: quick_xml::Error) -> SourceReadError {
        SourceReadError::Xml {
            position: self.reader.buffer_position(),
            source,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Element, SourceReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
