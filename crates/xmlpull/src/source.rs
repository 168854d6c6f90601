// Dweve xmlpull - Atom-Interning XML Pull Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Raw markup event sources.
//!
//! The parser does not read XML itself. It pulls [`RawEvent`]s from an
//! [`EventSource`], which is responsible for lexical well-formedness, entity
//! decoding and attribute parsing. [`XmlSource`] is the default source, backed
//! by `quick-xml`.

use crate::error::SourceError;
use crate::token::QualifiedName;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::error::Error as StdError;
use std::io::BufRead;

/// One raw markup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    /// An element start. Empty elements are delivered as a start followed by
    /// an end.
    Start(QualifiedName),
    /// An element end.
    End(QualifiedName),
    /// Character data, already entity-decoded.
    Text(String),
    /// Anything the parser ignores: declarations, comments, processing
    /// instructions, doctypes. Carries a short label for logging.
    Other(&'static str),
}

/// A pull-based producer of raw markup events in document order.
pub trait EventSource {
    /// Failure type. Returned to the caller unchanged.
    type Error: StdError + 'static;

    /// Pull the next event.
    ///
    /// Returns `Ok(None)` once the input is cleanly exhausted.
    fn next_event(&mut self) -> Result<Option<RawEvent>, Self::Error>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    type Error = S::Error;

    fn next_event(&mut self) -> Result<Option<RawEvent>, Self::Error> {
        (**self).next_event()
    }
}

/// Default event source over any buffered reader.
pub struct XmlSource<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> XmlSource<R> {
    /// Create a source delivering text exactly as read.
    pub fn new(reader: R) -> Self {
        Self::with_trim_text(reader, false)
    }

    /// Create a source, optionally trimming whitespace around text runs.
    pub fn with_trim_text(reader: R, trim_text: bool) -> Self {
        let mut reader = Reader::from_reader(reader);
        reader.expand_empty_elements(true);
        // Nesting identity is checked by the parser against interned names.
        reader.check_end_names(false);
        reader.trim_text(trim_text);
        Self {
            reader,
            buf: Vec::with_capacity(8192),
        }
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }
}

fn utf8(bytes: &[u8], pos: usize) -> Result<&str, SourceError> {
    std::str::from_utf8(bytes).map_err(|source| SourceError::Utf8 { pos, source })
}

impl<R: BufRead> EventSource for XmlSource<R> {
    type Error = SourceError;

    fn next_event(&mut self) -> Result<Option<RawEvent>, SourceError> {
        self.buf.clear();
        let event = match self.reader.read_event_into(&mut self.buf) {
            Ok(event) => event,
            Err(source) => {
                return Err(SourceError::Xml {
                    pos: self.reader.buffer_position(),
                    source,
                })
            }
        };

        let pos = self.reader.buffer_position();
        let raw = match event {
            // Empty is only reachable if expansion is turned off.
            Event::Start(e) | Event::Empty(e) => {
                RawEvent::Start(QualifiedName::parse(utf8(e.name().as_ref(), pos)?))
            }
            Event::End(e) => RawEvent::End(QualifiedName::parse(utf8(e.name().as_ref(), pos)?)),
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|source| SourceError::Xml { pos, source })?;
                RawEvent::Text(text.into_owned())
            }
            Event::CData(e) => RawEvent::Text(utf8(&e, pos)?.to_owned()),
            Event::Comment(_) => RawEvent::Other("comment"),
            Event::Decl(_) => RawEvent::Other("declaration"),
            Event::PI(_) => RawEvent::Other("processing instruction"),
            Event::DocType(_) => RawEvent::Other("doctype"),
            Event::Eof => return Ok(None),
        };
        Ok(Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(input: &str) -> Vec<RawEvent> {
        let mut source = XmlSource::new(input.as_bytes());
        let mut events = Vec::new();
        while let Some(event) = source.next_event().unwrap() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_start_end_text() {
        let events = drain("<a>hi</a>");
        assert_eq!(
            events,
            vec![
                RawEvent::Start(QualifiedName::new("", "a")),
                RawEvent::Text("hi".to_string()),
                RawEvent::End(QualifiedName::new("", "a")),
            ]
        );
    }

    #[test]
    fn test_empty_element_is_expanded() {
        let events = drain("<a/>");
        assert_eq!(
            events,
            vec![
                RawEvent::Start(QualifiedName::new("", "a")),
                RawEvent::End(QualifiedName::new("", "a")),
            ]
        );
    }

    #[test]
    fn test_prefixed_name_is_split() {
        let events = drain("<atom:feed></atom:feed>");
        assert_eq!(events[0], RawEvent::Start(QualifiedName::new("atom", "feed")));
    }

    #[test]
    fn test_entities_are_decoded() {
        let events = drain("<a>1 &lt; 2 &amp;&amp; 3</a>");
        assert_eq!(events[1], RawEvent::Text("1 < 2 && 3".to_string()));
    }

    #[test]
    fn test_cdata_is_text() {
        let events = drain("<a><![CDATA[<raw>]]></a>");
        assert_eq!(events[1], RawEvent::Text("<raw>".to_string()));
    }

    #[test]
    fn test_skipped_constructs() {
        let events = drain("<?xml version=\"1.0\"?><!-- c --><?pi data?><a/>");
        assert_eq!(events[0], RawEvent::Other("declaration"));
        assert_eq!(events[1], RawEvent::Other("comment"));
        assert_eq!(events[2], RawEvent::Other("processing instruction"));
        assert_eq!(events[3], RawEvent::Start(QualifiedName::new("", "a")));
    }

    #[test]
    fn test_mismatched_end_is_delivered() {
        let events = drain("<a></b>");
        assert_eq!(events[1], RawEvent::End(QualifiedName::new("", "b")));
    }

    #[test]
    fn test_trim_text() {
        let mut source = XmlSource::with_trim_text("<a>\n  <b/>\n</a>".as_bytes(), true);
        let mut events = Vec::new();
        while let Some(event) = source.next_event().unwrap() {
            events.push(event);
        }
        assert!(events.iter().all(|e| !matches!(e, RawEvent::Text(_))));
    }

    #[test]
    fn test_exhaustion_is_repeatable() {
        let mut source = XmlSource::new("".as_bytes());
        assert_eq!(source.next_event().unwrap(), None);
        assert_eq!(source.next_event().unwrap(), None);
    }
}
