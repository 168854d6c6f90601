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

//! Pull parser implementation.
//!
//! The parser pulls raw events from an [`EventSource`], interns element names
//! into its [`AtomTable`], tracks the open-element stack and hands out one
//! [`Token`] per call.
//!
//! # Design Philosophy
//!
//! - **Pull-driven**: nothing happens between calls; at most one raw event is
//!   read ahead of the caller
//! - **Integer identity**: end tags are matched against the open element by
//!   comparing atoms, not strings
//! - **Fail fast**: a source error or a mismatched end tag ends the stream
//!
//! # Basic Usage
//!
//! ```rust
//! use xmlpull::{Parser, Token};
//!
//! let mut parser = Parser::from_bytes(b"<a><b>x</b></a>");
//!
//! while let Some(token) = parser.next_token()? {
//!     match token {
//!         Token::Tag(tag) if tag.is_start() => println!("open {}", tag.name()),
//!         Token::Tag(tag) => println!("close {}", tag.name()),
//!         Token::Text(text) => println!("text {:?}", text.text()),
//!     }
//! }
//! # Ok::<(), xmlpull::PullError>(())
//! ```

use crate::atoms::{Atom, AtomTable};
use crate::error::PullError;
use crate::source::{EventSource, RawEvent, XmlSource};
use crate::token::{Element, QualifiedName, Tag, Text, Token};
use std::io::{BufReader, Read};
use std::rc::Rc;
use tracing::{debug, trace};

/// Configuration for parsers built over the default `quick-xml` source.
///
/// # Examples
///
/// ```rust
/// use xmlpull::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert!(!config.trim_text);
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Buffer size for reading input.
    ///
    /// Only used by [`Parser::from_reader_with_config`].
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Trim whitespace around text runs and drop whitespace-only runs.
    ///
    /// Trimming is done by the event source. With the default, text is
    /// delivered exactly as read.
    ///
    /// Default: false
    pub trim_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            trim_text: false,
        }
    }
}

/// Streaming XML pull parser.
///
/// Owns one [`AtomTable`] for its whole lifetime and a cursor to the
/// innermost open element.
///
/// # Unclosed Elements
///
/// Reaching the end of the input while elements are still open is not an
/// error: [`next_token`](Self::next_token) returns `Ok(None)`. Callers that
/// need a complete document check [`depth`](Self::depth) afterwards.
///
/// ```rust
/// use xmlpull::Parser;
///
/// let mut parser = Parser::from_bytes(b"<a><b>");
/// while parser.next_token()?.is_some() {}
/// assert_eq!(parser.depth(), 2);
/// # Ok::<(), xmlpull::PullError>(())
/// ```
///
/// # Iterator Interface
///
/// `Parser` implements `Iterator<Item = Result<Token, PullError<_>>>`. The
/// iterator ends at end of input and after the first error.
pub struct Parser<S: EventSource> {
    source: S,
    atoms: AtomTable,
    cursor: Option<Rc<Element>>,
    depth: usize,
    done: bool,
}

impl<'a> Parser<XmlSource<&'a [u8]>> {
    /// Create a parser over an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(XmlSource::new(bytes))
    }

    /// Create a parser over an in-memory buffer with custom configuration.
    pub fn from_bytes_with_config(bytes: &'a [u8], config: &ParserConfig) -> Self {
        Self::new(XmlSource::with_trim_text(bytes, config.trim_text))
    }
}

impl<R: Read> Parser<XmlSource<BufReader<R>>> {
    /// Create a parser over any reader with default configuration.
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with_config(reader, &ParserConfig::default())
    }

    /// Create a parser over any reader with custom configuration.
    pub fn from_reader_with_config(reader: R, config: &ParserConfig) -> Self {
        let buffered = BufReader::with_capacity(config.buffer_size, reader);
        Self::new(XmlSource::with_trim_text(buffered, config.trim_text))
    }
}

impl<S: EventSource> Parser<S> {
    /// Create a parser pulling from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            atoms: AtomTable::new(),
            cursor: None,
            depth: 0,
            done: false,
        }
    }

    /// The parser's atom table.
    #[inline]
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Mutable access to the atom table, for interning names to compare
    /// against.
    #[inline]
    pub fn atoms_mut(&mut self) -> &mut AtomTable {
        &mut self.atoms
    }

    /// Intern `s` in the parser's atom table.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        self.atoms.intern(s)
    }

    /// The innermost open element, if any.
    #[inline]
    pub fn current(&self) -> Option<&Element> {
        self.cursor.as_deref()
    }

    /// Number of currently open elements.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The underlying event source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` when the source is cleanly exhausted. Declarations,
    /// comments and processing instructions are skipped.
    ///
    /// # Errors
    ///
    /// - [`PullError::Source`] if the event source fails
    /// - [`PullError::UnmatchedTag`] if an end tag does not close the
    ///   innermost open element
    ///
    /// Both are fatal; the parser's state is unspecified afterwards.
    pub fn next_token(&mut self) -> Result<Option<Token>, PullError<S::Error>> {
        loop {
            let event = match self.source.next_event().map_err(PullError::Source)? {
                Some(event) => event,
                None => return Ok(None),
            };

            match event {
                RawEvent::Start(name) => return Ok(Some(self.open(name).into())),
                RawEvent::End(name) => return self.close(name).map(|tag| Some(tag.into())),
                RawEvent::Text(text) => {
                    return Ok(Some(Text::new(text, self.cursor.clone()).into()));
                }
                RawEvent::Other(kind) => trace!(kind, depth = self.depth, "skipping raw event"),
            }
        }
    }

    fn open(&mut self, name: QualifiedName) -> Tag {
        let space = self.atoms.intern(&name.space);
        let local = self.atoms.intern(&name.local);

        let element = Element::new(self.cursor.take(), name, space, local);
        self.cursor = Some(Rc::clone(&element));
        self.depth += 1;
        Tag::start(element)
    }

    fn close(&mut self, name: QualifiedName) -> Result<Tag, PullError<S::Error>> {
        let space = self.atoms.intern(&name.space);
        let local = self.atoms.intern(&name.local);

        let element = match &self.cursor {
            Some(current) if current.is_tag(space, local) => Rc::clone(current),
            current => {
                debug!(
                    found = %name,
                    open = ?current.as_ref().map(|e| e.name().to_string()),
                    "unmatched end tag"
                );
                return Err(PullError::unmatched_tag(name.to_string()));
            }
        };

        element.close();
        self.cursor = element.parent_rc();
        self.depth -= 1;
        Ok(Tag::end(element))
    }
}

impl<S: EventSource> Iterator for Parser<S> {
    type Item = Result<Token, PullError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
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
