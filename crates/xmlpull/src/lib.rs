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

//! Atom-Interning XML Pull Parser
//!
//! This crate turns an XML document into a flat stream of tag and text tokens,
//! one per call. Element names are interned into small integers ("atoms") so
//! consumers compare tag identity with integer equality, and an explicit
//! open-element stack rejects end tags that do not close the innermost open
//! element.
//!
//! # Features
//!
//! - **Pull-based**: the caller drives progress; no read-ahead beyond one event
//! - **Atoms**: [`AtomTable`] assigns ids in first-seen order, `""` is always 0
//! - **Parent links**: every tag and text token knows its enclosing element
//! - **Snapshots**: returned tags never change after they are handed out
//! - **Pluggable source**: lexing is delegated to an [`EventSource`];
//!   [`XmlSource`] (backed by `quick-xml`) is the default
//!
//! # Examples
//!
//! ## Matching Known Elements
//!
//! ```rust
//! use xmlpull::{Atom, Parser, Token};
//!
//! let xml = br#"<?xml version="1.0"?>
//! <config>
//!   <debug>true</debug>
//!   <name>server</name>
//! </config>"#;
//!
//! let mut parser = Parser::from_bytes(xml);
//! let debug = parser.intern("debug");
//!
//! let mut debug_enabled = false;
//! while let Some(token) = parser.next_token()? {
//!     if let Token::Text(text) = token {
//!         if text.is_tag(Atom::EMPTY, debug) {
//!             debug_enabled = text.as_bool();
//!         }
//!     }
//! }
//! assert!(debug_enabled);
//! # Ok::<(), xmlpull::PullError>(())
//! ```
//!
//! ## Iterating
//!
//! ```rust
//! use xmlpull::Parser;
//!
//! let tags = Parser::from_bytes(b"<a><b/></a>")
//!     .filter_map(|token| token.ok())
//!     .filter(|token| token.as_tag().is_some())
//!     .count();
//! assert_eq!(tags, 4);
//! ```
//!
//! ## Custom Event Sources
//!
//! ```rust
//! use std::convert::Infallible;
//! use xmlpull::{EventSource, Parser, QualifiedName, RawEvent};
//!
//! struct Fixed(Vec<RawEvent>);
//!
//! impl EventSource for Fixed {
//!     type Error = Infallible;
//!
//!     fn next_event(&mut self) -> Result<Option<RawEvent>, Infallible> {
//!         Ok(if self.0.is_empty() { None } else { Some(self.0.remove(0)) })
//!     }
//! }
//!
//! let source = Fixed(vec![
//!     RawEvent::Start(QualifiedName::parse("a")),
//!     RawEvent::End(QualifiedName::parse("a")),
//! ]);
//! let tokens: Vec<_> = Parser::new(source).collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```

mod atoms;
mod error;
mod parser;
mod source;
mod token;

pub use atoms::{Atom, AtomTable};
pub use error::{PullError, PullResult, SourceError};
pub use parser::{Parser, ParserConfig};
pub use source::{EventSource, RawEvent, XmlSource};
pub use token::{Element, QualifiedName, Tag, Text, Token};
