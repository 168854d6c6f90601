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

//! Token types yielded by the pull parser.
//!
//! # Live Elements and Snapshots
//!
//! The parser keeps the currently open elements as a chain of [`Element`]
//! nodes linked to their parents. An element stays open until its end tag is
//! read; [`Element::is_open`] reflects that live state.
//!
//! What the caller receives is a [`Tag`]: a snapshot whose `is_start` and
//! `is_end` flags are fixed at the moment it was returned. A start tag handed
//! out earlier keeps reporting `is_start() == true` after the element closes.
//!
//! # Example Token Sequence
//!
//! For `<a><b>x</b></a>` the parser yields:
//!
//! ```text
//! Tag(start a)
//! Tag(start b)          parent: a
//! Text("x")             element: b
//! Tag(end b)            parent: a
//! Tag(end a)
//! ```

use crate::atoms::Atom;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A qualified element name split into its space and local parts.
///
/// The space part is the prefix as written (`atom` in `atom:entry`), or empty
/// when the name has no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    /// Namespace part.
    pub space: String,
    /// Local part.
    pub local: String,
}

impl QualifiedName {
    /// Create a name from its parts.
    pub fn new(space: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }

    /// Split a name as written (`prefix:local` or `local`).
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((space, local)) => Self::new(space, local),
            None => Self::new("", raw),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.space.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.space, self.local)
        }
    }
}

/// A node of the open-element stack.
///
/// Identity fields never change. The open flag is cleared once, when the
/// matching end tag is read.
#[derive(Debug)]
pub struct Element {
    parent: Option<Rc<Element>>,
    name: QualifiedName,
    space: Atom,
    local: Atom,
    open: Cell<bool>,
}

impl Element {
    pub(crate) fn new(
        parent: Option<Rc<Element>>,
        name: QualifiedName,
        space: Atom,
        local: Atom,
    ) -> Rc<Self> {
        Rc::new(Self {
            parent,
            name,
            space,
            local,
            open: Cell::new(true),
        })
    }

    pub(crate) fn close(&self) {
        self.open.set(false);
    }

    /// The element that was open when this one started, if any.
    #[inline]
    pub fn parent(&self) -> Option<&Element> {
        self.parent.as_deref()
    }

    pub(crate) fn parent_rc(&self) -> Option<Rc<Element>> {
        self.parent.clone()
    }

    /// Qualified name as written. Kept for diagnostics.
    #[inline]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Interned space part.
    #[inline]
    pub fn space(&self) -> Atom {
        self.space
    }

    /// Interned local part.
    #[inline]
    pub fn local(&self) -> Atom {
        self.local
    }

    /// Whether the element's end tag has not been read yet.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Whether this element has the given interned name.
    #[inline]
    pub fn is_tag(&self, space: Atom, local: Atom) -> bool {
        self.space == space && self.local == local
    }

    /// Whether this element's parent has the given interned name.
    #[inline]
    pub fn is_parent_tag(&self, space: Atom, local: Atom) -> bool {
        self.parent().is_some_and(|p| p.is_tag(space, local))
    }

    /// Number of ancestors.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.parent();
        while let Some(p) = cur {
            depth += 1;
            cur = p.parent();
        }
        depth
    }
}

impl Drop for Element {
    // Unlink ancestors one at a time so a deep chain is freed without recursion.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut parent) => next = parent.parent.take(),
                // Still referenced by a token or the cursor.
                Err(_) => break,
            }
        }
    }
}

/// A start or end tag, frozen at the moment it was returned.
#[derive(Debug, Clone)]
pub struct Tag {
    element: Rc<Element>,
    is_start: bool,
    is_end: bool,
}

impl Tag {
    pub(crate) fn start(element: Rc<Element>) -> Self {
        Self {
            element,
            is_start: true,
            is_end: false,
        }
    }

    pub(crate) fn end(element: Rc<Element>) -> Self {
        Self {
            element,
            is_start: false,
            is_end: true,
        }
    }

    /// The element this tag opens or closes.
    #[inline]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The enclosing element at the time this element was opened.
    #[inline]
    pub fn parent(&self) -> Option<&Element> {
        self.element.parent()
    }

    /// Qualified name as written.
    #[inline]
    pub fn name(&self) -> &QualifiedName {
        self.element.name()
    }

    /// Interned space part.
    #[inline]
    pub fn space(&self) -> Atom {
        self.element.space()
    }

    /// Interned local part.
    #[inline]
    pub fn local(&self) -> Atom {
        self.element.local()
    }

    /// Whether this is a start tag.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this is an end tag.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Whether this tag has the given interned name.
    #[inline]
    pub fn is_tag(&self, space: Atom, local: Atom) -> bool {
        self.element.is_tag(space, local)
    }

    /// Whether the enclosing element has the given interned name.
    #[inline]
    pub fn is_parent_tag(&self, space: Atom, local: Atom) -> bool {
        self.element.is_parent_tag(space, local)
    }

    /// Whether `self` and `other` refer to the same element occurrence.
    #[inline]
    pub fn same_element(&self, other: &Tag) -> bool {
        Rc::ptr_eq(&self.element, &other.element)
    }
}

/// A run of character data.
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
    element: Option<Rc<Element>>,
}

impl Text {
    pub(crate) fn new(text: String, element: Option<Rc<Element>>) -> Self {
        Self { text, element }
    }

    /// The text as delivered by the event source.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token, returning the text.
    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }

    /// The element that was open when the text was read. `None` at the
    /// document root.
    #[inline]
    pub fn tag(&self) -> Option<&Element> {
        self.element.as_deref()
    }

    /// Whether the enclosing element has the given interned name.
    #[inline]
    pub fn is_tag(&self, space: Atom, local: Atom) -> bool {
        self.tag().is_some_and(|e| e.is_tag(space, local))
    }

    /// Whether the enclosing element's parent has the given interned name.
    #[inline]
    pub fn is_parent_tag(&self, space: Atom, local: Atom) -> bool {
        self.tag().is_some_and(|e| e.is_parent_tag(space, local))
    }

    /// Interpret the text as a boolean: `true` for a case-insensitive
    /// `"true"`, `false` otherwise.
    pub fn as_bool(&self) -> bool {
        self.text.eq_ignore_ascii_case("true")
    }
}

/// A token yielded by [`Parser::next_token`](crate::Parser::next_token).
#[derive(Debug, Clone)]
pub enum Token {
    /// A start or end tag.
    Tag(Tag),
    /// Character data.
    Text(Text),
}

impl Token {
    /// The tag, if this is one.
    #[inline]
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Token::Tag(tag) => Some(tag),
            Token::Text(_) => None,
        }
    }

    /// The text, if this is one.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Token::Text(text) => Some(text),
            Token::Tag(_) => None,
        }
    }

    /// Whether this is a start tag with the given interned name.
    #[inline]
    pub fn is_start_of(&self, space: Atom, local: Atom) -> bool {
        self.as_tag()
            .is_some_and(|t| t.is_start() && t.is_tag(space, local))
    }

    /// Whether this is an end tag with the given interned name.
    #[inline]
    pub fn is_end_of(&self, space: Atom, local: Atom) -> bool {
        self.as_tag()
            .is_some_and(|t| t.is_end() && t.is_tag(space, local))
    }
}

impl From<Tag> for Token {
    fn from(tag: Tag) -> Self {
        Token::Tag(tag)
    }
}

impl From<Text> for Token {
    fn from(text: Text) -> Self {
        Token::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::AtomTable;

    fn element(
        atoms: &mut AtomTable,
        parent: Option<Rc<Element>>,
        raw: &str,
    ) -> Rc<Element> {
        let name = QualifiedName::parse(raw);
        let space = atoms.intern(&name.space);
        let local = atoms.intern(&name.local);
        Element::new(parent, name, space, local)
    }

    #[test]
    fn test_qualified_name_parse() {
        assert_eq!(QualifiedName::parse("a"), QualifiedName::new("", "a"));
        assert_eq!(
            QualifiedName::parse("atom:entry"),
            QualifiedName::new("atom", "entry")
        );
    }

    #[test]
    fn test_qualified_name_display() {
        assert_eq!(QualifiedName::new("", "a").to_string(), "a");
        assert_eq!(QualifiedName::new("x", "a").to_string(), "x:a");
    }

    #[test]
    fn test_snapshot_flags_survive_close() {
        let mut atoms = AtomTable::new();
        let a = element(&mut atoms, None, "a");

        let start = Tag::start(Rc::clone(&a));
        a.close();
        let end = Tag::end(Rc::clone(&a));

        assert!(start.is_start());
        assert!(!start.is_end());
        assert!(end.is_end());
        assert!(!end.is_start());
        assert!(!start.element().is_open());
        assert!(start.same_element(&end));
    }

    #[test]
    fn test_parent_links() {
        let mut atoms = AtomTable::new();
        let a = element(&mut atoms, None, "a");
        let b = element(&mut atoms, Some(Rc::clone(&a)), "b");
        let a_local = a.local();

        let tag = Tag::start(b);
        assert!(tag.is_parent_tag(Atom::EMPTY, a_local));
        assert_eq!(tag.parent().map(|p| p.local()), Some(a_local));
        assert_eq!(tag.element().depth(), 1);
        assert_eq!(a.depth(), 0);
        assert!(!Tag::start(a).is_parent_tag(Atom::EMPTY, a_local));
    }

    #[test]
    fn test_deep_chain_drops_iteratively() {
        let mut atoms = AtomTable::new();
        let mut cursor = element(&mut atoms, None, "n");
        for _ in 0..200_000 {
            cursor = element(&mut atoms, Some(cursor), "n");
        }
        drop(cursor);
    }

    #[test]
    fn test_drop_keeps_shared_ancestors() {
        let mut atoms = AtomTable::new();
        let a = element(&mut atoms, None, "a");
        let b = element(&mut atoms, Some(Rc::clone(&a)), "b");
        let c = element(&mut atoms, Some(Rc::clone(&b)), "c");
        let b_start = Tag::start(b);

        drop(c);
        assert_eq!(b_start.parent().map(|p| p.local()), Some(a.local()));
        assert_eq!(b_start.element().depth(), 1);
    }

    #[test]
    fn test_text_helpers() {
        let mut atoms = AtomTable::new();
        let a = element(&mut atoms, None, "a");
        let b = element(&mut atoms, Some(Rc::clone(&a)), "b");
        let (a_local, b_local) = (a.local(), b.local());

        let text = Text::new("TRUE".to_string(), Some(b));
        assert!(text.is_tag(Atom::EMPTY, b_local));
        assert!(text.is_parent_tag(Atom::EMPTY, a_local));
        assert!(!text.is_tag(Atom::EMPTY, a_local));
        assert!(text.as_bool());

        let root = Text::new("yes".to_string(), None);
        assert!(root.tag().is_none());
        assert!(!root.is_tag(Atom::EMPTY, a_local));
        assert!(!root.is_parent_tag(Atom::EMPTY, a_local));
        assert!(!root.as_bool());
    }

    #[test]
    fn test_token_accessors() {
        let mut atoms = AtomTable::new();
        let a = element(&mut atoms, None, "a");
        let local = a.local();

        let start: Token = Tag::start(Rc::clone(&a)).into();
        let end: Token = Tag::end(a).into();
        let text: Token = Text::new("x".to_string(), None).into();

        assert!(start.is_start_of(Atom::EMPTY, local));
        assert!(!start.is_end_of(Atom::EMPTY, local));
        assert!(end.is_end_of(Atom::EMPTY, local));
        assert!(text.as_tag().is_none());
        assert_eq!(text.as_text().map(Text::text), Some("x"));
    }
}
