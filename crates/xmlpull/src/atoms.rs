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

//! Atom interning.
//!
//! Element names are reduced to small integers so that consumers can compare
//! tag identity with a single integer comparison. Ids are handed out in
//! first-seen order starting at 1; the empty string is always [`Atom::EMPTY`]
//! and is never stored.
//!
//! There is deliberately no id-to-string lookup. Callers intern the names
//! they care about up front and compare the resulting atoms against the ones
//! found in tokens:
//!
//! ```rust
//! use xmlpull::Parser;
//!
//! let mut parser = Parser::from_bytes(b"<feed><entry/></feed>");
//! let entry = parser.intern("entry");
//!
//! let mut entries = 0;
//! while let Some(token) = parser.next_token()? {
//!     if token.is_start_of(xmlpull::Atom::EMPTY, entry) {
//!         entries += 1;
//!     }
//! }
//! assert_eq!(entries, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::fmt;

/// An interned string id.
///
/// Only meaningful relative to the [`AtomTable`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Atom(u32);

impl Atom {
    /// The atom of the empty string.
    pub const EMPTY: Atom = Atom(0);

    /// Raw integer value of this atom.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Whether this is the atom of the empty string.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only string-to-atom table.
///
/// A given string maps to the same atom for the lifetime of the table. The
/// table has a single owner (normally a [`Parser`](crate::Parser)) and does no
/// locking.
#[derive(Debug, Clone)]
pub struct AtomTable {
    atoms: HashMap<Box<str>, Atom>,
    next_id: u32,
}

impl AtomTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            atoms: HashMap::new(),
            next_id: 1,
        }
    }

    /// Intern `s`, returning its atom.
    ///
    /// The empty string yields [`Atom::EMPTY`] without touching the table.
    /// A string seen before yields the atom it was first given; a new string
    /// gets the next unused id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xmlpull::{Atom, AtomTable};
    ///
    /// let mut atoms = AtomTable::new();
    /// let a = atoms.intern("a");
    /// let b = atoms.intern("b");
    ///
    /// assert_eq!(a.id(), 1);
    /// assert_eq!(b.id(), 2);
    /// assert_eq!(atoms.intern("a"), a);
    /// assert_eq!(atoms.intern(""), Atom::EMPTY);
    /// ```
    pub fn intern(&mut self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::EMPTY;
        }

        if let Some(&atom) = self.atoms.get(s) {
            return atom;
        }

        let atom = Atom(self.next_id);
        self.next_id += 1;
        self.atoms.insert(s.into(), atom);
        atom
    }

    /// Look up the atom of `s` without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Atom> {
        if s.is_empty() {
            return Some(Atom::EMPTY);
        }
        self.atoms.get(s).copied()
    }

    /// Number of stored (non-empty) strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether no non-empty string has been interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_zero() {
        let mut atoms = AtomTable::new();
        assert_eq!(atoms.intern(""), Atom::EMPTY);
        assert_eq!(atoms.intern(""), Atom::EMPTY);
        assert!(atoms.is_empty());
        assert_eq!(atoms.len(), 0);
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut atoms = AtomTable::new();
        assert_eq!(atoms.intern("root").id(), 1);
    }

    #[test]
    fn test_first_seen_order() {
        let mut atoms = AtomTable::new();
        let x = atoms.intern("x");
        let y = atoms.intern("y");
        let z = atoms.intern("z");
        assert!(x < y);
        assert!(y < z);
        assert_eq!(atoms.len(), 3);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut atoms = AtomTable::new();
        let first = atoms.intern("item");
        atoms.intern("other");
        let second = atoms.intern("item");
        assert_eq!(first, second);
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn test_empty_does_not_consume_an_id() {
        let mut atoms = AtomTable::new();
        atoms.intern("");
        assert_eq!(atoms.intern("a").id(), 1);
    }

    #[test]
    fn test_get_does_not_intern() {
        let mut atoms = AtomTable::new();
        assert_eq!(atoms.get("missing"), None);
        assert!(atoms.is_empty());

        let a = atoms.intern("a");
        assert_eq!(atoms.get("a"), Some(a));
        assert_eq!(atoms.get(""), Some(Atom::EMPTY));
    }

    #[test]
    fn test_case_sensitive() {
        let mut atoms = AtomTable::new();
        assert_ne!(atoms.intern("Item"), atoms.intern("item"));
    }

    #[test]
    fn test_atom_display() {
        let mut atoms = AtomTable::new();
        let a = atoms.intern("a");
        assert_eq!(a.to_string(), "1");
        assert_eq!(Atom::EMPTY.to_string(), "0");
        assert!(Atom::EMPTY.is_empty());
        assert!(!a.is_empty());
    }
}
