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

//! Error types for the pull parser.
//!
//! Both kinds of failure are fatal to the stream: nothing is retried and the
//! parser does not try to resynchronize.
//!
//! # Error Categories
//!
//! - **Source errors**: the underlying event source rejected the input
//!   (malformed markup, undecodable text, I/O). Returned unchanged.
//! - **Unmatched tags**: an end element does not close the element that is
//!   currently open, or no element is open at all.
//!
//! End of input is not an error; [`Parser::next_token`](crate::Parser::next_token)
//! returns `Ok(None)` for it.
//!
//! ```rust
//! use xmlpull::{Parser, PullError};
//!
//! let mut parser = Parser::from_bytes(b"<a></b>");
//! parser.next_token().unwrap();
//!
//! match parser.next_token() {
//!     Err(PullError::UnmatchedTag { name }) => assert_eq!(name, "b"),
//!     other => panic!("expected unmatched tag, got {:?}", other),
//! }
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Failure reported by the default `quick-xml` event source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The XML reader rejected the input.
    #[error("XML parse error at position {pos}: {source}")]
    Xml {
        /// Byte offset reported by the reader.
        pos: usize,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },

    /// A name or text run was not valid UTF-8.
    #[error("Invalid UTF-8 at position {pos}: {source}")]
    Utf8 {
        /// Byte offset reported by the reader.
        pos: usize,
        /// Underlying decode error.
        #[source]
        source: std::str::Utf8Error,
    },
}

impl SourceError {
    /// Byte offset in the input where the failure was detected.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Self::Xml { pos, .. } | Self::Utf8 { pos, .. } => *pos,
        }
    }
}

/// Errors returned by [`Parser`](crate::Parser).
///
/// `E` is the error type of the event source the parser pulls from; for the
/// default source it is [`SourceError`].
#[derive(Error, Debug)]
pub enum PullError<E: StdError + 'static = SourceError> {
    /// The event source failed.
    #[error(transparent)]
    Source(E),

    /// An end element did not match the innermost open element.
    #[error("Unmatched tag {name}")]
    UnmatchedTag {
        /// Qualified name of the offending end element, as written.
        name: String,
    },
}

impl<E: StdError + 'static> PullError<E> {
    /// Create an unmatched tag error.
    #[inline]
    pub fn unmatched_tag(name: impl Into<String>) -> Self {
        Self::UnmatchedTag { name: name.into() }
    }

    /// Whether this error came from the event source.
    #[inline]
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }

    /// Whether this error is a nesting mismatch.
    #[inline]
    pub fn is_unmatched_tag(&self) -> bool {
        matches!(self, Self::UnmatchedTag { .. })
    }
}

/// Result type for pull operations over the default source.
pub type PullResult<T> = Result<T, PullError<SourceError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "broken pipe")
        }
    }

    impl StdError for Broken {}

    #[test]
    fn test_unmatched_tag_display() {
        let err: PullError = PullError::unmatched_tag("atom:entry");
        assert_eq!(err.to_string(), "Unmatched tag atom:entry");
        assert!(err.is_unmatched_tag());
        assert!(!err.is_source());
    }

    #[test]
    fn test_source_is_transparent() {
        let err: PullError<Broken> = PullError::Source(Broken);
        assert_eq!(err.to_string(), "broken pipe");
        assert!(err.is_source());
    }

    #[test]
    fn test_utf8_error_display() {
        let bytes = [0x66, 0x6f, 0xff];
        let source = std::str::from_utf8(&bytes).unwrap_err();
        let err = SourceError::Utf8 { pos: 7, source };
        let display = err.to_string();
        assert!(display.contains("Invalid UTF-8"));
        assert!(display.contains('7'));
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn test_error_trait() {
        let err: PullError = PullError::unmatched_tag("x");
        let _: &dyn StdError = &err;
    }
}
