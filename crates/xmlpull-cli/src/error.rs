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

//! Structured error types for the xmlpull CLI.
//!
//! All commands return `Result<T, CliError>` for consistent error reporting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for xmlpull CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use xmlpull_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file open or read).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The document could not be tokenized.
    ///
    /// Wraps both event source failures and unmatched end tags.
    #[error("Parse error in '{path}': {message}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// The parser's error message
        message: String,
    },

    /// End of input was reached with elements still open.
    ///
    /// Only reported by `check --strict`.
    #[error("'{path}' ended with {open} unclosed element(s), innermost <{innermost}>")]
    Unclosed {
        /// The file being checked
        path: PathBuf,
        /// Number of elements still open
        open: usize,
        /// Qualified name of the innermost open element
        innermost: String,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a parse error with file path context.
    pub fn parse(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "missing.xml",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let display = err.to_string();
        assert!(display.contains("missing.xml"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = CliError::parse("doc.xml", "Unmatched tag b");
        assert_eq!(err.to_string(), "Parse error in 'doc.xml': Unmatched tag b");
    }

    #[test]
    fn test_unclosed_display() {
        let err = CliError::Unclosed {
            path: PathBuf::from("doc.xml"),
            open: 2,
            innermost: "b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'doc.xml' ended with 2 unclosed element(s), innermost <b>"
        );
    }
}
