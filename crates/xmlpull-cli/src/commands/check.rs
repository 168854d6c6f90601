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

//! Check command - nesting validation and document statistics

use super::open_parser;
use crate::error::CliError;
use colored::Colorize;
use tracing::warn;
use xmlpull::{EventSource, Parser, ParserConfig, PullError, Token};

/// Counts gathered while consuming a token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of start tags.
    pub elements: usize,
    /// Number of text runs.
    pub text_runs: usize,
    /// Deepest nesting reached.
    pub max_depth: usize,
    /// Distinct non-empty names interned.
    pub atoms: usize,
    /// Elements still open at end of input.
    pub unclosed: usize,
    /// Qualified name of the innermost unclosed element.
    pub innermost: Option<String>,
}

impl CheckSummary {
    /// Consume `parser` to the end of its input.
    ///
    /// # Errors
    ///
    /// Returns the first error the parser reports.
    pub fn collect<S: EventSource>(parser: &mut Parser<S>) -> Result<Self, PullError<S::Error>> {
        let mut summary = Self::default();

        while let Some(token) = parser.next_token()? {
            match token {
                Token::Tag(tag) if tag.is_start() => {
                    summary.elements += 1;
                    summary.max_depth = summary.max_depth.max(parser.depth());
                }
                Token::Tag(_) => {}
                Token::Text(_) => summary.text_runs += 1,
            }
        }

        summary.atoms = parser.atoms().len();
        summary.unclosed = parser.depth();
        summary.innermost = parser.current().map(|e| e.name().to_string());
        Ok(summary)
    }
}

/// Check that an XML file tokenizes with properly matched tags.
///
/// Consumes the whole token stream and prints a summary. Unclosed elements at
/// end of input are a warning, or an error in strict mode.
///
/// # Arguments
///
/// * `file` - Path to the XML file
/// * `strict` - If `true`, fail when elements remain open at end of input
/// * `config` - Parser configuration
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be opened
/// - The file contains malformed markup or an unmatched end tag
/// - In strict mode, if any element is left open
///
/// # Examples
///
/// ```no_run
/// use xmlpull::ParserConfig;
/// use xmlpull_cli::commands::check;
///
/// # fn main() -> Result<(), xmlpull_cli::error::CliError> {
/// let summary = check("feed.xml", true, &ParserConfig::default())?;
/// println!("{} elements", summary.elements);
/// # Ok(())
/// # }
/// ```
pub fn check(file: &str, strict: bool, config: &ParserConfig) -> Result<CheckSummary, CliError> {
    let mut parser = open_parser(file, config)?;
    let summary = CheckSummary::collect(&mut parser).map_err(|e| CliError::parse(file, e))?;

    if summary.unclosed > 0 {
        let innermost = summary.innermost.clone().unwrap_or_default();
        if strict {
            return Err(CliError::Unclosed {
                path: file.into(),
                open: summary.unclosed,
                innermost,
            });
        }
        warn!(file, open = summary.unclosed, %innermost, "input ended with open elements");
    }

    println!("{} {}", "✓".green().bold(), file);
    println!("  Elements:   {}", summary.elements);
    println!("  Text runs:  {}", summary.text_runs);
    println!("  Max depth:  {}", summary.max_depth);
    println!("  Atoms:      {}", summary.atoms);
    if summary.unclosed > 0 {
        println!(
            "  {} {} element(s) left open",
            "⚠".yellow().bold(),
            summary.unclosed
        );
    }

    Ok(summary)
}
