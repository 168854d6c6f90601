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

//! Tokens command - token stream dump

use super::open_parser;
use crate::error::CliError;
use colored::Colorize;
use xmlpull::{ParserConfig, Tag, Token};

/// Print the token stream of an XML file, one token per line.
///
/// Lines are indented by nesting depth. Tokens printed before a parse error
/// stay on stdout; the error is returned.
///
/// # Arguments
///
/// * `file` - Path to the XML file
/// * `show_atoms` - If `true`, tag lines also show their space and local atoms
/// * `config` - Parser configuration
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be opened
/// - The file contains malformed markup or an unmatched end tag
///
/// # Examples
///
/// ```no_run
/// use xmlpull::ParserConfig;
/// use xmlpull_cli::commands::tokens;
///
/// # fn main() -> Result<(), xmlpull_cli::error::CliError> {
/// tokens("feed.xml", true, &ParserConfig::default())?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// ```text
/// start a
///   start b
///     text "x"
///   end b
/// end a
/// ```
pub fn tokens(file: &str, show_atoms: bool, config: &ParserConfig) -> Result<(), CliError> {
    let mut parser = open_parser(file, config)?;

    while let Some(token) = parser.next_token().map_err(|e| CliError::parse(file, e))? {
        // Depth already reflects the token: a start has been pushed, an end popped.
        let depth = parser.depth();
        match token {
            Token::Tag(tag) if tag.is_start() => {
                let prefix = "  ".repeat(depth.saturating_sub(1));
                println!("{}{} {}{}", prefix, "start".green(), tag.name(), atoms(&tag, show_atoms));
            }
            Token::Tag(tag) => {
                let prefix = "  ".repeat(depth);
                println!("{}{} {}{}", prefix, "end".yellow(), tag.name(), atoms(&tag, show_atoms));
            }
            Token::Text(text) => {
                let prefix = "  ".repeat(depth);
                println!("{}{} {:?}", prefix, "text".cyan(), text.text());
            }
        }
    }

    Ok(())
}

fn atoms(tag: &Tag, show: bool) -> String {
    if show {
        format!(" [space={} local={}]", tag.space(), tag.local())
    } else {
        String::new()
    }
}
