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

//! CLI command implementations

mod check;
mod tokens;

pub use check::{check, CheckSummary};
pub use tokens::tokens;

use crate::error::CliError;
use std::fs::File;
use std::io::BufReader;
use tracing::debug;
use xmlpull::{Parser, ParserConfig, XmlSource};

/// A parser streaming from a file on disk.
pub type FileParser = Parser<XmlSource<BufReader<File>>>;

/// Open `path` and wrap it in a streaming parser.
///
/// The file is read incrementally through a buffer of
/// `config.buffer_size` bytes; it is never loaded whole.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be opened.
pub fn open_parser(path: &str, config: &ParserConfig) -> Result<FileParser, CliError> {
    let file = File::open(path).map_err(|e| CliError::io_error(path, e))?;
    debug!(path, buffer_size = config.buffer_size, trim_text = config.trim_text, "opened input");
    Ok(Parser::from_reader_with_config(file, config))
}
