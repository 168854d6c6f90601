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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use xmlpull::ParserConfig;

/// Parser options shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct ParserArgs {
    /// Read buffer size in bytes
    #[arg(long, global = true, value_name = "BYTES", default_value_t = 64 * 1024)]
    pub buffer_size: usize,

    /// Trim whitespace around text and drop whitespace-only text
    #[arg(long, global = true)]
    pub trim: bool,
}

impl ParserArgs {
    /// Build the parser configuration these arguments describe.
    pub fn config(&self) -> ParserConfig {
        ParserConfig {
            buffer_size: self.buffer_size,
            trim_text: self.trim,
        }
    }
}

/// xmlpull commands.
///
/// - **Tokens**: Print the token stream
/// - **Check**: Validate nesting and print statistics
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream of an XML file
    ///
    /// One line per start tag, end tag and text run, indented by depth.
    Tokens {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show interned space and local atoms on tag lines
        #[arg(short, long)]
        atoms: bool,
    },

    /// Check that an XML file's tags are properly matched
    ///
    /// Consumes the whole document and prints element, text and atom counts.
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Also fail if elements are still open at end of input
        #[arg(short, long)]
        strict: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self, args: &ParserArgs) -> Result<(), CliError> {
        let config = args.config();
        match self {
            Commands::Tokens { file, atoms } => commands::tokens(&file, atoms, &config),
            Commands::Check { file, strict } => commands::check(&file, strict, &config).map(|_| ()),
        }
    }
}
