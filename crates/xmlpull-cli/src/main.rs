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

//! xmlpull Command Line Interface
//!
//! # Usage
//!
//! ```bash
//! # Dump the token stream with atom ids
//! xmlpull tokens feed.xml --atoms
//!
//! # Validate nesting, failing on unclosed elements
//! xmlpull check feed.xml --strict
//!
//! # Run with debug logging
//! RUST_LOG=xmlpull=trace xmlpull tokens feed.xml
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xmlpull_cli::cli::{Commands, ParserArgs};

/// xmlpull - streaming XML tokenizer with atom-interned names
#[derive(Parser)]
#[command(name = "xmlpull")]
#[command(author, version, about = "xmlpull - streaming XML tokenizer with atom-interned names", long_about = None)]
struct Cli {
    #[command(flatten)]
    parser: ParserArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xmlpull=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute(&cli.parser) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
