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

//! xmlpull CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **tokens**: Print the token stream of an XML file
//! - **check**: Validate tag nesting and report statistics
//!
//! # Examples
//!
//! ```no_run
//! use xmlpull::ParserConfig;
//! use xmlpull_cli::commands::{check, tokens};
//!
//! # fn main() -> Result<(), xmlpull_cli::error::CliError> {
//! let config = ParserConfig::default();
//! tokens("feed.xml", false, &config)?;
//! check("feed.xml", true, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
