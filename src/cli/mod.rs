//! CLI module
//!
//! Command-line interface for decoding enclave responses.
//!
//! # Usage
//!
//! - `xwallet-decode response.json` - decode a response file
//! - `xwallet-decode < response.json` - decode from standard input
//! - `xwallet-decode --format json response.json` - machine-readable output

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{Runner, STDIN_PROMPT};
