//! CLI arguments

use crate::output::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Decode a signed XWallet enclave response and print a readable summary
#[derive(Parser, Debug)]
#[command(name = "xwallet-decode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Response file (JSON). Reads standard input when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    pub format: ReportFormat,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
