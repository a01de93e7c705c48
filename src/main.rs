//! xwallet-decode CLI
//!
//! Decodes a signed XWallet enclave response and prints a summary

use anyhow::Context;
use clap::Parser;
use xwallet_decode::cli::{Cli, Runner};
use xwallet_decode::DecodeConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DecodeConfig::from_cli(&cli);

    // Logs go to stderr so stdout carries only the report; RUST_LOG wins over -v
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::default().add_directive(config.log_level().into())
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let source = config.source.clone();
    Runner::new(config)
        .run()
        .with_context(|| format!("failed to decode enclave response from {source}"))
}
