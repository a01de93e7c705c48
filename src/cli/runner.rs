//! CLI runner - decodes one response and writes the report

use crate::config::DecodeConfig;
use crate::decode::ResponseDecoder;
use crate::error::Result;
use crate::output::ReportWriter;
use std::io::{IsTerminal, Write};
use tracing::debug;

/// Prompt shown when waiting for a pasted response on a terminal
pub const STDIN_PROMPT: &str = "Paste JSON response (Ctrl+D when done):";

/// CLI runner
pub struct Runner {
    config: DecodeConfig,
    decoder: ResponseDecoder,
}

impl Runner {
    /// Create a new runner
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            config,
            decoder: ResponseDecoder::new(),
        }
    }

    /// Decode the configured input and write the report to stdout
    pub fn run(&self) -> Result<()> {
        if self.config.source.is_stdin() && std::io::stdin().is_terminal() {
            eprintln!("{STDIN_PROMPT}");
        }

        let stdout = std::io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Decode the configured input and write the report to `out`
    ///
    /// Nothing is written unless the whole decode succeeds.
    pub fn run_with(&self, out: &mut impl Write) -> Result<()> {
        debug!("Reading response from {}", self.config.source);
        let response = self.decoder.decode_source(&self.config.source)?;

        debug!("Rendering {:?} report", self.config.format);
        ReportWriter::new(self.config.format).write(&response, out)
    }

    /// Decode a document that is already in memory and write the report
    pub fn run_str(&self, body: &str, out: &mut impl Write) -> Result<()> {
        let response = self.decoder.decode_str(body)?;
        ReportWriter::new(self.config.format).write(&response, out)
    }
}

