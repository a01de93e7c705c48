//! Report writer
//!
//! Renders a response in the selected format and writes it out in one piece.

use super::report::{render_json, render_report};
use crate::error::{Error, Result};
use crate::types::EnclaveResponse;
use std::io::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable fixed-layout report
    #[default]
    Pretty,
    /// Pretty-printed JSON object
    Json,
}

/// Writes decoded responses in a fixed format
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    /// Create a writer for the given format
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Get the report format
    #[must_use]
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Render the response to a string
    pub fn render(&self, response: &EnclaveResponse) -> Result<String> {
        match self.format {
            ReportFormat::Pretty => Ok(render_report(response)),
            ReportFormat::Json => render_json(response),
        }
    }

    /// Render the response and write it to `out`
    ///
    /// The report is rendered in full before anything is written.
    pub fn write(&self, response: &EnclaveResponse, out: &mut impl Write) -> Result<()> {
        let rendered = self.render(response)?;
        out.write_all(rendered.as_bytes()).map_err(Error::Output)?;
        out.flush().map_err(Error::Output)
    }
}
