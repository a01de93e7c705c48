//! Run configuration
//!
//! A [`DecodeConfig`] is everything one invocation needs: where to read the
//! response from, how to render it, and how chatty the logs should be. It is
//! resolved from the parsed command line, or built directly when the crate is
//! used as a library.

use crate::cli::Cli;
use crate::decode::InputSource;
use crate::output::ReportFormat;
use std::path::PathBuf;

/// Resolved configuration for one decode run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Where the response document comes from
    pub source: InputSource,
    /// Report format written to stdout
    pub format: ReportFormat,
    /// Emit debug logs
    pub verbose: bool,
}

impl DecodeConfig {
    /// Create a config with default settings (stdin, pretty report)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configuration from command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: InputSource::from_arg(cli.input.as_deref()),
            format: cli.format,
            verbose: cli.verbose,
        }
    }

    /// Read from the given file
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = InputSource::File(path.into());
        self
    }

    /// Set the input source
    #[must_use]
    pub fn with_source(mut self, source: InputSource) -> Self {
        self.source = source;
        self
    }

    /// Set the report format
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable debug logging
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log level used when `RUST_LOG` is not set
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
