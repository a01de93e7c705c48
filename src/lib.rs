//! # xwallet-decode
//!
//! Decode signed XWallet enclave responses into a readable summary.
//!
//! The enclave returns transfer payloads with every string field encoded as a
//! list of byte values and the amount in MIST. This crate reads such a
//! response, decodes the byte strings, converts the amount to SUI, and renders
//! a fixed-layout report (or a JSON object). It does not verify signatures or
//! talk to the chain.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xwallet_decode::{output::render_report, InputSource, ResponseDecoder, Result};
//!
//! fn main() -> Result<()> {
//!     let source = InputSource::file("response.json");
//!     let response = ResponseDecoder::new().decode_source(&source)?;
//!     print!("{}", render_report(&response));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! InputSource ──read──▶ JSON ──extract──▶ EnclaveResponse ──render──▶ stdout
//!  (file/stdin)          (serde_json)      (byte strings,      (pretty | json)
//!                                           MIST → SUI)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Decoded response and amount helpers
pub mod types;

/// Response decoding
pub mod decode;

/// Report rendering
pub mod output;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::DecodeConfig;
pub use decode::{InputSource, ResponseDecoder};
pub use error::{Error, ErrorKind, Result};
pub use output::{ReportFormat, ReportWriter};
pub use types::{mist_to_sui, EnclaveResponse, IntentScope, MIST_PER_SUI};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
