//! Response decoder module
//!
//! Turns a raw enclave response document into an [`EnclaveResponse`].
//!
//! # Overview
//!
//! Decoding runs parse → extract: the input is read from an [`InputSource`],
//! parsed as JSON, then walked along a fixed key path. Every expected key is
//! checked explicitly so a missing or malformed field is reported by its full
//! dotted path (`response.data.coin_type`).
//!
//! [`EnclaveResponse`]: crate::types::EnclaveResponse

mod decoders;
mod types;

pub use decoders::{decode_byte_string, ResponseDecoder};
pub use types::InputSource;
