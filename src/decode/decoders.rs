//! Enclave response decoder
//!
//! Reads the document, parses it, and extracts the transfer fields along a
//! fixed key path.

use super::types::InputSource;
use crate::error::{Error, Result};
use crate::types::EnclaveResponse;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Read;
use tracing::debug;

// ============================================================================
// Response Decoder
// ============================================================================

/// Decoder for signed XWallet enclave responses
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Read, parse and extract a response from the given source
    pub fn decode_source(&self, source: &InputSource) -> Result<EnclaveResponse> {
        let body = self.read_input(source)?;
        self.decode_str(&body)
    }

    /// Read the full document from the given source
    ///
    /// The file handle is dropped before this returns, on success or failure.
    pub fn read_input(&self, source: &InputSource) -> Result<String> {
        let body = match source {
            InputSource::Stdin => {
                let stdin = std::io::stdin();
                read_all(stdin.lock()).map_err(Error::stdin)?
            }
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| Error::io(path, e))?;
                read_all(file).map_err(|e| Error::io(path, e))?
            }
        };

        debug!("Read {} bytes from {}", body.len(), source);
        Ok(body)
    }

    /// Read the full document from an arbitrary reader
    pub fn read_from(&self, reader: impl Read) -> Result<String> {
        read_all(reader).map_err(Error::stdin)
    }

    /// Parse a JSON document and extract the response
    pub fn decode_str(&self, body: &str) -> Result<EnclaveResponse> {
        let value: Value = serde_json::from_str(body)?;
        self.decode_value(&value)
    }

    /// Extract the response from an already-parsed document
    pub fn decode_value(&self, value: &Value) -> Result<EnclaveResponse> {
        let root = Node::root(value);
        let response = root.child("response")?;
        let data = response.child("data")?;

        let from_xid = data.child("from_xid")?.byte_string()?;
        let to_xid = data.child("to_xid")?.byte_string()?;
        let amount_mist = data.child("amount")?.unsigned()?;
        let coin_type = data.child("coin_type")?.byte_string()?;

        let timestamp_ms = response.child("timestamp_ms")?.integer()?;
        let intent = response.child("intent")?.value.clone();
        let signature = root.child("signature")?.string()?.to_string();

        let tweet_id = match data.optional_child("tweet_id")? {
            Some(node) => Some(node.byte_string()?),
            None => None,
        };

        debug!(
            from_xid = %from_xid,
            to_xid = %to_xid,
            amount_mist,
            coin_type = %coin_type,
            "Extracted enclave response"
        );

        Ok(EnclaveResponse::new(
            from_xid,
            to_xid,
            amount_mist,
            coin_type,
            timestamp_ms,
            intent,
            signature,
            tweet_id,
        ))
    }
}

// ============================================================================
// Byte Strings
// ============================================================================

/// Decode a JSON array of byte values as a UTF-8 string
///
/// `path` is only used to label errors.
pub fn decode_byte_string(value: &Value, path: &str) -> Result<String> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::wrong_type(path, "array of byte values"))?;

    let bytes = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| Error::ByteOutOfRange {
                    path: path.to_string(),
                    index,
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    String::from_utf8(bytes).map_err(|source| Error::InvalidUtf8 {
        path: path.to_string(),
        source,
    })
}

// ============================================================================
// Helper Types
// ============================================================================

/// A value in the document together with the dotted path that reached it
struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn object(&self) -> Result<&'a Map<String, Value>> {
        self.value.as_object().ok_or_else(|| {
            let path = if self.path.is_empty() {
                "(document)"
            } else {
                self.path.as_str()
            };
            Error::wrong_type(path, "object")
        })
    }

    /// Look up a required key
    fn child(&self, key: &str) -> Result<Node<'a>> {
        let path = self.child_path(key);
        match self.object()?.get(key) {
            Some(value) => Ok(Node { value, path }),
            None => Err(Error::missing_field(path)),
        }
    }

    /// Look up a key that may be absent or null
    fn optional_child(&self, key: &str) -> Result<Option<Node<'a>>> {
        let path = self.child_path(key);
        Ok(self
            .object()?
            .get(key)
            .filter(|v| !v.is_null())
            .map(|value| Node { value, path }))
    }

    fn unsigned(&self) -> Result<u64> {
        self.value
            .as_u64()
            .ok_or_else(|| Error::wrong_type(&self.path, "unsigned integer"))
    }

    fn integer(&self) -> Result<i64> {
        self.value
            .as_i64()
            .ok_or_else(|| Error::wrong_type(&self.path, "integer"))
    }

    fn string(&self) -> Result<&'a str> {
        self.value
            .as_str()
            .ok_or_else(|| Error::wrong_type(&self.path, "string"))
    }

    fn byte_string(&self) -> Result<String> {
        decode_byte_string(self.value, &self.path)
    }
}

fn read_all(mut reader: impl Read) -> std::io::Result<String> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    Ok(body)
}
