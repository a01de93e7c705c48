//! Common types used throughout xwallet-decode
//!
//! This module holds the decoded [`EnclaveResponse`] together with the
//! amount and intent helpers that give its fields meaning.

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Amounts
// ============================================================================

/// Number of MIST in one SUI
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert an amount in MIST to SUI
///
/// Plain floating-point division; no rounding is applied.
pub fn mist_to_sui(amount_mist: u64) -> f64 {
    amount_mist as f64 / MIST_PER_SUI as f64
}

// ============================================================================
// Intent Scope
// ============================================================================

/// Scope byte the enclave signs intent messages under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntentScope {
    ProcessData,
    LinkWallet,
    TransferCoin,
    TransferNft,
    UpdateHandle,
}

impl IntentScope {
    /// Look up a scope by its numeric value
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ProcessData),
            1 => Some(Self::LinkWallet),
            2 => Some(Self::TransferCoin),
            3 => Some(Self::TransferNft),
            4 => Some(Self::UpdateHandle),
            _ => None,
        }
    }

    /// Interpret an opaque intent value as a scope, if it is one
    pub fn from_intent(intent: &Value) -> Option<Self> {
        intent
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Self::from_byte)
    }

    /// Scope name as the enclave spells it
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProcessData => "ProcessData",
            Self::LinkWallet => "LinkWallet",
            Self::TransferCoin => "TransferCoin",
            Self::TransferNft => "TransferNft",
            Self::UpdateHandle => "UpdateHandle",
        }
    }
}

impl std::fmt::Display for IntentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Enclave Response
// ============================================================================

/// A decoded, signed transfer response from the enclave
///
/// Built once per decode and never mutated afterwards; fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclaveResponse {
    from_xid: String,
    to_xid: String,
    amount_mist: u64,
    coin_type: String,
    timestamp_ms: i64,
    intent: Value,
    signature: String,
    tweet_id: Option<String>,
}

impl EnclaveResponse {
    /// Assemble a response from already-decoded fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        from_xid: String,
        to_xid: String,
        amount_mist: u64,
        coin_type: String,
        timestamp_ms: i64,
        intent: Value,
        signature: String,
        tweet_id: Option<String>,
    ) -> Self {
        Self {
            from_xid,
            to_xid,
            amount_mist,
            coin_type,
            timestamp_ms,
            intent,
            signature,
            tweet_id,
        }
    }

    pub fn from_xid(&self) -> &str {
        &self.from_xid
    }

    pub fn to_xid(&self) -> &str {
        &self.to_xid
    }

    pub fn amount_mist(&self) -> u64 {
        self.amount_mist
    }

    /// Amount converted to whole SUI
    pub fn amount_sui(&self) -> f64 {
        mist_to_sui(self.amount_mist)
    }

    pub fn coin_type(&self) -> &str {
        &self.coin_type
    }

    /// Milliseconds since the epoch, as given; may be negative
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// The intent exactly as it appeared in the input
    pub fn intent(&self) -> &Value {
        &self.intent
    }

    /// Named scope for numeric intents
    pub fn intent_scope(&self) -> Option<IntentScope> {
        IntentScope::from_intent(&self.intent)
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn tweet_id(&self) -> Option<&str> {
        self.tweet_id.as_deref()
    }
}
