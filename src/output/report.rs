//! Report rendering
//!
//! Two renderings of a decoded [`EnclaveResponse`]: the fixed-layout text
//! report and a JSON object for scripting.

use super::format::{abbreviate_signature, format_float, format_intent, group_thousands};
use crate::error::{Error, Result};
use crate::types::{EnclaveResponse, IntentScope};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Width of the separator lines
pub const RULE_WIDTH: usize = 60;

/// Title line of the text report
pub const REPORT_TITLE: &str = "XWallet Transfer Payload (Decoded)";

/// Closing line of the text report
pub const REPORT_FOOTER: &str = "Ready to submit to Sui blockchain!";

/// Render the fixed-layout text report
pub fn render_report(response: &EnclaveResponse) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    format!(
        "\
{heavy}
{REPORT_TITLE}
{heavy}
From XID:       {from_xid}
To XID:         {to_xid}
Amount (MIST):  {amount_mist}
Amount (SUI):   {amount_sui}
Coin Type:      {coin_type}
{light}
Intent:         {intent}
Timestamp (ms): {timestamp_ms}
Signature:      {signature}
{heavy}

{REPORT_FOOTER}

",
        from_xid = response.from_xid(),
        to_xid = response.to_xid(),
        amount_mist = group_thousands(response.amount_mist()),
        amount_sui = format_float(response.amount_sui()),
        coin_type = response.coin_type(),
        intent = format_intent(response.intent()),
        timestamp_ms = response.timestamp_ms(),
        signature = abbreviate_signature(response.signature()),
    )
}

/// JSON shape of a decoded response
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    from_xid: &'a str,
    to_xid: &'a str,
    amount_mist: u64,
    amount_sui: f64,
    coin_type: &'a str,
    intent: &'a Value,
    intent_scope: Option<IntentScope>,
    timestamp_ms: i64,
    timestamp_utc: Option<DateTime<Utc>>,
    signature: &'a str,
    tweet_id: Option<&'a str>,
}

impl<'a> From<&'a EnclaveResponse> for JsonReport<'a> {
    fn from(response: &'a EnclaveResponse) -> Self {
        Self {
            from_xid: response.from_xid(),
            to_xid: response.to_xid(),
            amount_mist: response.amount_mist(),
            amount_sui: response.amount_sui(),
            coin_type: response.coin_type(),
            intent: response.intent(),
            intent_scope: response.intent_scope(),
            timestamp_ms: response.timestamp_ms(),
            timestamp_utc: timestamp_to_utc(response.timestamp_ms()),
            signature: response.signature(),
            tweet_id: response.tweet_id(),
        }
    }
}

/// Render the response as a pretty-printed JSON object
pub fn render_json(response: &EnclaveResponse) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&JsonReport::from(response))
        .map_err(|e| Error::Output(e.into()))?;
    out.push('\n');
    Ok(out)
}

/// Millisecond timestamp as a UTC date, when it is in chrono's range
fn timestamp_to_utc(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
}
