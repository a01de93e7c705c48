//! Tests for output module

use super::*;
use crate::types::EnclaveResponse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn sample_response(signature: &str) -> EnclaveResponse {
    EnclaveResponse::new(
        "X1".into(),
        "X2".into(),
        1_000_000_000,
        "SUI".into(),
        1_700_000_000_000,
        json!("transfer"),
        signature.into(),
        None,
    )
}

// ============================================================================
// Formatting Tests
// ============================================================================

#[test_case(0, "0")]
#[test_case(7, "7")]
#[test_case(999, "999")]
#[test_case(1_000, "1,000")]
#[test_case(12_345, "12,345")]
#[test_case(1_000_000_000, "1,000,000,000")]
#[test_case(u64::MAX, "18,446,744,073,709,551,615")]
fn test_group_thousands(value: u64, expected: &str) {
    assert_eq!(group_thousands(value), expected);
}

#[test_case(1.0, "1.0")]
#[test_case(0.5, "0.5")]
#[test_case(2.5, "2.5")]
#[test_case(1234.567, "1234.567")]
#[test_case(0.0001, "0.0001")]
#[test_case(0.000_012_3, "1.23e-05")]
#[test_case(1e-9, "1e-09")]
#[test_case(1e15, "1000000000000000.0")]
#[test_case(1e16, "1e+16")]
#[test_case(0.0, "0.0")]
#[test_case(-1.5, "-1.5")]
fn test_format_float(value: f64, expected: &str) {
    assert_eq!(format_float(value), expected);
}

#[test]
fn test_format_float_special_values() {
    assert_eq!(format_float(f64::NAN), "nan");
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
}

#[test]
fn test_abbreviate_full_length_signature() {
    let signature: String = ('a'..='z').chain('A'..='Z').chain('0'..='9').collect();
    assert_eq!(signature.len(), 62);

    let long = format!("{signature}{signature}");
    let abbreviated = abbreviate_signature(&long);
    assert_eq!(
        abbreviated,
        format!("{}...{}", &long[..32], &long[long.len() - 32..])
    );
}

#[test_case("AB", "AB...AB" ; "two chars overlap")]
#[test_case("", "..." ; "empty")]
#[test_case("0123456789abcdef0123456789abcdef0123", "0123456789abcdef0123456789abcdef...456789abcdef0123456789abcdef0123" ; "partial overlap")]
fn test_abbreviate_short_signature(signature: &str, expected: &str) {
    assert_eq!(abbreviate_signature(signature), expected);
}

#[test]
fn test_abbreviate_counts_characters_not_bytes() {
    let signature = "é".repeat(40);
    let abbreviated = abbreviate_signature(&signature);
    assert_eq!(abbreviated, format!("{}...{}", "é".repeat(32), "é".repeat(32)));
}

#[test]
fn test_format_intent() {
    assert_eq!(format_intent(&json!("transfer")), "transfer");
    assert_eq!(format_intent(&json!(2)), "2");
    assert_eq!(format_intent(&json!({"scope": 2})), r#"{"scope":2}"#);
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_render_report_layout() {
    let signature = format!("{}{}", "A".repeat(32), "B".repeat(32));
    let report = render_report(&sample_response(&signature));

    let expected = format!(
        "\
============================================================
XWallet Transfer Payload (Decoded)
============================================================
From XID:       X1
To XID:         X2
Amount (MIST):  1,000,000,000
Amount (SUI):   1.0
Coin Type:      SUI
------------------------------------------------------------
Intent:         transfer
Timestamp (ms): 1700000000000
Signature:      {}...{}
============================================================

Ready to submit to Sui blockchain!

",
        "A".repeat(32),
        "B".repeat(32)
    );

    assert_eq!(report, expected);
}

#[test]
fn test_report_rule_widths() {
    let report = render_report(&sample_response("sig"));
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
    assert_eq!(lines[1], REPORT_TITLE);
    assert_eq!(lines[2], "=".repeat(RULE_WIDTH));
    assert_eq!(lines[8], "-".repeat(RULE_WIDTH));
    assert_eq!(lines[12], "=".repeat(RULE_WIDTH));
    assert_eq!(lines[13], "");
    assert_eq!(lines[14], REPORT_FOOTER);
    assert!(report.ends_with(&format!("{REPORT_FOOTER}\n\n")));
}

#[test]
fn test_render_json() {
    let signature = "f".repeat(128);
    let rendered = render_json(&sample_response(&signature)).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["from_xid"], "X1");
    assert_eq!(value["to_xid"], "X2");
    assert_eq!(value["amount_mist"], 1_000_000_000u64);
    assert_eq!(value["amount_sui"], 1.0);
    assert_eq!(value["coin_type"], "SUI");
    assert_eq!(value["intent"], "transfer");
    assert_eq!(value["intent_scope"], Value::Null);
    assert_eq!(value["timestamp_ms"], 1_700_000_000_000u64);
    assert!(value["timestamp_utc"]
        .as_str()
        .unwrap()
        .starts_with("2023-11-14T22:13:20"));
    assert_eq!(value["signature"], signature);
    assert_eq!(value["tweet_id"], Value::Null);
}

#[test]
fn test_render_json_names_numeric_intent() {
    let response = EnclaveResponse::new(
        "X1".into(),
        "X2".into(),
        5,
        "0x2::sui::SUI".into(),
        0,
        json!(2),
        "sig".into(),
        Some("1789".into()),
    );
    let value: Value = serde_json::from_str(&render_json(&response).unwrap()).unwrap();

    assert_eq!(value["intent"], 2);
    assert_eq!(value["intent_scope"], "TransferCoin");
    assert_eq!(value["tweet_id"], "1789");
}

#[test]
fn test_render_json_negative_timestamp() {
    let response = EnclaveResponse::new(
        "X1".into(),
        "X2".into(),
        1,
        "SUI".into(),
        -1,
        json!(2),
        "sig".into(),
        None,
    );
    let value: Value = serde_json::from_str(&render_json(&response).unwrap()).unwrap();

    assert_eq!(value["timestamp_ms"], -1);
    assert!(value["timestamp_utc"]
        .as_str()
        .unwrap()
        .starts_with("1969-12-31T23:59:59.999"));
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_report_writer_default_is_pretty() {
    assert_eq!(ReportWriter::default().format(), ReportFormat::Pretty);
}

#[test]
fn test_report_writer_writes_selected_format() {
    let response = sample_response("sig");

    let mut pretty = Vec::new();
    ReportWriter::new(ReportFormat::Pretty)
        .write(&response, &mut pretty)
        .unwrap();
    assert_eq!(String::from_utf8(pretty).unwrap(), render_report(&response));

    let mut json_out = Vec::new();
    ReportWriter::new(ReportFormat::Json)
        .write(&response, &mut json_out)
        .unwrap();
    let value: Value = serde_json::from_slice(&json_out).unwrap();
    assert_eq!(value["coin_type"], "SUI");
}
