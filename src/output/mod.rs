//! Output module
//!
//! Renders decoded enclave responses.
//!
//! # Overview
//!
//! This module provides:
//! - The fixed-layout text report
//! - A JSON rendering for scripting
//! - Formatting helpers for amounts, floats and signatures

mod format;
mod report;
mod writer;

pub use format::{
    abbreviate_signature, format_float, format_intent, group_thousands, SIGNATURE_EDGE_CHARS,
};
pub use report::{render_json, render_report, REPORT_FOOTER, REPORT_TITLE, RULE_WIDTH};
pub use writer::{ReportFormat, ReportWriter};

#[cfg(test)]
mod tests;
