//! Field formatting helpers for the text report

use serde_json::Value;

/// Characters kept at each end of an abbreviated signature
pub const SIGNATURE_EDGE_CHARS: usize = 32;

/// Group the digits of an integer in threes with commas
///
/// `1000000000` becomes `1,000,000,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Render a float with the shortest digits that round-trip
///
/// Always keeps a fractional part (`1.0`). Decimal exponents below -4 or at
/// 16 and above switch to scientific form with a signed two-digit exponent
/// (`1e-09`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return text.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-9"
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let (int_part, frac_part) = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            (format!("{digits:0<int_len$}"), "0".to_string())
        } else {
            (digits[..int_len].to_string(), digits[int_len..].to_string())
        }
    } else {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        ("0".to_string(), format!("{leading_zeros}{digits}"))
    };

    format!("{sign}{int_part}.{frac_part}")
}

/// First and last [`SIGNATURE_EDGE_CHARS`] characters joined by `...`
///
/// Signatures shorter than both edges together are not padded; the two ends
/// overlap, so `"AB"` becomes `"AB...AB"`.
pub fn abbreviate_signature(signature: &str) -> String {
    let chars: Vec<char> = signature.chars().collect();
    let head: String = chars.iter().take(SIGNATURE_EDGE_CHARS).collect();
    let tail: String = chars[chars.len().saturating_sub(SIGNATURE_EDGE_CHARS)..]
        .iter()
        .collect();
    format!("{head}...{tail}")
}

/// Intent as shown in the report: strings verbatim, anything else as JSON
///
/// Non-string values use JSON spelling (`{"scope":2}`, `true`, `null`), not
/// Python's `str()` spelling (`{'scope': 2}`, `True`, `None`). Integer
/// intents, the only kind the enclave emits, read the same either way.
pub fn format_intent(intent: &Value) -> String {
    match intent {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
