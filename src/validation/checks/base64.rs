//! Embedded file payloads: `data:<type>/<subtype>;base64,<data>` strings.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use crate::models::{RuleNode, ViolationKind};
use crate::validation::ErrorCollector;

static DATA_URI_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^data:[a-z0-9.+-]+/[a-z0-9.+-]+;base64,").expect("Invalid regex")
});

static BASE64_ALPHABET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9/\r\n+]*={0,2}$").expect("Invalid regex"));

static MIME_SUBTYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^data:[^/;,]*/([^;,]*)").expect("Invalid regex"));

/// Reported when the payload declares no MIME type at all
const UNKNOWN_SUBTYPE: &str = "unknown";

/// Remove a leading `data:<mime>;base64,` prefix, if any
pub fn strip_data_uri(payload: &str) -> &str {
    match DATA_URI_PREFIX.find(payload) {
        Some(prefix) => &payload[prefix.end()..],
        None => payload,
    }
}

/// Alphabet check, strict decode, then re-encode must reproduce the input
pub fn is_canonical_base64(encoded: &str) -> bool {
    if !BASE64_ALPHABET.is_match(encoded) {
        return false;
    }

    match STANDARD.decode(encoded) {
        Ok(bytes) => STANDARD.encode(bytes) == encoded,
        Err(_) => false,
    }
}

/// Decoded size estimated from the encoded length, padding excluded
pub fn decoded_size(encoded: &str) -> usize {
    encoded.trim_end_matches('=').len() * 3 / 4
}

/// Bytes to KB, rounded to the nearest integer
pub fn size_in_kb(bytes: usize) -> u64 {
    (bytes as f64 / 1024.0).round() as u64
}

/// The subtype declared in a `data:<type>/<subtype>;...` prefix
pub fn mime_subtype(payload: &str) -> Option<&str> {
    MIME_SUBTYPE
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Run the format, size and MIME checks over one payload field.
///
/// A null value is left to the nullability check; any other non-string value
/// is a format violation and skips the size and MIME checks.
pub fn check_payload(
    collector: &mut ErrorCollector<'_>,
    field: &str,
    value: &Value,
    rule: &RuleNode,
) {
    let payload = match value {
        Value::String(payload) => payload.as_str(),
        Value::Null => return,
        _ => {
            record_format(collector, field);
            return;
        }
    };

    let encoded = strip_data_uri(payload);
    if !is_canonical_base64(encoded) {
        record_format(collector, field);
    }

    if let Some(max_kb) = rule.max_size_kb {
        let kb = size_in_kb(decoded_size(encoded));
        if kb > max_kb {
            collector.record(
                ViolationKind::Base64Size,
                field,
                format!("The {field} size is {kb} KB, which is more than {max_kb} KB"),
                json!(kb),
            );
        }
    }

    if let Some(allowed) = &rule.allowed_mimes {
        let subtype = mime_subtype(payload).unwrap_or(UNKNOWN_SUBTYPE);
        if !allowed.allows(subtype) {
            collector.record(
                ViolationKind::Base64Mime,
                field,
                format!("The format of the submitted file is {subtype} and it is not correct"),
                json!(subtype),
            );
        }
    }
}

fn record_format(collector: &mut ErrorCollector<'_>, field: &str) {
    collector.record(
        ViolationKind::Base64Format,
        field,
        format!("{field} Is Not Of Type Base64"),
        Value::Null,
    );
}
