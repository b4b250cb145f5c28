use anyhow::{Context, Result};
use reqguard::validation::checks::base64::{
    decoded_size, mime_subtype, size_in_kb, strip_data_uri,
};
use reqguard::validation::checks::check_payload;
use reqguard::validation::{ErrorCollector, ValidationFailed};
use reqguard::{ResponseCodes, RuleNode};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub fn base64_command(
    input: &Path,
    max: Option<u64>,
    mimes: Option<String>,
    field: &str,
) -> Result<()> {
    let raw = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    let payload = raw.trim_end();

    let mut rule = RuleNode::base64();
    rule.max_size_kb = max;
    if let Some(mimes) = mimes {
        rule = rule.mimes(mimes);
    }

    let encoded = strip_data_uri(payload);
    println!("MIME subtype: {}", mime_subtype(payload).unwrap_or("(none)"));
    println!("Decoded size: {} KB", size_in_kb(decoded_size(encoded)));

    let codes = ResponseCodes::new();
    let mut collector = ErrorCollector::new(&codes);
    check_payload(
        &mut collector,
        field,
        &Value::String(payload.to_string()),
        &rule,
    );

    let violations = collector.into_violations();
    for violation in &violations {
        println!("✗ {violation}");
    }
    if violations.is_empty() {
        println!("✅ Payload is valid");
    }

    ValidationFailed::check(violations)?;
    Ok(())
}
