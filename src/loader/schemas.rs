use serde_json::Value;

// Embed schemas at compile time
const RULE_BUNDLE_SCHEMA: &str = include_str!("../../schemas/v1/rule-bundle-schema.json");

pub fn get_rule_bundle_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(RULE_BUNDLE_SCHEMA)
}
