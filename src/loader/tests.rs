use super::*;
use crate::models::{FieldKind, ViolationKind};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const CONTRACT_BUNDLE: &str = r#"
version: 1
options:
  legacy_child_cardinality: true
rules:
  UserId:
    type: str
    nullable: false
    modalclass: user
  Files:
    type: array
    nullable: false
    minCount: 1
    maxCount: 2
    child:
      Base64:
        type: Base64
        nullable: false
        max: 2048
        mimes: "png,jpg"
      TypeId:
        type: int
        nullable: false
codes:
  - kind: type_mismatch
    field: UserId
    code: "300"
  - message: This Files must not be null
    code: "303"
entities:
  user: [1, "u-2"]
"#;

#[test]
fn test_loader_creation() {
    assert!(BundleLoader::new().is_ok());
}

#[test]
fn test_load_contract_bundle() {
    let loader = BundleLoader::new().unwrap();
    let bundle = loader.load_str("contract.yml", CONTRACT_BUNDLE).unwrap();

    assert_eq!(bundle.version, Some(1));
    assert!(bundle.options.legacy_child_cardinality);

    let fields: Vec<&str> = bundle.rules.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["UserId", "Files"]);
    assert_eq!(bundle.rules["UserId"].kind, FieldKind::String);

    let children = bundle.rules["Files"].children.as_ref().unwrap();
    let child_fields: Vec<&str> = children.keys().map(String::as_str).collect();
    assert_eq!(child_fields, vec!["Base64", "TypeId"]);

    let codes = bundle.response_codes();
    assert_eq!(
        codes.resolve(ViolationKind::TypeMismatch, "UserId", ""),
        Some("300")
    );
}

#[test]
fn test_bundle_validator_uses_entities() {
    let loader = BundleLoader::new().unwrap();
    let bundle = loader.load_str("contract.yml", CONTRACT_BUNDLE).unwrap();
    let validator = bundle.validator();

    let violations = validator.validate(
        &json!({ "UserId": "3", "Files": null }),
        &bundle.rules,
        &bundle.response_codes(),
    );
    let summary: Vec<(ViolationKind, Option<&str>)> = violations
        .iter()
        .map(|v| (v.kind, v.code.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ViolationKind::Existence, None),
            (ViolationKind::TypeMismatch, None),
            (ViolationKind::Nullability, Some("303")),
        ]
    );
}

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{ "rules": { "Zeta": { "type": "integer" }, "Alpha": { "type": "string" } } }"#,
    )
    .unwrap();

    let bundle = BundleLoader::new().unwrap().load_file(&path).unwrap();
    let fields: Vec<&str> = bundle.rules.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["Zeta", "Alpha"]);
    assert!(!bundle.options.legacy_child_cardinality);
}

#[test]
fn test_missing_rules_section_fails_schema() {
    let loader = BundleLoader::new().unwrap();
    let err = loader.load_str("empty.yml", "version: 1").unwrap_err();

    match err {
        RuleFileError::Schema { violations, .. } => {
            assert_eq!(violations.len(), 1);
            assert!(violations[0].message.contains("rules"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_unknown_rule_type_fails_schema() {
    let loader = BundleLoader::new().unwrap();
    let err = loader
        .load_str("bad.yml", "rules:\n  UserId:\n    type: uuid\n")
        .unwrap_err();

    match err {
        RuleFileError::Schema { violations, .. } => {
            assert!(
                violations
                    .iter()
                    .any(|v| v.instance_path == "/rules/UserId/type")
            );
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_conflicting_aliases_fail_schema() {
    let loader = BundleLoader::new().unwrap();
    let yaml = r#"
rules:
  UserId:
    type: string
    exists: user
    modalclass: user
"#;
    assert!(matches!(
        loader.load_str("dup.yml", yaml),
        Err(RuleFileError::Schema { .. })
    ));
}

#[test]
fn test_invalid_yaml_reports_parse_error() {
    let loader = BundleLoader::new().unwrap();
    let err = loader.load_str("broken.yml", "rules: [unclosed").unwrap_err();
    assert!(matches!(err, RuleFileError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse broken.yml"));
}

#[test]
fn test_missing_file_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = BundleLoader::new()
        .unwrap()
        .load_file(&temp_dir.path().join("nope.yml"))
        .unwrap_err();
    assert!(matches!(err, RuleFileError::Read { .. }));
}
