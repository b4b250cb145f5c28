/// Scenarios exercised through the public library API
use reqguard::loader::BundleLoader;
use reqguard::{
    EntityLookup, FieldKind, InMemoryLookup, ResponseCodes, RuleNode, RuleSet, Validator,
    ViolationKind,
};
use serde_json::{Value, json};
use std::fs;

fn contract_bundle() -> reqguard::RuleBundle {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/contract.yml");
    BundleLoader::new()
        .unwrap()
        .load_file(std::path::Path::new(path))
        .unwrap()
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn validator_is_shareable_across_threads() {
    assert_send_sync::<Validator>();
    assert_send_sync::<Validator<InMemoryLookup>>();
}

#[test]
fn fixture_payloads_match_expectations() {
    let bundle = contract_bundle();
    let validator = bundle.validator();
    let codes = bundle.response_codes();
    let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

    let load = |name: &str| -> Value {
        let content = fs::read_to_string(format!("{fixtures}/{name}")).unwrap();
        serde_json::from_str(&content).unwrap()
    };

    assert!(
        validator
            .validate(&load("contract_valid.json"), &bundle.rules, &codes)
            .is_empty()
    );

    let empty = validator.validate(&load("contract_empty_files.json"), &bundle.rules, &codes);
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].kind, ViolationKind::MinCount);
    assert_eq!(empty[0].code.as_deref(), Some("305"));
}

#[test]
fn programmatic_rules_match_bundle_rules() {
    let bundle = contract_bundle();

    let mut rules = RuleSet::new();
    rules.insert(
        "UserId".to_string(),
        RuleNode::string().non_nullable().exists_in("user"),
    );
    rules.insert(
        "Files".to_string(),
        RuleNode::array()
            .non_nullable()
            .min_count(1)
            .max_count(2)
            .child(
                "Base64",
                RuleNode::base64().non_nullable().max_size_kb(1).mimes("png,jpg"),
            )
            .child("TypeId", RuleNode::integer().non_nullable()),
    );

    assert_eq!(rules, bundle.rules);
}

#[test]
fn custom_lookup_sees_every_referenced_identifier() {
    use std::cell::RefCell;

    struct Recording {
        seen: RefCell<Vec<String>>,
    }

    impl EntityLookup for Recording {
        fn exists(&self, entity: &str, value: &Value) -> bool {
            self.seen.borrow_mut().push(format!("{entity}:{value}"));
            true
        }
    }

    let mut rules = RuleSet::new();
    rules.insert(
        "Items".to_string(),
        RuleNode::array().child("ProductId", RuleNode::integer().exists_in("product")),
    );

    let lookup = Recording {
        seen: RefCell::new(Vec::new()),
    };
    let validator = Validator::with_lookup(lookup);
    let violations = validator.validate(
        &json!({ "Items": [{ "ProductId": 3 }, { "ProductId": null }, { "ProductId": 9 }] }),
        &rules,
        &ResponseCodes::new(),
    );

    // null is a type mismatch but never reaches the lookup
    assert_eq!(
        violations.iter().map(|v| v.kind).collect::<Vec<_>>(),
        vec![ViolationKind::TypeMismatch]
    );
    assert_eq!(
        *validator.lookup().seen.borrow(),
        vec!["product:3", "product:9"]
    );
}

#[test]
fn unset_kind_accepts_any_shape() {
    let rules: RuleSet = serde_yaml::from_str("Meta: { nullable: false }").unwrap();
    assert_eq!(rules["Meta"].kind, FieldKind::None);

    let validator = Validator::new();
    let codes = ResponseCodes::new();
    for value in [json!(1), json!("x"), json!([1]), json!({"a": 1})] {
        assert!(validator.validate(&json!({ "Meta": value }), &rules, &codes).is_empty());
    }
    assert_eq!(
        validator.validate(&json!({ "Meta": null }), &rules, &codes)[0].kind,
        ViolationKind::Nullability
    );
}
