use serde_json::Value;

use crate::models::{RuleNode, ViolationKind};
use crate::validation::ErrorCollector;

/// Only an explicit `nullable: false` makes null an error; falsy values such
/// as `0`, `false` or `""` are never treated as null.
pub fn check_nullable(
    collector: &mut ErrorCollector<'_>,
    field: &str,
    value: &Value,
    rule: &RuleNode,
) {
    if rule.is_non_nullable() && value.is_null() {
        collector.record(
            ViolationKind::Nullability,
            field,
            format!("This {field} must not be null"),
            Value::Null,
        );
    }
}
