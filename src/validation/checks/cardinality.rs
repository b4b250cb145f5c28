use serde_json::{Value, json};

use crate::models::{RuleNode, ViolationKind};
use crate::validation::ErrorCollector;

/// Fails when the array holds fewer than `minCount` elements.
/// Non-array values are left to the type check.
pub fn check_min_count(
    collector: &mut ErrorCollector<'_>,
    field: &str,
    value: &Value,
    rule: &RuleNode,
) {
    let (Some(min), Some(items)) = (rule.min_count, value.as_array()) else {
        return;
    };

    if items.len() < min {
        collector.record(
            ViolationKind::MinCount,
            field,
            format!("The number of {field} is more than {min}"),
            json!(items.len()),
        );
    }
}

/// Fails when the array holds more than `maxCount` elements; exactly
/// `maxCount` is accepted.
pub fn check_max_count(
    collector: &mut ErrorCollector<'_>,
    field: &str,
    value: &Value,
    rule: &RuleNode,
) {
    let (Some(max), Some(items)) = (rule.max_count, value.as_array()) else {
        return;
    };

    if items.len() > max {
        collector.record(
            ViolationKind::MaxCount,
            field,
            format!("The number of {field} is less than {max}"),
            json!(items.len()),
        );
    }
}
