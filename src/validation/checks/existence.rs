use serde_json::Value;
use tracing::trace;

use crate::models::{RuleNode, ViolationKind};
use crate::validation::{EntityLookup, ErrorCollector};

pub fn check_exists<L: EntityLookup + ?Sized>(
    collector: &mut ErrorCollector<'_>,
    lookup: &L,
    field: &str,
    value: &Value,
    rule: &RuleNode,
) {
    let Some(entity) = rule.existence_ref.as_deref() else {
        return;
    };
    if value.is_null() {
        return;
    }

    trace!("Looking up {entity} {value} for '{field}'");
    if !lookup.exists(entity, value) {
        collector.record(
            ViolationKind::Existence,
            field,
            format!("{field} Invalid"),
            value.clone(),
        );
    }
}
