use serde_json::Value;

use crate::models::{FieldKind, ViolationKind};
use crate::validation::ErrorCollector;

/// Whether `value` has the runtime shape declared by `kind`.
/// `base64` and `none` carry no shape constraint here.
pub fn matches_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::Array => value.is_array(),
        FieldKind::Base64 | FieldKind::None => true,
    }
}

/// A null value fails every shape except `base64` and `none`.
pub fn check_type(collector: &mut ErrorCollector<'_>, field: &str, value: &Value, kind: FieldKind) {
    if matches_kind(value, kind) {
        return;
    }

    collector.record(
        ViolationKind::TypeMismatch,
        field,
        format!("{field} Is Not Of Type {kind}"),
        value.clone(),
    );
}
