use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Capability answering "does an entity of this type with this identifier exist?"
///
/// Implementations must not have observable side effects. A validator that is
/// shared across threads needs a lookup that is `Send + Sync`.
pub trait EntityLookup {
    fn exists(&self, entity: &str, value: &Value) -> bool;
}

impl<F> EntityLookup for F
where
    F: Fn(&str, &Value) -> bool,
{
    fn exists(&self, entity: &str, value: &Value) -> bool {
        self(entity, value)
    }
}

/// Lookup that reports every entity as present
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl EntityLookup for NoLookup {
    fn exists(&self, entity: &str, value: &Value) -> bool {
        tracing::trace!("No entity lookup configured; assuming {entity} {value} exists");
        true
    }
}

/// Identifier registry held in memory, keyed by entity type.
///
/// Identifiers compare by their textual form so that `7` and `"7"` address
/// the same record, the way a primary-key lookup would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    entities: HashMap<String, HashSet<String>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities<'v>(
        mut self,
        entity: impl Into<String>,
        ids: impl IntoIterator<Item = &'v Value>,
    ) -> Self {
        let known = self.entities.entry(entity.into()).or_default();
        known.extend(ids.into_iter().filter_map(identifier_key));
        self
    }
}

impl EntityLookup for InMemoryLookup {
    fn exists(&self, entity: &str, value: &Value) -> bool {
        match (self.entities.get(entity), identifier_key(value)) {
            (Some(known), Some(key)) => known.contains(&key),
            _ => false,
        }
    }
}

/// Only strings and numbers can address a record
fn identifier_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
