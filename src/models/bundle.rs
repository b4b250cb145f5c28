use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codes::{CodeEntry, ResponseCodes};
use super::rule::RuleSet;
use crate::validation::{InMemoryLookup, Validator, ValidatorOptions};

/// A rule file: the rule tree for one endpoint plus everything needed to run it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default)]
    pub options: ValidatorOptions,

    /// Top-level field rules, in declaration order
    pub rules: RuleSet,

    /// Response-code table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<CodeEntry>,

    /// Known identifiers per entity type, used for existence checks
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entities: IndexMap<String, Vec<Value>>,
}

impl RuleBundle {
    pub fn response_codes(&self) -> ResponseCodes {
        ResponseCodes::from_entries(&self.codes)
    }

    pub fn lookup(&self) -> InMemoryLookup {
        self.entities
            .iter()
            .fold(InMemoryLookup::new(), |lookup, (entity, ids)| {
                lookup.with_entities(entity, ids.iter())
            })
    }

    /// Build a validator backed by the bundle's entity registry and options
    pub fn validator(&self) -> Validator<InMemoryLookup> {
        Validator::with_lookup(self.lookup()).with_options(self.options.clone())
    }
}
