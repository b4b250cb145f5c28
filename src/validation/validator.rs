use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::checks;
use super::collector::ErrorCollector;
use super::lookup::{EntityLookup, NoLookup};
use crate::models::{ResponseCodes, RuleNode, RuleSet, Violation, ViolationKind};

/// Behaviour switches for a [`Validator`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Re-check the parent array's min/max count for every (child rule,
    /// element) pair instead of checking each field's own bounds once.
    /// Reproduces the reporting of older rule consumers call for call.
    pub legacy_child_cardinality: bool,
}

/// Walks a rule tree alongside a payload and reports every violation.
///
/// `validate` borrows the validator immutably and allocates a fresh
/// collector per call, so one validator can serve many requests.
#[derive(Debug, Clone, Default)]
pub struct Validator<L = NoLookup> {
    lookup: L,
    options: ValidatorOptions,
}

impl Validator<NoLookup> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: EntityLookup> Validator<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            lookup,
            options: ValidatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Validate `data` against `rules`. An empty result means the payload is valid.
    pub fn validate(
        &self,
        data: &Value,
        rules: &RuleSet,
        codes: &ResponseCodes,
    ) -> Vec<Violation> {
        let mut run = Run {
            lookup: &self.lookup,
            options: &self.options,
            collector: ErrorCollector::new(codes),
        };

        for (field, rule) in rules {
            match field_of(data, field) {
                Some(value) => run.check_field(field, value, rule, None),
                None => run.missing(field),
            }
        }

        let violations = run.collector.into_violations();
        info!(
            "Validated {} field(s): {} violation(s)",
            rules.len(),
            violations.len()
        );
        violations
    }
}

/// The array field whose elements are being descended into
#[derive(Clone, Copy)]
struct Parent<'d> {
    field: &'d str,
    value: &'d Value,
    rule: &'d RuleNode,
}

/// State of a single validation run
struct Run<'a, L> {
    lookup: &'a L,
    options: &'a ValidatorOptions,
    collector: ErrorCollector<'a>,
}

impl<L: EntityLookup> Run<'_, L> {
    fn missing(&mut self, field: &str) {
        debug!("Field '{field}' is missing");
        self.collector.record(
            ViolationKind::MissingField,
            field,
            format!("{field} Is Not Find On Request"),
            Value::Null,
        );
    }

    /// Checks for one present field, in fixed order and without short-circuit
    fn check_field(
        &mut self,
        field: &str,
        value: &Value,
        rule: &RuleNode,
        parent: Option<Parent<'_>>,
    ) {
        debug!("Checking field '{field}' as {}", rule.kind);

        checks::check_type(&mut self.collector, field, value, rule.kind);
        checks::check_nullable(&mut self.collector, field, value, rule);
        checks::check_exists(&mut self.collector, self.lookup, field, value, rule);
        self.descend(field, value, rule);

        match parent {
            Some(parent) if self.options.legacy_child_cardinality => {
                let Parent { field, value, rule } = parent;
                checks::check_min_count(&mut self.collector, field, value, rule);
                checks::check_max_count(&mut self.collector, field, value, rule);
            }
            _ => {
                checks::check_min_count(&mut self.collector, field, value, rule);
                checks::check_max_count(&mut self.collector, field, value, rule);
            }
        }

        if rule.carries_payload(field, parent.is_some()) {
            checks::check_payload(&mut self.collector, field, value, rule);
        }
    }

    /// Apply child rules to every element of an array value.
    /// Children declared on anything but an array are ignored.
    fn descend(&mut self, field: &str, value: &Value, rule: &RuleNode) {
        let Some(children) = &rule.children else {
            return;
        };
        let Some(elements) = value.as_array() else {
            debug!("Ignoring children of '{field}': value is not an array");
            return;
        };

        let parent = Parent { field, value, rule };
        for (child_field, child_rule) in children {
            for element in elements {
                match field_of(element, child_field) {
                    Some(child_value) => {
                        self.check_field(child_field, child_value, child_rule, Some(parent))
                    }
                    None => self.missing(child_field),
                }
            }
        }
    }
}

fn field_of<'v>(container: &'v Value, field: &str) -> Option<&'v Value> {
    container.as_object().and_then(|object| object.get(field))
}
