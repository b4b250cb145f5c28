//! Loading rule bundles and request payloads from disk

mod error;
mod lint;
mod payload;
mod schemas;

pub use error::{RuleFileError, SchemaViolation};
pub use lint::lint_rules;
pub use payload::{parse_payload, read_payload};

use miette::SourceSpan;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error_utils::create_named_source;
use crate::models::RuleBundle;
use schemas::get_rule_bundle_schema;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

/// Reads rule bundles written in YAML or JSON.
///
/// Every bundle is checked against the embedded rule schema before it is
/// deserialized, then linted; lint findings are logged as warnings.
pub struct BundleLoader {
    schema: jsonschema::Validator,
}

impl BundleLoader {
    pub fn new() -> Result<Self, RuleFileError> {
        let schema = get_rule_bundle_schema()
            .map_err(|e| RuleFileError::SchemaCompile(e.to_string()))?;
        let schema = schema_draft::options()
            .build(&schema)
            .map_err(|e| RuleFileError::SchemaCompile(e.to_string()))?;

        Ok(Self { schema })
    }

    pub fn load_file(&self, path: &Path) -> Result<RuleBundle, RuleFileError> {
        debug!("Loading rule bundle {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| RuleFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_named(path, content)
    }

    /// Load a bundle from memory; `name` only labels diagnostics
    pub fn load_str(&self, name: &str, content: &str) -> Result<RuleBundle, RuleFileError> {
        self.load_named(Path::new(name), content.to_string())
    }

    fn load_named(&self, path: &Path, content: String) -> Result<RuleBundle, RuleFileError> {
        let name = path.display().to_string();

        // YAML is a superset of JSON, so one parser covers both formats
        let document: Value = match serde_yaml::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                let span = e.location().map(|location| {
                    SourceSpan::new(location.index().min(content.len()).into(), 0)
                });
                return Err(RuleFileError::Parse {
                    name,
                    reason: e.to_string(),
                    src: create_named_source(path, content),
                    span,
                });
            }
        };

        let violations: Vec<SchemaViolation> = self
            .schema
            .iter_errors(&document)
            .map(|error| SchemaViolation::new(error.instance_path.to_string(), error.to_string()))
            .collect();
        if !violations.is_empty() {
            return Err(RuleFileError::Schema { name, violations });
        }

        let bundle: RuleBundle = serde_json::from_value(document)
            .map_err(|source| RuleFileError::Deserialize {
                name: name.clone(),
                source,
            })?;

        for warning in lint_rules(&bundle.rules) {
            warn!("{name}: {warning}");
        }

        info!("✓ Loaded {} rule(s) from {name}", bundle.rules.len());
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests;
