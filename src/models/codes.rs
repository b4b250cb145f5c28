use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::violation::ViolationKind;

/// One entry of a response-code table as written in a rule bundle.
///
/// An entry matches either structurally (`kind`, optionally narrowed by
/// `field`) or by the exact message text, without the trailing terminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ViolationKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub code: String,
}

/// Lookup table from violations to external response codes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseCodes {
    by_field: HashMap<(ViolationKind, String), String>,
    by_kind: HashMap<ViolationKind, String>,
    by_message: HashMap<String, String>,
}

impl ResponseCodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every violation of `kind` raised for `field`
    pub fn with_field(
        mut self,
        kind: ViolationKind,
        field: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.by_field.insert((kind, field.into()), code.into());
        self
    }

    /// Map every violation of `kind`, whatever the field
    pub fn with_kind(mut self, kind: ViolationKind, code: impl Into<String>) -> Self {
        self.by_kind.insert(kind, code.into());
        self
    }

    /// Map a violation by its exact message text
    pub fn with_message(mut self, message: impl Into<String>, code: impl Into<String>) -> Self {
        self.by_message.insert(message.into(), code.into());
        self
    }

    pub fn from_entries(entries: &[CodeEntry]) -> Self {
        entries.iter().fold(Self::new(), |codes, entry| {
            match (&entry.kind, &entry.field, &entry.message) {
                (Some(kind), Some(field), _) => codes.with_field(*kind, field, &entry.code),
                (Some(kind), None, _) => codes.with_kind(*kind, &entry.code),
                (None, _, Some(message)) => codes.with_message(message, &entry.code),
                (None, _, None) => {
                    tracing::warn!(
                        "Ignoring response code '{}' with neither kind nor message",
                        entry.code
                    );
                    codes
                }
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty() && self.by_kind.is_empty() && self.by_message.is_empty()
    }

    /// Resolve a code: field-specific first, then kind-wide, then exact message
    pub fn resolve(&self, kind: ViolationKind, field: &str, detail: &str) -> Option<&str> {
        self.by_field
            .get(&(kind, field.to_string()))
            .or_else(|| self.by_kind.get(&kind))
            .or_else(|| self.by_message.get(detail))
            .map(String::as_str)
    }
}
