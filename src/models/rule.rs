use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping from field name to the rule that governs it.
///
/// Declaration order is significant: fields are visited, and violations
/// reported, in the order they appear here.
pub type RuleSet = IndexMap<String, RuleNode>;

/// Name of the reserved child field that carries an embedded file payload.
pub const BASE64_MARKER: &str = "base64";

/// Declared primitive kind of a field
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(alias = "str")]
    String,
    #[serde(alias = "int")]
    Integer,
    Array,
    #[serde(alias = "Base64")]
    Base64,
    #[default]
    None,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Array => "array",
            FieldKind::Base64 => "base64",
            FieldKind::None => "none",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list of MIME subtypes, written either as `"png,jpg"` or as a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MimeList {
    Csv(String),
    List(Vec<String>),
}

impl MimeList {
    /// Iterate the individual subtypes, trimmed, skipping empty entries
    pub fn entries(&self) -> Vec<&str> {
        match self {
            MimeList::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect(),
            MimeList::List(list) => list
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn allows(&self, subtype: &str) -> bool {
        self.entries().contains(&subtype)
    }
}

impl fmt::Display for MimeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries().join(","))
    }
}

/// One declared field constraint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleNode {
    /// Expected runtime shape of the value
    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    /// `Some(false)` makes the field non-nullable; anything else allows null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Entity type handed to the existence lookup
    #[serde(
        rename = "exists",
        alias = "modalclass",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub existence_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,

    /// Rules applied to every element of an array-of-objects value
    #[serde(alias = "child", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<RuleSet>,

    /// Maximum decoded payload size in KB (Base64 fields only)
    #[serde(
        rename = "max",
        alias = "maxSizeKB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_size_kb: Option<u64>,

    /// Accepted MIME subtypes (Base64 fields only)
    #[serde(
        rename = "mimes",
        alias = "allowedMimeTypes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_mimes: Option<MimeList>,
}

impl RuleNode {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn array() -> Self {
        Self::new(FieldKind::Array)
    }

    pub fn base64() -> Self {
        Self::new(FieldKind::Base64)
    }

    pub fn non_nullable(mut self) -> Self {
        self.nullable = Some(false);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    pub fn exists_in(mut self, entity: impl Into<String>) -> Self {
        self.existence_ref = Some(entity.into());
        self
    }

    pub fn min_count(mut self, min: usize) -> Self {
        self.min_count = Some(min);
        self
    }

    pub fn max_count(mut self, max: usize) -> Self {
        self.max_count = Some(max);
        self
    }

    pub fn max_size_kb(mut self, kb: u64) -> Self {
        self.max_size_kb = Some(kb);
        self
    }

    pub fn mimes(mut self, csv: impl Into<String>) -> Self {
        self.allowed_mimes = Some(MimeList::Csv(csv.into()));
        self
    }

    /// Declare a child rule; children keep insertion order
    pub fn child(mut self, name: impl Into<String>, rule: RuleNode) -> Self {
        self.children
            .get_or_insert_with(RuleSet::new)
            .insert(name.into(), rule);
        self
    }

    pub fn is_non_nullable(&self) -> bool {
        self.nullable == Some(false)
    }

    pub fn has_cardinality(&self) -> bool {
        self.min_count.is_some() || self.max_count.is_some()
    }

    /// Whether the value stored under `field` must be checked as an embedded
    /// Base64 payload. Inside children the reserved marker name triggers the
    /// check regardless of declared kind.
    pub fn carries_payload(&self, field: &str, nested: bool) -> bool {
        self.kind == FieldKind::Base64 || (nested && field.eq_ignore_ascii_case(BASE64_MARKER))
    }
}
