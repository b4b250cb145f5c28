use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Marker appended to every violation message
pub const MESSAGE_TERMINATOR: &str = ".!";

/// Category of a detected violation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    TypeMismatch,
    Nullability,
    Existence,
    MinCount,
    MaxCount,
    Base64Format,
    Base64Size,
    Base64Mime,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::TypeMismatch => "type_mismatch",
            ViolationKind::Nullability => "nullability",
            ViolationKind::Existence => "existence",
            ViolationKind::MinCount => "min_count",
            ViolationKind::MaxCount => "max_count",
            ViolationKind::Base64Format => "base64_format",
            ViolationKind::Base64Size => "base64_size",
            ViolationKind::Base64Mime => "base64_mime",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected mismatch between the payload and its rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,

    /// Name of the field the violation was raised for
    pub field: String,

    /// Externally assigned response code, when the code table maps this violation
    pub code: Option<String>,

    /// Human readable message, always ending in [`MESSAGE_TERMINATOR`]
    pub message: String,

    /// The value that triggered the failure, or null
    pub context: Value,
}

impl Violation {
    /// Message text without the trailing terminator
    pub fn detail(&self) -> &str {
        self.message
            .strip_suffix(MESSAGE_TERMINATOR)
            .unwrap_or(&self.message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
