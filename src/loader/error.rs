use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a file into a usable rule bundle or payload
#[derive(Error, Debug, Diagnostic)]
pub enum RuleFileError {
    #[error("Failed to read {}", .path.display())]
    #[diagnostic(code(reqguard::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {name}: {reason}")]
    #[diagnostic(code(reqguard::parse))]
    Parse {
        name: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Rule bundle {name} does not match the rule schema")]
    #[diagnostic(
        code(reqguard::schema),
        help("See schemas/v1/rule-bundle-schema.json for the accepted layout")
    )]
    Schema {
        name: String,
        #[related]
        violations: Vec<SchemaViolation>,
    },

    #[error("Rule schema could not be compiled: {0}")]
    #[diagnostic(code(reqguard::internal))]
    SchemaCompile(String),

    #[error("Failed to load rule bundle {name}")]
    #[diagnostic(code(reqguard::deserialize))]
    Deserialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One schema mismatch inside a rule bundle
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("{message}")]
pub struct SchemaViolation {
    pub message: String,

    /// JSON pointer to the offending node
    pub instance_path: String,

    #[help]
    pub help: Option<String>,
}

impl SchemaViolation {
    pub fn new(instance_path: String, message: String) -> Self {
        let help = if instance_path.is_empty() {
            "at the document root".to_string()
        } else {
            format!("at {instance_path}")
        };

        Self {
            message,
            instance_path,
            help: Some(help),
        }
    }
}
