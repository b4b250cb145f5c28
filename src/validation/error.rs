use miette::Diagnostic;
use thiserror::Error;

use crate::models::Violation;

/// A payload that produced at least one violation
#[derive(Error, Debug, Diagnostic)]
#[error("Payload failed validation with {} violation(s)", .violations.len())]
#[diagnostic(
    code(reqguard::validation_failed),
    help("Fix the fields listed below and resend the request")
)]
pub struct ValidationFailed {
    pub violations: Vec<Violation>,

    #[related]
    diagnostics: Vec<ViolationDiagnostic>,
}

/// A single violation rendered for the terminal
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,

    #[help]
    help: Option<String>,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(violation: &Violation) -> Self {
        let help = match &violation.code {
            Some(code) => format!("{} on '{}' (code {code})", violation.kind, violation.field),
            None => format!("{} on '{}'", violation.kind, violation.field),
        };

        Self {
            message: violation.message.clone(),
            help: Some(help),
        }
    }
}

impl ValidationFailed {
    /// `Ok` for an empty violation list, otherwise the violations as an error
    pub fn check(violations: Vec<Violation>) -> Result<(), ValidationFailed> {
        if violations.is_empty() {
            return Ok(());
        }

        let diagnostics = violations.iter().map(ViolationDiagnostic::from).collect();
        Err(Self {
            violations,
            diagnostics,
        })
    }
}
