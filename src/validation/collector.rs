use serde_json::Value;
use tracing::trace;

use crate::models::{MESSAGE_TERMINATOR, ResponseCodes, Violation, ViolationKind};

/// Append-only record of the violations found during one validation run.
///
/// A collector borrows the run's response-code table and resolves each code
/// when the violation is recorded. Records are never reordered or removed.
pub struct ErrorCollector<'a> {
    codes: &'a ResponseCodes,
    violations: Vec<Violation>,
}

impl<'a> ErrorCollector<'a> {
    pub fn new(codes: &'a ResponseCodes) -> Self {
        Self {
            codes,
            violations: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: ViolationKind, field: &str, detail: String, context: Value) {
        let code = self
            .codes
            .resolve(kind, field, &detail)
            .map(str::to_string);

        trace!("{kind} on '{field}': {detail}");

        self.violations.push(Violation {
            kind,
            field: field.to_string(),
            code,
            message: format!("{detail}{MESSAGE_TERMINATOR}"),
            context,
        });
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
