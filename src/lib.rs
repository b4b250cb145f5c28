pub mod error_utils;
pub mod loader;
pub mod models;
pub mod validation;

pub use models::{FieldKind, ResponseCodes, RuleBundle, RuleNode, RuleSet, Violation, ViolationKind};
pub use validation::{EntityLookup, InMemoryLookup, NoLookup, Validator, ValidatorOptions};
