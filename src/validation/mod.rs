//! The validation engine: a rule-tree walker and the check primitives it drives.

pub mod checks;
mod collector;
mod error;
mod lookup;
mod validator;


pub use collector::ErrorCollector;
pub use error::{ValidationFailed, ViolationDiagnostic};
pub use lookup::{EntityLookup, InMemoryLookup, NoLookup};
pub use validator::{Validator, ValidatorOptions};
