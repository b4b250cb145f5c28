pub mod bundle;
pub mod codes;
pub mod rule;
pub mod violation;

// Re-export commonly used types
pub use bundle::RuleBundle;
pub use codes::{CodeEntry, ResponseCodes};
pub use rule::{BASE64_MARKER, FieldKind, MimeList, RuleNode, RuleSet};
pub use violation::{MESSAGE_TERMINATOR, Violation, ViolationKind};
