//! Check primitives applied to a single field.
//!
//! Every check records into the run's [`ErrorCollector`](super::ErrorCollector)
//! and never stops the walk.

pub mod base64;
mod cardinality;
mod existence;
mod nullable;
mod types;

pub use base64::check_payload;
pub use cardinality::{check_max_count, check_min_count};
pub use existence::check_exists;
pub use nullable::check_nullable;
pub use types::{check_type, matches_kind};
