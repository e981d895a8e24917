//! Rule-based query understanding: medical entity extraction and intent
//! classification. Both are ordered lists of (label, pattern) rules so the
//! evaluation order is explicit.

pub mod entities;
pub mod intent;

pub use entities::extract_entities;
pub use intent::classify_intent;
