use crate::types::{Document, ScoredMatch};

/// Ranks a document collection against a free-text query.
///
/// Implementations hold only derived state; the collection itself is passed
/// in on every call and must be the one the ranker was built from.
pub trait Ranker: Send + Sync {
    fn rank<'a>(&self, query: &str, documents: &'a [Document], k: usize) -> Vec<ScoredMatch<'a>>;
}

/// Answers a query when the local collection cannot.
pub trait FallbackResponder: Send + Sync {
    fn respond(&self, query: &str) -> anyhow::Result<String>;
}
