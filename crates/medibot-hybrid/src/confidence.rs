use medibot_core::error::{Error, Result};
use medibot_core::types::{EntitySet, IntentResult, ScoredMatch};

pub const SIMILARITY_WEIGHT: f64 = 0.5;
pub const ENTITY_WEIGHT: f64 = 0.1;
pub const INTENT_WEIGHT: f64 = 0.4;

/// Blend mean similarity, entity count and intent confidence into `[0, 1]`.
///
/// `matches` must not be empty.
pub fn score(matches: &[ScoredMatch<'_>], entities: &EntitySet, intent: &IntentResult) -> Result<f64> {
    if matches.is_empty() {
        return Err(Error::EmptyMatches);
    }
    let avg_similarity = matches.iter().map(|m| m.similarity).sum::<f64>() / matches.len() as f64;
    let entity_count = entities.total() as f64;
    let blended = avg_similarity * SIMILARITY_WEIGHT + entity_count * ENTITY_WEIGHT + intent.confidence * INTENT_WEIGHT;
    Ok(blended.min(1.0))
}
