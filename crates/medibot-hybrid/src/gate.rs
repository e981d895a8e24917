use medibot_core::types::Intent;

pub const GENERAL_THRESHOLD: f64 = 0.2;
pub const SPECIFIC_THRESHOLD: f64 = 0.3;

/// Minimum confidence for answering from the collection.
pub fn threshold(intent: Intent) -> f64 {
    match intent {
        Intent::General => GENERAL_THRESHOLD,
        _ => SPECIFIC_THRESHOLD,
    }
}

pub fn passes(confidence: f64, intent: Intent) -> bool {
    confidence >= threshold(intent)
}
