use medibot_core::types::{EntityCategory, EntitySet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Vocabulary per category, matched case-insensitively on word boundaries.
static ENTITY_RULES: Lazy<Vec<(EntityCategory, Regex)>> = Lazy::new(|| {
    vec![
        (
            EntityCategory::Symptoms,
            rule(r"(?i)(?-u:\b)(pain|ache|fever|nausea|fatigue|headache|cough|shortness|breath|dizziness|swelling)(?-u:\b)"),
        ),
        (
            EntityCategory::BodyParts,
            rule(r"(?i)(?-u:\b)(chest|head|stomach|heart|lung|kidney|liver|brain|joint|muscle)(?-u:\b)"),
        ),
        (
            EntityCategory::Conditions,
            rule(r"(?i)(?-u:\b)(diabetes|hypertension|asthma|migraine|pneumonia|depression|anxiety|arthritis)(?-u:\b)"),
        ),
        (
            EntityCategory::Medications,
            rule(r"(?i)(?-u:\b)(aspirin|ibuprofen|acetaminophen|insulin|metformin|antibiotics)(?-u:\b)"),
        ),
    ]
});

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("entity pattern is a valid regex")
}

/// Collect the distinct lowercase vocabulary hits of `text` per category.
pub fn extract_entities(text: &str) -> EntitySet {
    let mut entities = EntitySet::new();
    for (category, pattern) in ENTITY_RULES.iter() {
        for hit in pattern.find_iter(text) {
            entities.insert(*category, hit.as_str());
        }
    }
    debug!(entities = entities.total(), "extracted medical entities");
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_terms_in_every_category() {
        let e = extract_entities("Chest PAIN after aspirin, asthma flare, chest pain again");
        assert_eq!(e.get(EntityCategory::Symptoms).iter().collect::<Vec<_>>(), vec!["pain"]);
        assert_eq!(e.get(EntityCategory::BodyParts).iter().collect::<Vec<_>>(), vec!["chest"]);
        assert_eq!(e.get(EntityCategory::Conditions).iter().collect::<Vec<_>>(), vec!["asthma"]);
        assert_eq!(e.get(EntityCategory::Medications).iter().collect::<Vec<_>>(), vec!["aspirin"]);
        assert_eq!(e.total(), 4);
    }

    #[test]
    fn respects_word_boundaries() {
        let e = extract_entities("painful headaches and heartburn");
        assert!(e.is_empty(), "got {:?}", e.terms());
    }

    #[test]
    fn non_ascii_letters_are_boundaries() {
        let e = extract_entities("éfever and ñpain");
        assert_eq!(e.get(EntityCategory::Symptoms).iter().collect::<Vec<_>>(), vec!["fever", "pain"]);
        assert_eq!(e.total(), 2);
    }

    #[test]
    fn no_hits_still_has_all_categories() {
        let e = extract_entities("hello there");
        assert_eq!(e.iter().count(), 4);
        assert_eq!(e.total(), 0);
    }

    #[test]
    fn headache_and_head_are_separate_hits() {
        let e = extract_entities("head hurts, headache since morning");
        assert!(e.get(EntityCategory::Symptoms).contains("headache"));
        assert!(e.get(EntityCategory::BodyParts).contains("head"));
    }
}
