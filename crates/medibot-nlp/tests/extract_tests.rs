use medibot_core::types::{EntityCategory, Intent};
use medibot_nlp::intent::intent_scores;
use medibot_nlp::{classify_intent, extract_entities};
use proptest::prelude::*;

#[test]
fn query_with_entities_and_intent() {
    let query = "How do doctors treat chest tightness and shortness of breath in asthma?";
    let entities = extract_entities(query);
    let intent = classify_intent(query);

    assert_eq!(intent.intent, Intent::Treatment);
    assert_eq!(intent.confidence, 1.0);
    assert_eq!(entities.get(EntityCategory::Symptoms).len(), 2, "shortness, breath");
    assert!(entities.get(EntityCategory::BodyParts).contains("chest"));
    assert!(entities.get(EntityCategory::Conditions).contains("asthma"));
    assert_eq!(entities.total(), 4);

    // "pain" also triggers the symptoms rule, which precedes treatment
    assert_eq!(classify_intent("how to treat chest pain").intent, Intent::Symptoms);
}

#[test]
fn general_phrases() {
    for q in ["Tell me about pneumonia", "explain hypertension", "Define migraine", "what are allergies"] {
        assert_eq!(classify_intent(q).intent, Intent::General, "{}", q);
    }
}

#[test]
fn due_to_is_a_causes_phrase() {
    assert_eq!(classify_intent("is this rash due to stress").intent, Intent::Causes);
}

proptest! {
    #[test]
    fn confidence_is_half_or_one(s in ".{0,80}") {
        let r = classify_intent(&s);
        let matched = intent_scores(&s).iter().any(|(_, score)| *score == 1);
        prop_assert_eq!(r.confidence, if matched { 1.0 } else { 0.5 });
    }

    #[test]
    fn entities_are_lowercase(s in "[A-Za-z ]{0,60}") {
        let e = extract_entities(&s);
        for term in e.terms() {
            prop_assert_eq!(term.to_string(), term.to_lowercase());
        }
    }
}
