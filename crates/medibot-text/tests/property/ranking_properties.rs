use medibot_core::types::Document;
use medibot_text::normalize::{is_stop_word, stem_word};
use medibot_text::{build, cosine_similarity, normalize, rank, TermVector};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "fever", "cough", "headache", "nausea", "rash", "fatigue", "virus", "bacteria", "rest", "fluids", "chest", "pain",
    "swelling", "infection", "treatment", "the", "and", "with",
];

fn term_vector() -> impl Strategy<Value = TermVector> {
    prop::collection::hash_map("[a-f]{3,5}", 0.0f64..20.0, 0..8)
}

fn words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(VOCAB).prop_map(str::to_string), 0..max)
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (prop::sample::select(VOCAB), words(4), words(3), words(3)).prop_map(|(name, symptoms, causes, treatment)| Document {
            name: name.to_string(),
            symptoms,
            causes,
            diagnosis: String::new(),
            treatment,
        }),
        0..8,
    )
}

proptest! {
    #[test]
    fn normalized_tokens_are_long_and_not_stop_words(s in ".{0,200}") {
        for token in normalize(&s) {
            prop_assert!(token.len() > 2, "short token {:?}", token);
            prop_assert!(!is_stop_word(&token), "stop word {:?}", token);
        }
    }

    #[test]
    fn stemming_never_lengthens(s in "[a-z]{0,15}") {
        let once = stem_word(&s);
        let twice = stem_word(&once);
        prop_assert!(once.len() <= s.len());
        prop_assert!(twice.len() <= once.len());
    }

    #[test]
    fn cosine_is_symmetric_and_bounded(a in term_vector(), b in term_vector()) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn rank_is_bounded_and_sorted(docs in documents(), query in words(5), top_k in 0usize..5) {
        let space = build(&docs);
        let matches = rank(&space, &query.join(" "), &docs, top_k);
        prop_assert!(matches.len() <= top_k);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
        for m in &matches {
            prop_assert!(m.similarity > 0.1 && m.similarity <= 1.0);
            prop_assert_eq!(&docs[m.index], m.document);
        }
    }

    #[test]
    fn idf_weights_are_non_negative(docs in documents()) {
        let space = build(&docs);
        prop_assert!(space.idf().values().all(|w| *w >= 0.0));
        prop_assert!(space.vectors().iter().flat_map(|v| v.values()).all(|w| *w >= 0.0));
    }
}
