use medibot_core::types::{Intent, IntentResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Confidence reported when no rule matches.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// One rule per intent, in tie-break order.
static INTENT_RULES: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    vec![
        (Intent::Symptoms, rule(r"(?i)(?-u:\b)(symptom|sign|feel|hurt|pain|ache)(?-u:\b)")),
        (Intent::Diagnosis, rule(r"(?i)(?-u:\b)(diagnos|test|check|exam|detect)(?-u:\b)")),
        (Intent::Treatment, rule(r"(?i)(?-u:\b)(treat|cure|heal|medicine|medication|drug)(?-u:\b)")),
        (Intent::Causes, rule(r"(?i)(?-u:\b)(cause|reason|why|what.*cause|due to)(?-u:\b)")),
        (Intent::Prevention, rule(r"(?i)(?-u:\b)(prevent|avoid|stop|precaution|protect)(?-u:\b)")),
        (Intent::General, rule(r"(?i)(?-u:\b)(what is|what are|explain|tell me about|define)(?-u:\b)")),
    ]
});

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("intent pattern is a valid regex")
}

/// Binary score of every rule against `text`, in rule order.
pub fn intent_scores(text: &str) -> Vec<(Intent, u8)> {
    INTENT_RULES
        .iter()
        .map(|(intent, pattern)| (*intent, u8::from(pattern.is_match(text))))
        .collect()
}

/// Pick the highest-scoring intent; the earliest rule wins ties.
pub fn classify_intent(text: &str) -> IntentResult {
    let mut best = (Intent::ALL[0], 0u8);
    for (intent, score) in intent_scores(text) {
        if score > best.1 { best = (intent, score); }
    }
    let (intent, score) = best;
    let confidence = if score == 0 { DEFAULT_CONFIDENCE } else { f64::from(score) };
    debug!(%intent, confidence, "classified query intent");
    IntentResult { intent, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn what_is_is_general() {
        let r = classify_intent("What is diabetes?");
        assert_eq!(r.intent, Intent::General);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn no_match_defaults_to_first_intent() {
        let r = classify_intent("qqq");
        assert_eq!(r.intent, Intent::Symptoms);
        assert_eq!(r.confidence, 0.5);
    }

    #[test]
    fn first_matching_rule_wins_ties() {
        // matches both treatment ("treat") and general ("what is")
        let r = classify_intent("what is the best way to treat asthma");
        assert_eq!(r.intent, Intent::Treatment);
        // matches causes ("why") and prevention ("prevent")
        assert_eq!(classify_intent("why and how to prevent flu").intent, Intent::Causes);
    }

    #[test]
    fn patterns_are_word_bounded() {
        // "symptoms" is not the word "symptom"
        assert_eq!(classify_intent("list the symptoms").confidence, 0.5);
        assert_eq!(classify_intent("is there a test for it").intent, Intent::Diagnosis);
        assert_eq!(classify_intent("What causes migraines").confidence, 0.5);
        assert_eq!(classify_intent("What is the cause of migraines").intent, Intent::Causes);
    }

    #[test]
    fn non_ascii_letters_are_boundaries() {
        assert_eq!(classify_intent("çtreat my cough").intent, Intent::Treatment);
        assert_eq!(classify_intent("avoidé").intent, Intent::Prevention);
    }

    #[test]
    fn scores_cover_every_intent_in_order() {
        let scores = intent_scores("how do I avoid getting sick");
        let order: Vec<Intent> = scores.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, Intent::ALL.to_vec());
        assert_eq!(scores.iter().map(|(_, s)| u32::from(*s)).sum::<u32>(), 1);
    }
}
