use serde::Serialize;
use std::fmt;

use medibot_core::types::{EntitySet, Intent, IntentResult, ScoredMatch};

pub const ANSWER_DISCLAIMER: &str =
    "⚠️ This ML-powered response is for educational purposes only. Consult healthcare professionals for medical advice.";

/// Matches after the top one listed as alternatives for general questions.
pub const MAX_RELATED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Symptoms,
    Causes,
    Treatment,
    RelatedConditions,
}

impl SectionKind {
    fn heading(self) -> &'static str {
        match self {
            SectionKind::Symptoms => "🔍 Symptoms:",
            SectionKind::Causes => "🧬 Causes:",
            SectionKind::Treatment => "💊 Treatment:",
            SectionKind::RelatedConditions => "🔗 Other Possible Conditions:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Set when the section is the one the query asked for.
    pub priority: bool,
    pub items: Vec<String>,
}

/// An answer built from the best match of an accepted query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub confidence: f64,
    pub intent: Intent,
    pub similarity: f64,
    pub condition: String,
    pub sections: Vec<Section>,
    pub diagnosis: Option<String>,
    pub entities: Vec<String>,
    pub disclaimer: &'static str,
}

impl Answer {
    /// Returns `None` when there is no match to answer from.
    pub fn build(
        matches: &[ScoredMatch<'_>],
        entities: &EntitySet,
        intent: &IntentResult,
        confidence: f64,
    ) -> Option<Self> {
        let top = matches.first()?;
        let doc = top.document;

        let mut sections = Vec::new();
        let mut push = |kind, priority, items: &[String]| {
            if !items.is_empty() {
                sections.push(Section { kind, priority, items: items.to_vec() });
            }
        };
        match intent.intent {
            Intent::Symptoms => push(SectionKind::Symptoms, true, &doc.symptoms),
            Intent::Treatment => push(SectionKind::Treatment, true, &doc.treatment),
            Intent::Causes => push(SectionKind::Causes, true, &doc.causes),
            Intent::General => {
                push(SectionKind::Symptoms, false, &doc.symptoms);
                push(SectionKind::Causes, false, &doc.causes);
                push(SectionKind::Treatment, false, &doc.treatment);
                let related: Vec<String> = matches
                    .iter()
                    .skip(1)
                    .take(MAX_RELATED)
                    .map(|m| format!("{} ({}% match)", m.document.name, percent(m.similarity)))
                    .collect();
                push(SectionKind::RelatedConditions, false, &related);
            }
            Intent::Diagnosis | Intent::Prevention => {}
        }

        let diagnosis = if doc.diagnosis.is_empty() { None } else { Some(doc.diagnosis.clone()) };

        Some(Self {
            confidence,
            intent: intent.intent,
            similarity: top.similarity,
            condition: doc.name.clone(),
            sections,
            diagnosis,
            entities: entities.terms().into_iter().map(str::to_string).collect(),
            disclaimer: ANSWER_DISCLAIMER,
        })
    }
}

fn percent(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🧠 AI Analysis ({}% confidence)", percent(self.confidence))?;
        writeln!(f, "Intent: {} | Similarity: {}%", self.intent, percent(self.similarity))?;
        writeln!(f)?;
        writeln!(f, "📋 {}", self.condition)?;
        for section in &self.sections {
            writeln!(f, "{}", section.kind.heading())?;
            for item in &section.items {
                writeln!(f, "  - {}", item)?;
            }
        }
        if let Some(diagnosis) = &self.diagnosis {
            writeln!(f, "🏥 Diagnosis:")?;
            writeln!(f, "  {}", diagnosis)?;
        }
        if !self.entities.is_empty() {
            writeln!(f, "🏷️ Detected: {}", self.entities.join(", "))?;
        }
        write!(f, "{}", self.disclaimer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medibot_core::types::{Document, EntityCategory};

    fn doc(name: &str) -> Document {
        Document {
            name: name.to_string(),
            symptoms: vec!["Fever".into(), "Cough".into()],
            causes: vec!["Virus".into()],
            diagnosis: String::new(),
            treatment: vec!["Rest".into()],
        }
    }

    #[test]
    fn treatment_intent_shows_only_treatment() {
        let flu = doc("Influenza");
        let matches = [ScoredMatch { index: 0, document: &flu, similarity: 0.42 }];
        let intent = IntentResult { intent: Intent::Treatment, confidence: 1.0 };
        let answer = Answer::build(&matches, &EntitySet::new(), &intent, 0.61).unwrap();

        assert_eq!(answer.sections.len(), 1);
        assert_eq!(answer.sections[0].kind, SectionKind::Treatment);
        assert!(answer.sections[0].priority);
        assert_eq!(answer.diagnosis, None);

        let text = answer.to_string();
        assert!(text.starts_with("🧠 AI Analysis (61% confidence)"));
        assert!(text.contains("Similarity: 42%"));
        assert!(!text.contains("Symptoms:"));
        assert!(text.ends_with(ANSWER_DISCLAIMER));
    }

    #[test]
    fn general_intent_lists_everything_and_alternatives() {
        let (a, b, c, d) = (doc("Influenza"), doc("Common Cold"), doc("Pneumonia"), doc("Asthma"));
        let matches = [
            ScoredMatch { index: 0, document: &a, similarity: 0.5 },
            ScoredMatch { index: 1, document: &b, similarity: 0.335 },
            ScoredMatch { index: 2, document: &c, similarity: 0.2 },
            ScoredMatch { index: 3, document: &d, similarity: 0.15 },
        ];
        let mut entities = EntitySet::new();
        entities.insert(EntityCategory::Symptoms, "Fever");
        let intent = IntentResult { intent: Intent::General, confidence: 1.0 };
        let answer = Answer::build(&matches, &entities, &intent, 0.9).unwrap();

        let kinds: Vec<_> = answer.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Symptoms, SectionKind::Causes, SectionKind::Treatment, SectionKind::RelatedConditions]
        );
        assert_eq!(answer.sections[3].items, vec!["Common Cold (34% match)", "Pneumonia (20% match)"]);
        assert_eq!(answer.entities, vec!["fever"]);
        assert!(answer.to_string().contains("🏷️ Detected: fever"));
    }

    #[test]
    fn diagnosis_intent_has_no_list_sections() {
        let mut flu = doc("Influenza");
        flu.diagnosis = "Rapid influenza test".into();
        let matches = [ScoredMatch { index: 0, document: &flu, similarity: 0.3 }];
        let intent = IntentResult { intent: Intent::Diagnosis, confidence: 1.0 };
        let answer = Answer::build(&matches, &EntitySet::new(), &intent, 0.55).unwrap();
        assert!(answer.sections.is_empty());
        assert_eq!(answer.diagnosis.as_deref(), Some("Rapid influenza test"));
    }

    #[test]
    fn nothing_to_answer_from() {
        let intent = IntentResult { intent: Intent::General, confidence: 0.5 };
        assert!(Answer::build(&[], &EntitySet::new(), &intent, 0.5).is_none());
    }
}
