use medibot_core::traits::Ranker;
use medibot_core::types::{Document, ScoredMatch};
use tracing::debug;

const NAME_BONUS: f64 = 2.0;
const SYMPTOM_BONUS: f64 = 1.5;

/// Substring keyword scoring over name, symptoms, causes and diagnosis.
///
/// Each query word longer than two characters found anywhere in that text
/// scores 1, plus a bonus when it also appears in the name or a symptom.
/// Scores are unbounded; only documents scoring above 0 are returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRanker;

impl KeywordRanker {
	pub fn score(document: &Document, keywords: &[String]) -> f64 {
		let search_text = format!(
			"{} {} {} {}",
			document.name,
			document.symptoms.join(" "),
			document.causes.join(" "),
			document.diagnosis
		)
		.to_lowercase();
		let name = document.name.to_lowercase();
		let symptoms: Vec<String> = document.symptoms.iter().map(|s| s.to_lowercase()).collect();

		let mut score = 0.0;
		for keyword in keywords {
			if !search_text.contains(keyword.as_str()) { continue; }
			score += 1.0;
			if name.contains(keyword.as_str()) { score += NAME_BONUS; }
			if symptoms.iter().any(|s| s.contains(keyword.as_str())) { score += SYMPTOM_BONUS; }
		}
		score
	}

	pub fn keywords(query: &str) -> Vec<String> {
		query
			.to_lowercase()
			.split_whitespace()
			.filter(|w| w.chars().count() > 2)
			.map(str::to_string)
			.collect()
	}
}

impl Ranker for KeywordRanker {
	fn rank<'a>(&self, query: &str, documents: &'a [Document], k: usize) -> Vec<ScoredMatch<'a>> {
		let keywords = Self::keywords(query);
		let mut matches: Vec<ScoredMatch<'a>> = documents
			.iter()
			.enumerate()
			.map(|(index, document)| ScoredMatch { index, document, similarity: Self::score(document, &keywords) })
			.filter(|m| m.similarity > 0.0)
			.collect();
		matches.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
		matches.truncate(k);
		debug!(keywords = keywords.len(), hits = matches.len(), "keyword rank");
		matches
	}
}
