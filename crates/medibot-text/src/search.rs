use std::collections::BTreeSet;

use medibot_core::traits::Ranker;
use medibot_core::types::{Document, ScoredMatch};
use tracing::debug;

use crate::index::{TermVector, VectorSpace};
use crate::normalize::normalize;

/// Matches at or below this similarity are dropped.
pub const RELEVANCE_FLOOR: f64 = 0.1;

/// Cosine similarity of two term vectors, 0 when either has zero magnitude.
///
/// Terms are visited in sorted order so the result does not depend on
/// argument order.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
	let terms: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();
	let (mut dot, mut a_sq, mut b_sq) = (0.0f64, 0.0f64, 0.0f64);
	for term in terms {
		let x = a.get(term).copied().unwrap_or(0.0);
		let y = b.get(term).copied().unwrap_or(0.0);
		dot += x * y;
		a_sq += x * x;
		b_sq += y * y;
	}
	let (a_mag, b_mag) = (a_sq.sqrt(), b_sq.sqrt());
	if a_mag == 0.0 || b_mag == 0.0 { return 0.0; }
	(dot / (a_mag * b_mag)).clamp(0.0, 1.0)
}

/// Rank `documents` against `query` using the snapshot built from them.
///
/// Returns at most `top_k` matches above [`RELEVANCE_FLOOR`], best first;
/// equal similarities keep collection order.
pub fn rank<'a>(space: &VectorSpace, query: &str, documents: &'a [Document], top_k: usize) -> Vec<ScoredMatch<'a>> {
	let tokens = normalize(query);
	let query_vector = space.weigh(&tokens);
	let mut matches: Vec<ScoredMatch<'a>> = documents
		.iter()
		.zip(space.vectors())
		.enumerate()
		.map(|(index, (document, vector))| ScoredMatch { index, document, similarity: cosine_similarity(&query_vector, vector) })
		.filter(|m| m.similarity > RELEVANCE_FLOOR)
		.collect();
	matches.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
	matches.truncate(top_k);
	debug!(query_tokens = tokens.len(), hits = matches.len(), "tf-idf rank");
	matches
}

/// [`Ranker`] over a published [`VectorSpace`] snapshot.
#[derive(Debug, Clone, Default)]
pub struct TfIdfRanker {
	space: VectorSpace,
}

impl TfIdfRanker {
	pub fn new(space: VectorSpace) -> Self { Self { space } }

	pub fn build(documents: &[Document]) -> Self { Self::new(VectorSpace::build(documents)) }

	pub fn space(&self) -> &VectorSpace { &self.space }
}

impl Ranker for TfIdfRanker {
	fn rank<'a>(&self, query: &str, documents: &'a [Document], k: usize) -> Vec<ScoredMatch<'a>> {
		rank(&self.space, query, documents, k)
	}
}
