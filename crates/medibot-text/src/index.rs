use std::collections::{HashMap, HashSet};

use medibot_core::types::Document;
use tracing::debug;

use crate::normalize::normalize;

/// Token → weight. Keys are unique; weights are never negative.
pub type TermVector = HashMap<String, f64>;

/// Token → `ln(total_documents / document_frequency)`.
pub type IdfTable = HashMap<String, f64>;

/// Immutable TF-IDF snapshot of one document collection.
///
/// `vectors[i]` belongs to `documents[i]` of the collection passed to
/// [`VectorSpace::build`]. Reloading means building a new snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorSpace {
	idf: IdfTable,
	vectors: Vec<TermVector>,
}

impl VectorSpace {
	pub fn build(documents: &[Document]) -> Self {
		let token_lists: Vec<Vec<String>> = documents.iter().map(|d| normalize(&document_text(d))).collect();

		let mut doc_freq: HashMap<&str, usize> = HashMap::new();
		for tokens in &token_lists {
			let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
			for token in unique { *doc_freq.entry(token).or_insert(0) += 1; }
		}

		let total_docs = documents.len() as f64;
		let idf: IdfTable = doc_freq
			.into_iter()
			.map(|(token, df)| (token.to_string(), (total_docs / df as f64).ln()))
			.collect();

		let mut space = Self { idf, vectors: Vec::new() };
		let vectors = token_lists.iter().map(|tokens| space.weigh(tokens)).collect();
		space.vectors = vectors;
		debug!(documents = space.vectors.len(), vocabulary = space.idf.len(), "built tf-idf vector space");
		space
	}

	/// TF-IDF vector for `tokens` against this snapshot's IDF table.
	///
	/// Tokens the collection never contained get weight 0.
	pub fn weigh(&self, tokens: &[String]) -> TermVector {
		let mut term_freq: HashMap<&str, usize> = HashMap::new();
		for token in tokens { *term_freq.entry(token.as_str()).or_insert(0) += 1; }
		term_freq
			.into_iter()
			.map(|(token, tf)| {
				let idf = self.idf.get(token).copied().unwrap_or(0.0);
				(token.to_string(), tf as f64 * idf)
			})
			.collect()
	}

	pub fn idf(&self) -> &IdfTable { &self.idf }

	pub fn vectors(&self) -> &[TermVector] { &self.vectors }

	pub fn len(&self) -> usize { self.vectors.len() }

	pub fn is_empty(&self) -> bool { self.vectors.is_empty() }

	pub fn vocabulary_size(&self) -> usize { self.idf.len() }
}

/// Build the snapshot for `documents`.
pub fn build(documents: &[Document]) -> VectorSpace { VectorSpace::build(documents) }

/// Indexed text of a document: name, symptoms, causes, diagnosis, treatment.
pub fn document_text(doc: &Document) -> String {
	format!(
		"{} {} {} {} {}",
		doc.name,
		doc.symptoms.join(" "),
		doc.causes.join(" "),
		doc.diagnosis,
		doc.treatment.join(" ")
	)
}
