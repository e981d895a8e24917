//! Query answering: ranking, extraction and classification feed a confidence
//! score, and a per-intent gate decides between a collection answer and the
//! fallback responder.

pub mod answer;
pub mod confidence;
pub mod fallback;
pub mod gate;

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use medibot_core::config::SearchMode;
use medibot_core::traits::{FallbackResponder, Ranker};
use medibot_core::types::{Document, EntitySet, IntentResult, ScoredMatch};
use medibot_nlp::{classify_intent, extract_entities};
use medibot_text::{KeywordRanker, TfIdfRanker};

pub use answer::Answer;
pub use fallback::{error_response, CannedFallback};

/// Ranker for `mode`, built over `documents`.
pub fn ranker_for(mode: SearchMode, documents: &[Document]) -> Box<dyn Ranker> {
    match mode {
        SearchMode::Tfidf => Box::new(TfIdfRanker::build(documents)),
        SearchMode::Keyword => Box::new(KeywordRanker),
    }
}

/// Everything the engine derives from one query before gating.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis<'a> {
    pub matches: Vec<ScoredMatch<'a>>,
    pub entities: EntitySet,
    pub intent: IntentResult,
}

impl Analysis<'_> {
    /// Blended confidence, with each similarity clamped into `[0, 1]` first
    /// since keyword scores are unbounded.
    pub fn confidence(&self) -> medibot_core::error::Result<f64> {
        let bounded: Vec<ScoredMatch<'_>> = self
            .matches
            .iter()
            .map(|m| ScoredMatch { similarity: m.similarity.clamp(0.0, 1.0), ..*m })
            .collect();
        confidence::score(&bounded, &self.entities, &self.intent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NoMatches,
    LowConfidence { confidence: f64, threshold: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Engine(Answer),
    Fallback { reason: FallbackReason, message: String },
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Engine(answer) => fmt::Display::fmt(answer, f),
            Response::Fallback { message, .. } => f.write_str(message),
        }
    }
}

pub struct Assistant<F = CannedFallback>
where
    F: FallbackResponder,
{
    documents: Vec<Document>,
    ranker: Box<dyn Ranker>,
    fallback: F,
    mode: SearchMode,
    top_k: usize,
}

impl Assistant<CannedFallback> {
    pub fn new(mode: SearchMode, top_k: usize) -> Self {
        Self::with_fallback(mode, top_k, CannedFallback)
    }
}

impl<F> Assistant<F>
where
    F: FallbackResponder,
{
    /// An assistant over an empty collection; every query falls back until [`Assistant::load`].
    pub fn with_fallback(mode: SearchMode, top_k: usize, fallback: F) -> Self {
        Self { documents: Vec::new(), ranker: ranker_for(mode, &[]), fallback, mode, top_k }
    }

    /// Replaces the collection and rebuilds the ranker over it.
    pub fn load(&mut self, documents: Vec<Document>) {
        let ranker = ranker_for(self.mode, &documents);
        info!(documents = documents.len(), mode = %self.mode, "collection loaded");
        self.ranker = ranker;
        self.documents = documents;
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn analyze(&self, query: &str) -> Analysis<'_> {
        Analysis {
            matches: self.ranker.rank(query, &self.documents, self.top_k),
            entities: extract_entities(query),
            intent: classify_intent(query),
        }
    }

    /// Answers `query`, or `None` when it is blank.
    pub fn respond(&self, query: &str) -> Result<Option<Response>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let analysis = self.analyze(query);
        debug!(
            matches = analysis.matches.len(),
            entities = analysis.entities.total(),
            intent = %analysis.intent.intent,
            "query analyzed"
        );
        if analysis.matches.is_empty() {
            return self.fall_back(query, FallbackReason::NoMatches).map(Some);
        }

        let confidence = analysis.confidence()?;
        let threshold = gate::threshold(analysis.intent.intent);
        if !gate::passes(confidence, analysis.intent.intent) {
            debug!(confidence, threshold, "low confidence, using fallback");
            return self.fall_back(query, FallbackReason::LowConfidence { confidence, threshold }).map(Some);
        }

        let answer = Answer::build(&analysis.matches, &analysis.entities, &analysis.intent, confidence)
            .ok_or_else(|| anyhow::anyhow!("no match to answer from"))?;
        Ok(Some(Response::Engine(answer)))
    }

    fn fall_back(&self, query: &str, reason: FallbackReason) -> Result<Response> {
        let message = self.fallback.respond(query)?;
        Ok(Response::Fallback { reason, message })
    }
}
