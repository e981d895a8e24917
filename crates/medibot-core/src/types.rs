//! Domain types shared by the ranking, extraction and scoring crates.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One record of the medical dataset.
///
/// - `name`: condition name (`disease_name` in the dataset JSON)
/// - `symptoms`/`causes`/`treatment`: ordered free-text lists
/// - `diagnosis`: free-text description of how the condition is diagnosed
///
/// Missing lists load as empty, a missing diagnosis as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "disease_name")]
    pub name: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub treatment: Vec<String>,
}

/// A document that survived ranking, with its position in the collection.
///
/// `similarity` is higher-is-better. The TF-IDF ranker keeps it in `[0, 1]`;
/// the keyword ranker reports raw keyword scores.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredMatch<'a> {
    pub index: usize,
    pub document: &'a Document,
    pub similarity: f64,
}

/// Fixed entity vocabularies, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Symptoms,
    BodyParts,
    Conditions,
    Medications,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 4] = [
        EntityCategory::Symptoms,
        EntityCategory::BodyParts,
        EntityCategory::Conditions,
        EntityCategory::Medications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityCategory::Symptoms => "symptoms",
            EntityCategory::BodyParts => "body_parts",
            EntityCategory::Conditions => "conditions",
            EntityCategory::Medications => "medications",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct lowercase matches per category. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySet {
    categories: BTreeMap<EntityCategory, BTreeSet<String>>,
}

impl Default for EntitySet {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitySet {
    pub fn new() -> Self {
        let categories = EntityCategory::ALL
            .iter()
            .map(|c| (*c, BTreeSet::new()))
            .collect();
        Self { categories }
    }

    /// Adds a match; the term is lowercased. Returns false for duplicates.
    pub fn insert(&mut self, category: EntityCategory, term: &str) -> bool {
        self.categories
            .entry(category)
            .or_default()
            .insert(term.to_lowercase())
    }

    pub fn get(&self, category: EntityCategory) -> &BTreeSet<String> {
        // `new` seeds every category, and nothing removes one.
        &self.categories[&category]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &BTreeSet<String>)> {
        self.categories.iter().map(|(c, terms)| (*c, terms))
    }

    /// Number of matched strings summed over all categories.
    ///
    /// A term listed under two categories counts twice.
    pub fn total(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All matches flattened in category order.
    pub fn terms(&self) -> Vec<&str> {
        self.categories
            .values()
            .flat_map(|terms| terms.iter().map(String::as_str))
            .collect()
    }
}

/// Closed set of query intents, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Symptoms,
    Diagnosis,
    Treatment,
    Causes,
    Prevention,
    General,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Symptoms,
        Intent::Diagnosis,
        Intent::Treatment,
        Intent::Causes,
        Intent::Prevention,
        Intent::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Symptoms => "symptoms",
            Intent::Diagnosis => "diagnosis",
            Intent::Treatment => "treatment",
            Intent::Causes => "causes",
            Intent::Prevention => "prevention",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntentResult {
    pub intent: Intent,
    pub confidence: f64,
}
