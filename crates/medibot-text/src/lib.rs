//! medibot-text
//!
//! TF-IDF vector space over the medical dataset: text normalization, index
//! building and cosine-similarity ranking, plus the plain keyword ranker.

pub mod normalize;
pub mod index;
pub mod search;
pub mod keyword;

pub use index::{build, IdfTable, TermVector, VectorSpace};
pub use keyword::KeywordRanker;
pub use normalize::{normalize, stem_word};
pub use search::{cosine_similarity, rank, TfIdfRanker, RELEVANCE_FLOOR};
