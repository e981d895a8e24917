//! Loading the medical dataset from its JSON file.
//!
//! The engine never performs I/O itself; the surrounding application loads
//! the collection once with [`load_dataset`] and hands it to the index.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Document;

/// Parse a JSON array of documents.
pub fn parse_dataset(json: &str) -> Result<Vec<Document>> {
    let documents: Vec<Document> =
        serde_json::from_str(json).map_err(|e| Error::Dataset(format!("invalid dataset JSON: {}", e)))?;
    debug!(documents = documents.len(), "parsed dataset");
    Ok(documents)
}

/// Read and parse the dataset at `path`.
pub async fn load_dataset(path: &Path) -> Result<Vec<Document>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Dataset(format!("{}: {}", path.display(), e)))?;
    let documents = parse_dataset(&raw)?;
    info!(path = %path.display(), documents = documents.len(), "loaded medical dataset");
    Ok(documents)
}
