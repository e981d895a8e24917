use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset load failed: {0}")]
    Dataset(String),

    #[error("Confidence requires at least one scored match")]
    EmptyMatches,
}

pub type Result<T> = std::result::Result<T, Error>;
