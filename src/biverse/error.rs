use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiverseError {
    #[error("Could not load verses: {0}")]
    DataLoad(String),

    #[error("Search term cannot be empty")]
    EmptyQuery,

    #[error("{0}")]
    NoMatch(String),

    #[error("Verse data not loaded yet.")]
    EmptyCollection,

    #[error("Storage error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BiverseError>;
