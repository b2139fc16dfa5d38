use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for ptero-search operations
#[derive(Debug, Error)]
pub enum SearchError {
  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("Failed to access search index {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Invalid search index: {0}")]
  InvalidIndex(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
