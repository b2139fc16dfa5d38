use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a document's frontmatter was rejected.
#[derive(Debug, Error)]
pub enum FrontmatterError {
  #[error("frontmatter block opened with '---' is never closed")]
  Unclosed,

  #[error("malformed YAML in frontmatter: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("frontmatter validation failed: {0}")]
  Schema(String),
}

/// Error type for ptero-content operations
#[derive(Debug, Error)]
pub enum ContentError {
  #[error("{}: {source}", path.display())]
  Frontmatter {
    path:   PathBuf,
    #[source]
    source: FrontmatterError,
  },

  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to walk content directory: {0}")]
  Walk(#[from] walkdir::Error),

  #[error("Invalid content root pattern: {0}")]
  Pattern(#[from] regex::Error),
}

pub type ContentResult<T> = Result<T, ContentError>;
