use std::{io, path::PathBuf};

use ptero_commonmark::ProcessorError;
use ptero_config::ConfigError;
use ptero_content::{ContentError, FrontmatterError};
use ptero_nav::NavError;
use ptero_search::SearchError;
use thiserror::Error;

/// Top-level error type for the ptero crate.
#[derive(Debug, Error)]
pub enum PteroError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Content(#[from] ContentError),

  #[error("Invalid frontmatter in {}: {source}", path.display())]
  Frontmatter {
    path:   PathBuf,
    #[source]
    source: FrontmatterError,
  },

  #[error(transparent)]
  Nav(#[from] NavError),

  #[error("Rendering error: {0}")]
  Render(#[from] ProcessorError),

  #[error(transparent)]
  Search(#[from] SearchError),

  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type PteroResult<T> = Result<T, PteroError>;
