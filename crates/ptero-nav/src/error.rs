use thiserror::Error;

/// Error type for ptero-nav operations
#[derive(Debug, Error)]
pub enum NavError {
  #[error("Invalid navigation pattern for base URL '{base_url}': {source}")]
  Pattern {
    base_url: String,
    #[source]
    source:   regex::Error,
  },
}
