use thiserror::Error;

/// Error type for ptero-config operations
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Invalid configuration:\n{0}")]
  Invalid(String),
}
