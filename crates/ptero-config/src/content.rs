use serde::{Deserialize, Serialize};

/// Where documents live, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
  /// Root of unversioned (`latest`) documents.
  #[serde(alias = "docsDir")]
  pub docs_dir: String,

  /// Root holding one directory per archived version.
  #[serde(alias = "versionedDir")]
  pub versioned_dir: String,

  /// File extensions treated as documents, without the dot.
  pub extensions: Vec<String>,
}

impl Default for ContentConfig {
  fn default() -> Self {
    Self {
      docs_dir:      "src/content/docs".to_string(),
      versioned_dir: "src/content/versioned_docs".to_string(),
      extensions:    vec!["md".to_string(), "mdx".to_string(), "svx".to_string()],
    }
  }
}

impl ContentConfig {
  /// Whether `extension` (without the dot) names a document.
  #[must_use]
  pub fn is_document_extension(&self, extension: &str) -> bool {
    self
      .extensions
      .iter()
      .any(|ext| ext.eq_ignore_ascii_case(extension))
  }
}

/// Syntax highlighting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
  /// Theme name; unset uses the highlighter's default.
  pub theme: Option<String>,
}
