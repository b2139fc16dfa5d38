use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// A document with validated frontmatter and its raw body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedDocument {
  pub slug:        String,
  pub version:     String,
  pub filepath:    PathBuf,
  pub frontmatter: Frontmatter,

  /// Markdown body after the frontmatter block.
  pub content: String,
}

impl ParsedDocument {
  /// See [`Frontmatter::is_listed`].
  #[must_use]
  pub const fn is_listed(&self) -> bool {
    self.frontmatter.is_listed()
  }

  /// Public URL of the document.
  ///
  /// `{base_url}/{version}/{slug}`, with a trailing `/index` removed so the
  /// root page of a version lives at `{base_url}/{version}`.
  #[must_use]
  pub fn href(&self, base_url: &str) -> String {
    let href = format!("{base_url}/{}/{}", self.version, self.slug);
    match href.strip_suffix("/index") {
      Some(stripped) => stripped.to_string(),
      None => href,
    }
  }

  /// Project the navigation-relevant fields.
  #[must_use]
  pub fn metadata(&self, base_url: &str) -> DocMetadata {
    let fm = &self.frontmatter;
    DocMetadata {
      title:       fm.title.clone(),
      href:        self.href(base_url),
      section:     fm.section.clone(),
      subsection:  fm.subsection.clone(),
      order:       fm.order,
      sdks:        fm.sdks.clone(),
      scope:       fm.scope.clone(),
      description: fm.description.clone(),
    }
  }
}

/// What navigation needs to know about a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocMetadata {
  pub title: String,
  pub href:  String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub section: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subsection: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub order: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sdks: Option<Vec<String>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// A page a static host has to emit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PrerenderEntry {
  /// URL version segment (`latest` for the current version).
  pub version: String,
  pub slug:    String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn doc(version: &str, slug: &str) -> ParsedDocument {
    ParsedDocument {
      slug:        slug.to_string(),
      version:     version.to_string(),
      filepath:    PathBuf::from("doc.md"),
      frontmatter: Frontmatter {
        title: "T".to_string(),
        order: Some(3.0),
        ..Frontmatter::default()
      },
      content:     String::new(),
    }
  }

  #[test]
  fn test_href() {
    assert_eq!(doc("latest", "guides/setup").href("/docs"), "/docs/latest/guides/setup");
    assert_eq!(doc("v1.0", "api/core").href("/docs"), "/docs/v1.0/api/core");
    assert_eq!(doc("latest", "index").href("/docs"), "/docs/latest");
    assert_eq!(doc("latest", "guides").href(""), "/latest/guides");
  }

  #[test]
  fn test_metadata_projection() {
    let meta = doc("latest", "a").metadata("/docs");
    assert_eq!(meta.title, "T");
    assert_eq!(meta.href, "/docs/latest/a");
    assert_eq!(meta.order, Some(3.0));
    assert_eq!(meta.section, None);
  }
}
