use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
  pub title: String,

  pub description: Option<String>,

  /// Public origin of the site, e.g. `https://docs.example.com`.
  pub url: Option<String>,

  /// Path prefix every document href starts with.
  #[serde(alias = "baseUrl")]
  pub base_url: String,

  /// Edit link template. `{version}` and `{slug}` are substituted.
  #[serde(alias = "editUrl")]
  pub edit_url: Option<String>,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      title:       "Documentation".to_string(),
      description: None,
      url:         None,
      base_url:    "/docs".to_string(),
      edit_url:    None,
    }
  }
}

impl SiteConfig {
  /// Expand [`Self::edit_url`] for a document.
  #[must_use]
  pub fn edit_url_for(&self, version: &str, slug: &str) -> Option<String> {
    self
      .edit_url
      .as_ref()
      .map(|template| template.replace("{version}", version).replace("{slug}", slug))
  }

  /// Normalize `base_url` to a leading slash and no trailing slash. The site
  /// root becomes the empty string.
  pub(crate) fn normalize_base_url(&mut self) {
    let trimmed = self.base_url.trim().trim_matches('/');
    self.base_url = if trimmed.is_empty() {
      String::new()
    } else {
      format!("/{trimmed}")
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_base_url() {
    let mut site = SiteConfig {
      base_url: "docs/".to_string(),
      ..SiteConfig::default()
    };
    site.normalize_base_url();
    assert_eq!(site.base_url, "/docs");

    site.base_url = "/".to_string();
    site.normalize_base_url();
    assert_eq!(site.base_url, "");
  }

  #[test]
  fn test_edit_url_for() {
    let site = SiteConfig {
      edit_url: Some(
        "https://github.com/acme/docs/edit/main/{version}/{slug}.md".to_string(),
      ),
      ..SiteConfig::default()
    };
    assert_eq!(
      site.edit_url_for("v2", "guides/setup").as_deref(),
      Some("https://github.com/acme/docs/edit/main/v2/guides/setup.md")
    );
    assert_eq!(SiteConfig::default().edit_url_for("latest", "x"), None);
  }
}
