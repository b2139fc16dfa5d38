//! Slug and version extraction from document paths.
//!
//! `…/src/content/docs/guides/setup.md` is `guides/setup` in `latest`;
//! `…/src/content/versioned_docs/v1.0/api/core.md` is `api/core` in `v1.0`.

use ptero_config::{ContentConfig, LATEST};
use regex::Regex;

use crate::error::ContentResult;

/// Where a document sits in the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocPath {
  pub slug:    String,
  pub version: String,
}

/// Maps file paths to `(slug, version)` for the configured content roots.
#[derive(Debug, Clone)]
pub struct PathResolver {
  docs_root:      Regex,
  versioned_root: Regex,
  extension:      Regex,
}

impl PathResolver {
  /// Build a resolver for the content roots in `config`.
  ///
  /// Roots match anywhere in a path, so absolute and project-relative paths
  /// resolve alike.
  ///
  /// # Errors
  ///
  /// Returns an error if the derived patterns fail to compile.
  pub fn new(config: &ContentConfig) -> ContentResult<Self> {
    let root_pattern = |root: &str| regex::escape(root.trim_matches('/'));

    let extensions = config
      .extensions
      .iter()
      .map(|ext| regex::escape(ext))
      .collect::<Vec<_>>()
      .join("|");

    Ok(Self {
      docs_root:      Regex::new(&format!(
        "^(?:.*/)?{}/",
        root_pattern(&config.docs_dir)
      ))?,
      versioned_root: Regex::new(&format!(
        "^(?:.*/)?{}/([^/]+)/",
        root_pattern(&config.versioned_dir)
      ))?,
      extension:      Regex::new(&format!(r"\.(?:{extensions})$"))?,
    })
  }

  /// Resolve both slug and version.
  #[must_use]
  pub fn resolve(&self, filepath: &str) -> DocPath {
    DocPath {
      slug:    self.slug(filepath),
      version: self.version(filepath),
    }
  }

  /// Slug of a document: root prefix, extension and a trailing `/index`
  /// removed. Never empty and never starts or ends with `/`.
  #[must_use]
  pub fn slug(&self, filepath: &str) -> String {
    let path = normalize_separators(filepath);

    let relative = if let Some(m) = self.versioned_root.find(&path) {
      &path[m.end()..]
    } else if let Some(m) = self.docs_root.find(&path) {
      &path[m.end()..]
    } else {
      &path
    };

    let stem = self.extension.replace(relative, "");
    let stem = stem.trim_matches('/');
    let stem = stem.strip_suffix("/index").unwrap_or(stem);

    if stem.is_empty() {
      "index".to_string()
    } else {
      stem.to_string()
    }
  }

  /// Version directory right after the versioned root, else `latest`.
  #[must_use]
  pub fn version(&self, filepath: &str) -> String {
    let path = normalize_separators(filepath);
    self
      .versioned_root
      .captures(&path)
      .and_then(|caps| caps.get(1))
      .map_or_else(|| LATEST.to_string(), |m| m.as_str().to_string())
  }
}

fn normalize_separators(path: &str) -> String {
  path.replace('\\', "/")
}
