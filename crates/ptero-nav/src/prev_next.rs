//! Previous/next links in sidebar reading order.

use std::borrow::Cow;

use regex::Regex;

use crate::{
  error::NavError,
  types::{Page, PrevNext, Section},
};

/// Version segment a path points at.
const LATEST_SEGMENT: &str = "latest";

/// Sidebar pages in reading order: each section's own pages, then each of
/// its subsections' pages.
#[must_use]
pub fn flatten(sections: &[Section]) -> Vec<&Page> {
  let mut pages = Vec::new();
  for section in sections {
    pages.extend(section.items.iter());
    for subsection in &section.subsections {
      pages.extend(subsection.items.iter());
    }
  }
  pages
}

/// Matches pages to request paths regardless of the version segment that
/// follows the docs base (`latest`, `next` or `v1.2`).
#[derive(Debug, Clone)]
pub struct PrevNextResolver {
  base_url: String,
  version:  Regex,
}

impl PrevNextResolver {
  /// # Errors
  ///
  /// Returns an error if the pattern derived from `base_url` does not compile.
  pub fn new(base_url: &str) -> Result<Self, NavError> {
    let pattern = format!(r"^{}/(latest|next|v[\d.]+)(?:/|$)", regex::escape(base_url));
    let version = Regex::new(&pattern).map_err(|source| {
      NavError::Pattern {
        base_url: base_url.to_string(),
        source,
      }
    })?;
    Ok(Self {
      base_url: base_url.to_string(),
      version,
    })
  }

  /// Version segment of `path`, if it has one.
  #[must_use]
  pub fn version_of<'p>(&self, path: &'p str) -> Option<&'p str> {
    self
      .version
      .captures(path)
      .and_then(|caps| caps.get(1))
      .map(|m| m.as_str())
  }

  /// `path` with its version segment removed, for comparison.
  fn normalize<'p>(&self, path: &'p str) -> Cow<'p, str> {
    let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    let replacement = format!("{}/", self.base_url);
    self.version.replace(trimmed, regex::NoExpand(&replacement))
  }

  /// Point `href` at `version` when it sits under `latest`.
  fn relink(&self, href: &str, version: &str) -> String {
    match self.version_of(href) {
      Some(LATEST_SEGMENT) if version != LATEST_SEGMENT => {
        let prefix = format!("{}/{LATEST_SEGMENT}", self.base_url);
        let rest = href.get(prefix.len()..).unwrap_or_default();
        format!("{}/{version}{rest}", self.base_url)
      },
      _ => href.to_string(),
    }
  }

  /// Neighbors of `current_path` in reading order.
  ///
  /// Neighbor links are re-pointed at the version in `current_path`. An
  /// unknown path has no neighbors.
  #[must_use]
  pub fn prev_next(&self, sections: &[Section], current_path: &str) -> PrevNext {
    let pages = flatten(sections);
    let target = self.normalize(current_path);

    let Some(index) = pages
      .iter()
      .position(|page| self.normalize(&page.href) == target)
    else {
      log::debug!("No sidebar page matches {current_path}");
      return PrevNext::default();
    };

    let request_version = self.version_of(current_path);
    let link = |page: &Page| {
      let mut page = page.clone();
      if let Some(version) = request_version {
        page.href = self.relink(&page.href, version);
      }
      page
    };

    PrevNext {
      prev: index.checked_sub(1).and_then(|i| pages.get(i)).map(|page| link(page)),
      next: pages.get(index + 1).map(|page| link(page)),
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  fn resolver() -> PrevNextResolver {
    PrevNextResolver::new("/docs").expect("valid base")
  }

  #[test]
  fn test_version_of() {
    let r = resolver();
    assert_eq!(r.version_of("/docs/latest/a"), Some("latest"));
    assert_eq!(r.version_of("/docs/v1.2/a/b"), Some("v1.2"));
    assert_eq!(r.version_of("/docs/next"), Some("next"));
    assert_eq!(r.version_of("/docs/guides/a"), None);
    assert_eq!(r.version_of("/other/latest/a"), None);
  }

  #[test]
  fn test_normalize() {
    let r = resolver();
    assert_eq!(r.normalize("/docs/latest/a/b"), "/docs/a/b");
    assert_eq!(r.normalize("/docs/v2/a/"), "/docs/a");
    assert_eq!(r.normalize("/docs/latest"), "/docs/");
    assert_eq!(r.normalize("/docs/guides"), "/docs/guides");
  }

  #[test]
  fn test_relink() {
    let r = resolver();
    assert_eq!(r.relink("/docs/latest/a", "v1.0"), "/docs/v1.0/a");
    assert_eq!(r.relink("/docs/latest", "next"), "/docs/next");
    assert_eq!(r.relink("/docs/latest/a", "latest"), "/docs/latest/a");
    assert_eq!(r.relink("/docs/v2/a", "v1.0"), "/docs/v2/a");
  }
}
