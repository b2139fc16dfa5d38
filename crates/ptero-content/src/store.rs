//! The document store: every parsed document of one scan, keyed by
//! `(version, slug)`.

use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
};

use ptero_config::{ContentConfig, LATEST, VersionConfig};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::{
  document::{DocMetadata, ParsedDocument, PrerenderEntry},
  error::{ContentError, ContentResult},
  frontmatter::parse_frontmatter,
  path::PathResolver,
};

/// Parse one document.
///
/// # Errors
///
/// Returns [`ContentError::Frontmatter`] carrying `filepath` when the
/// frontmatter is rejected.
pub fn parse_document(
  resolver: &PathResolver,
  filepath: &Path,
  raw: &str,
) -> ContentResult<ParsedDocument> {
  let (frontmatter, body) =
    parse_frontmatter(raw).map_err(|source| ContentError::Frontmatter {
      path: filepath.to_path_buf(),
      source,
    })?;

  let location = resolver.resolve(&filepath.to_string_lossy());

  Ok(ParsedDocument {
    slug: location.slug,
    version: location.version,
    filepath: filepath.to_path_buf(),
    frontmatter,
    content: body.to_string(),
  })
}

/// All documents of a scan.
///
/// Built in one step and never patched: a rescan builds a new store.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
  documents: Vec<ParsedDocument>,
  index:     HashMap<(String, String), usize>,
}

impl DocumentStore {
  /// Build a store from `(path, raw text)` pairs.
  ///
  /// Parsing runs in parallel; documents keep input order. Fails with the
  /// first rejected document in input order, leaving no partial store. A
  /// second document with an existing `(version, slug)` is dropped with a
  /// warning.
  ///
  /// # Errors
  ///
  /// Returns the first [`ContentError::Frontmatter`] in input order.
  pub fn from_sources(
    resolver: &PathResolver,
    sources: &[(PathBuf, String)],
  ) -> ContentResult<Self> {
    let parsed: Vec<ContentResult<ParsedDocument>> = sources
      .par_iter()
      .map(|(path, raw)| parse_document(resolver, path, raw))
      .collect();

    let mut store = Self::default();
    for doc in parsed {
      store.insert(doc?);
    }

    log::debug!("Loaded {} documents", store.documents.len());
    Ok(store)
  }

  /// Scan the content roots under `root` and build a store.
  ///
  /// Missing roots are skipped. Files are visited in sorted order.
  ///
  /// # Errors
  ///
  /// Returns an error if a directory cannot be walked, a file cannot be read
  /// or a document is rejected.
  pub fn scan(root: &Path, config: &ContentConfig) -> ContentResult<Self> {
    let resolver = PathResolver::new(config)?;

    let mut paths = Vec::new();
    for dir in [&config.docs_dir, &config.versioned_dir] {
      let dir = root.join(dir);
      if !dir.is_dir() {
        log::debug!("Content root {} does not exist, skipping", dir.display());
        continue;
      }
      paths.extend(collect_documents(&dir, config)?);
    }

    let sources = paths
      .into_par_iter()
      .map(|path| {
        match fs::read_to_string(&path) {
          Ok(raw) => Ok((path, raw)),
          Err(source) => Err(ContentError::Io { path, source }),
        }
      })
      .collect::<Vec<_>>()
      .into_iter()
      .collect::<ContentResult<Vec<_>>>()?;

    Self::from_sources(&resolver, &sources)
  }

  fn insert(&mut self, doc: ParsedDocument) {
    let key = (doc.version.clone(), doc.slug.clone());
    if let Some(&existing) = self.index.get(&key) {
      log::warn!(
        "Duplicate document '{}' in version '{}': keeping {}, ignoring {}",
        doc.slug,
        doc.version,
        self.documents[existing].filepath.display(),
        doc.filepath.display()
      );
      return;
    }
    self.index.insert(key, self.documents.len());
    self.documents.push(doc);
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.documents.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.documents.is_empty()
  }

  /// Every document, hidden and draft included, in scan order.
  #[must_use]
  pub fn documents(&self) -> &[ParsedDocument] {
    &self.documents
  }

  /// Look up a document by version and slug, hidden or not.
  #[must_use]
  pub fn get(&self, version: &str, slug: &str) -> Option<&ParsedDocument> {
    self
      .index
      .get(&(version.to_string(), slug.to_string()))
      .map(|&i| &self.documents[i])
  }

  /// Listed documents of one version.
  pub fn listed(&self, version: &str) -> impl Iterator<Item = &ParsedDocument> {
    self
      .documents
      .iter()
      .filter(move |doc| doc.version == version && doc.is_listed())
  }

  /// Listed documents for a resolved version id. A version with no documents
  /// of its own falls back to `latest`.
  #[must_use]
  pub fn docs_for_version(&self, version: &str) -> Vec<&ParsedDocument> {
    let docs: Vec<_> = self.listed(version).collect();
    if docs.is_empty() && version != LATEST {
      log::debug!("No documents for version '{version}', using {LATEST}");
      return self.listed(LATEST).collect();
    }
    docs
  }

  /// Navigation metadata for [`Self::docs_for_version`].
  #[must_use]
  pub fn metadata(&self, version: &str, base_url: &str) -> Vec<DocMetadata> {
    self
      .docs_for_version(version)
      .into_iter()
      .map(|doc| doc.metadata(base_url))
      .collect()
  }

  /// Distinct document versions in order of first appearance.
  #[must_use]
  pub fn versions(&self) -> Vec<&str> {
    let mut versions: Vec<&str> = Vec::new();
    for doc in &self.documents {
      if !versions.contains(&doc.version.as_str()) {
        versions.push(&doc.version);
      }
    }
    versions
  }

  /// Pages to prerender: every listed document, grouped by version in order
  /// of first appearance.
  #[must_use]
  pub fn prerender_entries(&self, versions: &VersionConfig) -> Vec<PrerenderEntry> {
    self
      .versions()
      .into_iter()
      .flat_map(|version| {
        self.listed(version).map(|doc| {
          PrerenderEntry {
            version: versions.canonical_param(&doc.version).to_string(),
            slug:    doc.slug.clone(),
          }
        })
      })
      .collect()
  }
}

fn collect_documents(dir: &Path, config: &ContentConfig) -> ContentResult<Vec<PathBuf>> {
  let mut paths = Vec::new();
  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry = entry?;
    if !entry.file_type().is_file() {
      continue;
    }
    let is_document = entry
      .path()
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| config.is_document_extension(ext));
    if is_document {
      paths.push(entry.into_path());
    }
  }
  Ok(paths)
}
