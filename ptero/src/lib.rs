//! The ptero documentation pipeline.
//!
//! [`Site`] ties the stages together: it scans the content roots once, then
//! answers sidebar, page navigation, rendering and search questions from the
//! resulting document store.

pub mod cli;
pub mod error;

use std::{fs, path::Path};

pub use error::{PteroError, PteroResult};
use log::debug;
use ptero_commonmark::{
  MarkdownOptions,
  MarkdownProcessor,
  RenderedDocument,
  SyntaxManager,
  create_default_manager,
};
use ptero_config::{Config, ConfigError, LATEST};
use ptero_content::{
  DocumentStore,
  ParsedDocument,
  PrerenderEntry,
  parse_frontmatter,
};
use ptero_nav::{Breadcrumb, PrevNext, PrevNextResolver, Section, breadcrumbs, build_sidebar};
use ptero_search::{SearchIndex, build_index};
use serde::Serialize;

/// Everything the rendering layer needs for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
  pub document:    &'a ParsedDocument,
  pub prev_next:   PrevNext,
  pub breadcrumbs: Vec<Breadcrumb>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub edit_url: Option<String>,
}

/// A loaded documentation site.
#[derive(Debug)]
pub struct Site {
  config:   Config,
  store:    DocumentStore,
  syntax:   SyntaxManager,
  markdown: MarkdownOptions,
  resolver: PrevNextResolver,
}

impl Site {
  /// Scan the content roots under `root`.
  ///
  /// # Errors
  ///
  /// Returns an error if any document fails to load; no partial site is
  /// built.
  pub fn load(root: &Path, config: Config) -> PteroResult<Self> {
    let store = DocumentStore::scan(root, &config.content)?;
    Self::from_store(config, store)
  }

  /// Build a site over an already loaded store.
  ///
  /// # Errors
  ///
  /// Returns an error if the configured base URL cannot be matched against
  /// or the highlight theme is unknown.
  pub fn from_store(config: Config, store: DocumentStore) -> PteroResult<Self> {
    let resolver = PrevNextResolver::new(&config.site.base_url)?;
    let syntax = create_default_manager(config.highlight.theme.clone());
    if let Some(theme) = &config.highlight.theme
      && !syntax.highlighter().has_theme(theme)
    {
      return Err(PteroError::Config(ConfigError::Invalid(format!(
        "Unknown highlight theme '{theme}', expected one of: {}",
        syntax.highlighter().available_themes().join(", ")
      ))));
    }
    let markdown = MarkdownOptions {
      highlight_theme: config.highlight.theme.clone(),
      ..MarkdownOptions::default()
    };

    debug!(
      "Site ready with {} documents across versions {:?}",
      store.len(),
      store.versions()
    );

    Ok(Self {
      config,
      store,
      syntax,
      markdown,
      resolver,
    })
  }

  #[must_use]
  pub const fn config(&self) -> &Config {
    &self.config
  }

  #[must_use]
  pub const fn store(&self) -> &DocumentStore {
    &self.store
  }

  fn base_url(&self) -> &str {
    &self.config.site.base_url
  }

  /// Version id for a route parameter, `None` when the parameter is not a
  /// known version or alias.
  fn version_id<'a>(&'a self, param: Option<&'a str>) -> Option<&'a str> {
    let versions = &self.config.versions;
    match param {
      Some(param) if !versions.is_valid(param) => None,
      Some(param) => Some(versions.resolve_alias(param)),
      None => Some(versions.current.as_str()),
    }
  }

  /// Sidebar for a version route parameter (`None` means `versions.current`).
  ///
  /// An unknown version has an empty sidebar.
  #[must_use]
  pub fn sidebar(&self, version: Option<&str>) -> Vec<Section> {
    let Some(id) = self.version_id(version) else {
      debug!("Unknown version {version:?}, sidebar is empty");
      return Vec::new();
    };
    let metadata = self.store.metadata(id, self.base_url());
    build_sidebar(&metadata, &self.config.sidebar)
  }

  /// Resolve a page URL such as `/docs/latest/guides/setup`.
  ///
  /// Returns `None` for paths outside the base URL, unknown versions,
  /// unknown slugs and hidden or draft documents. A version without its own copy of a page falls back to
  /// the `latest` document.
  #[must_use]
  pub fn page(&self, path: &str) -> Option<PageView<'_>> {
    let path = path.trim_end_matches('/');
    let relative = path.strip_prefix(self.base_url())?;
    let mut segments = relative.split('/').filter(|s| !s.is_empty());
    let param = segments.next()?;
    let slug = segments.collect::<Vec<_>>().join("/");
    let slug = if slug.is_empty() { "index" } else { slug.as_str() };

    let id = self.version_id(Some(param))?;
    let document = self
      .store
      .get(id, slug)
      .filter(|doc| doc.is_listed())
      .or_else(|| self.store.get(LATEST, slug).filter(|doc| doc.is_listed()))?;

    let sections = self.sidebar(Some(param));
    let edit_url = document
      .frontmatter
      .edit_url
      .clone()
      .or_else(|| self.config.site.edit_url_for(&document.version, &document.slug));

    Some(PageView {
      document,
      prev_next: self.resolver.prev_next(&sections, path),
      breadcrumbs: breadcrumbs(path, self.base_url()),
      edit_url,
    })
  }

  /// Compile a document body to HTML with code components.
  ///
  /// # Errors
  ///
  /// Returns an error if highlighting or formatting fails.
  pub fn render(&self, document: &ParsedDocument) -> PteroResult<RenderedDocument> {
    self.render_markdown(&document.content)
  }

  /// Compile a markdown string that has no frontmatter.
  ///
  /// # Errors
  ///
  /// Returns an error if highlighting or formatting fails.
  pub fn render_markdown(&self, markdown: &str) -> PteroResult<RenderedDocument> {
    let processor = MarkdownProcessor::new(&self.markdown, &self.syntax);
    Ok(processor.render(markdown)?)
  }

  /// Compile a file from disk, skipping its frontmatter.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, its frontmatter is invalid
  /// or rendering fails.
  pub fn render_file(&self, path: &Path) -> PteroResult<RenderedDocument> {
    let raw = fs::read_to_string(path).map_err(|source| {
      PteroError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    let (_, body) = parse_frontmatter(&raw).map_err(|source| {
      PteroError::Frontmatter {
        path: path.to_path_buf(),
        source,
      }
    })?;
    self.render_markdown(body)
  }

  /// Search index over every listed document, with hrefs under `base_url`
  /// (the configured base when `None`).
  #[must_use]
  pub fn search_index(&self, base_url: Option<&str>) -> SearchIndex {
    build_index(
      self.store.documents(),
      base_url.unwrap_or_else(|| self.base_url()),
      &self.config.search,
    )
  }

  /// Every listed page, as `(version segment, slug)` pairs.
  #[must_use]
  pub fn prerender_entries(&self) -> Vec<PrerenderEntry> {
    self.store.prerender_entries(&self.config.versions)
  }
}
