use serde::{Deserialize, Serialize};

/// A page link in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
  pub title: String,
  pub href:  String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sdks: Option<Vec<String>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,

  /// Sort key; pages without a nonzero order get [`DEFAULT_ORDER`].
  pub order: f64,
}

/// Order of pages that declare none.
pub const DEFAULT_ORDER: f64 = 999.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subsection {
  pub title: String,

  /// Raw subsection key from frontmatter.
  pub id: String,

  pub items: Vec<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
  pub title:       String,
  pub items:       Vec<Page>,
  pub subsections: Vec<Subsection>,
}

/// Neighbors of a page in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrevNext {
  pub prev: Option<Page>,
  pub next: Option<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breadcrumb {
  pub label: String,

  /// `None` on the last crumb (the current page).
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub href: Option<String>,
}
