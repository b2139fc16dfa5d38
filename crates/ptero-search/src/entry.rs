//! Search entries: the per-document records the index is built over.

use ptero_commonmark::strip_markdown;
use ptero_content::ParsedDocument;
use serde::{Deserialize, Serialize};

/// Appended to content cut at the length limit.
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEntry {
  /// `version:slug`
  pub id: String,

  pub title: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Plain text of the body, possibly truncated.
  pub content: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub section: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subsection: Option<String>,

  pub version:  String,
  pub href:     String,
  pub keywords: Vec<String>,
}

/// A searchable field of an entry.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
  Text(&'a str),
  List(&'a [String]),
}

impl SearchEntry {
  /// Value of the field called `name`, if the entry has one.
  #[must_use]
  pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
    match name {
      "title" => Some(FieldValue::Text(&self.title)),
      "description" => self.description.as_deref().map(FieldValue::Text),
      "content" => Some(FieldValue::Text(&self.content)),
      "keywords" => Some(FieldValue::List(&self.keywords)),
      "section" => self.section.as_deref().map(FieldValue::Text),
      "subsection" => self.subsection.as_deref().map(FieldValue::Text),
      _ => None,
    }
  }
}

/// Build the search entry for a document.
///
/// Body text is reduced to plain text and cut to `max_content_length`
/// characters, with `...` appended when cut.
#[must_use]
pub fn build_entry(
  doc: &ParsedDocument,
  base_url: &str,
  max_content_length: usize,
) -> SearchEntry {
  let fm = &doc.frontmatter;
  SearchEntry {
    id:          format!("{}:{}", doc.version, doc.slug),
    title:       fm.title.clone(),
    description: fm.description.clone(),
    content:     truncate(&strip_markdown(&doc.content), max_content_length),
    section:     fm.section.clone(),
    subsection:  fm.subsection.clone(),
    version:     doc.version.clone(),
    href:        doc.href(base_url),
    keywords:    Vec::new(),
  }
}

fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    None => text.to_string(),
  }
}
