//! The weighted search index.
//!
//! Entries are stored next to a Fuse-compatible index payload: the configured
//! keys plus one record per entry holding every indexed field value and its
//! length norm. Reloading the JSON is enough to search again; documents are
//! not needed.

use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use ptero_config::SearchConfig;
use ptero_content::ParsedDocument;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
  bitap::{BitapSearcher, MatchOptions},
  entry::{FieldValue, SearchEntry, build_entry},
  error::{SearchError, SearchResult},
};

/// Where a key came from in configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeySource {
  pub name:   String,
  pub weight: f64,
}

/// An indexed field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexKey {
  pub path:   Vec<String>,
  pub id:     String,
  pub weight: f64,
  pub src:    KeySource,
}

impl IndexKey {
  fn new(name: &str, weight: f64) -> Self {
    Self {
      path:   vec![name.to_string()],
      id:     name.to_string(),
      weight,
      src:    KeySource {
        name: name.to_string(),
        weight,
      },
    }
  }

  fn name(&self) -> &str {
    self.path.first().map_or(self.id.as_str(), String::as_str)
  }
}

/// A text field value with its length norm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldRecord {
  pub v: String,
  pub n: f64,
}

/// One item of a list field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListItemRecord {
  pub v: String,
  pub i: usize,
  pub n: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecordValue {
  Text(FieldRecord),
  List(Vec<ListItemRecord>),
}

/// Indexed values of one entry, keyed by position in [`FuseIndex::keys`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexRecord {
  /// Position of the entry in [`SearchIndex::entries`].
  pub i: usize,

  #[serde(rename = "$")]
  pub fields: BTreeMap<usize, RecordValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FuseIndex {
  pub keys:    Vec<IndexKey>,
  pub records: Vec<IndexRecord>,
}

/// A matched field of a hit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchMatch {
  pub key:     String,
  pub value:   String,
  pub indices: Vec<(usize, usize)>,

  /// Item position for list fields.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ref_index: Option<usize>,
}

/// A ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
  pub entry:     &'a SearchEntry,
  pub ref_index: usize,

  /// 0 is a perfect match, 1 no match at all.
  pub score:   f64,
  pub matches: Vec<SearchMatch>,
}

/// Searchable entries plus their index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchIndex {
  pub entries: Vec<SearchEntry>,

  #[serde(rename = "fuseIndex")]
  pub fuse_index: FuseIndex,
}

/// Length norm of a field value: `1 / sqrt(tokens)`, rounded to three
/// decimals. Tokens are separated by spaces.
#[must_use]
pub fn field_norm(value: &str) -> f64 {
  let tokens = value.split(' ').filter(|token| !token.is_empty()).count();

  #[allow(clippy::cast_precision_loss, reason = "Token counts are small")]
  let norm = 1.0 / (tokens.max(1) as f64).sqrt();
  (norm * 1000.0).round() / 1000.0
}

fn index_entry(
  ref_index: usize,
  entry: &SearchEntry,
  keys: &[IndexKey],
) -> IndexRecord {
  let mut fields = BTreeMap::new();

  for (key_index, key) in keys.iter().enumerate() {
    match entry.field(key.name()) {
      Some(FieldValue::Text(text)) if !text.trim().is_empty() => {
        fields.insert(
          key_index,
          RecordValue::Text(FieldRecord {
            v: text.to_string(),
            n: field_norm(text),
          }),
        );
      },
      Some(FieldValue::List(items)) => {
        let items = items
          .iter()
          .enumerate()
          .filter(|(_, item)| !item.trim().is_empty())
          .map(|(i, item)| {
            ListItemRecord {
              v: item.clone(),
              i,
              n: field_norm(item),
            }
          })
          .collect();
        fields.insert(key_index, RecordValue::List(items));
      },
      _ => {},
    }
  }

  IndexRecord {
    i: ref_index,
    fields,
  }
}

/// Build the search index for every listed document.
///
/// Hidden and draft documents are left out. Entries keep the order of
/// `docs`.
#[must_use]
pub fn build_index(
  docs: &[ParsedDocument],
  base_url: &str,
  config: &SearchConfig,
) -> SearchIndex {
  let entries: Vec<SearchEntry> = docs
    .par_iter()
    .filter(|doc| doc.is_listed())
    .map(|doc| build_entry(doc, base_url, config.max_content_length))
    .collect();

  debug!(
    "Indexed {} of {} documents for search",
    entries.len(),
    docs.len()
  );

  SearchIndex::new(entries, config)
}

impl SearchIndex {
  /// Index `entries` over the keys in `config`.
  #[must_use]
  pub fn new(entries: Vec<SearchEntry>, config: &SearchConfig) -> Self {
    let keys: Vec<IndexKey> = config
      .keys
      .iter()
      .map(|key| IndexKey::new(&key.name, key.weight))
      .collect();

    let records = entries
      .par_iter()
      .enumerate()
      .map(|(i, entry)| index_entry(i, entry, &keys))
      .collect();

    Self {
      entries,
      fuse_index: FuseIndex { keys, records },
    }
  }

  #[must_use]
  pub const fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Rank entries against `query`.
  ///
  /// Each matching field contributes `score ^ (weight * norm)` to a product,
  /// with key weights normalized to sum to 1. Results are ordered by score,
  /// then by entry position, and cut to `config.limit`. A blank query
  /// returns nothing.
  #[must_use]
  pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<SearchHit<'_>> {
    if query.trim().is_empty() {
      return Vec::new();
    }

    let searcher = BitapSearcher::new(query, MatchOptions::from(config));
    let total_weight: f64 =
      self.fuse_index.keys.iter().map(|key| key.weight).sum();
    let total_weight = if total_weight > 0.0 { total_weight } else { 1.0 };

    let mut hits: Vec<SearchHit<'_>> = self
      .fuse_index
      .records
      .par_iter()
      .filter_map(|record| {
        let entry = self.entries.get(record.i)?;
        self.score_record(record, entry, &searcher, total_weight)
      })
      .collect();

    hits.sort_by(|a, b| {
      a.score
        .total_cmp(&b.score)
        .then(a.ref_index.cmp(&b.ref_index))
    });
    if let Some(limit) = config.limit {
      hits.truncate(limit);
    }
    hits
  }

  fn score_record<'a>(
    &self,
    record: &IndexRecord,
    entry: &'a SearchEntry,
    searcher: &BitapSearcher,
    total_weight: f64,
  ) -> Option<SearchHit<'a>> {
    let mut score = 1.0;
    let mut matches = Vec::new();

    for (key_index, value) in &record.fields {
      let Some(key) = self.fuse_index.keys.get(*key_index) else {
        continue;
      };
      let weight = key.weight / total_weight;
      let mut check = |text: &str, norm: f64, ref_index: Option<usize>| {
        let result = searcher.search_in(text);
        if result.is_match {
          let base = if result.score > 0.0 {
            result.score
          } else {
            f64::EPSILON
          };
          score *= base.powf(weight * norm);
          matches.push(SearchMatch {
            key: key.name().to_string(),
            value: text.to_string(),
            indices: result.indices,
            ref_index,
          });
        }
      };

      match value {
        RecordValue::Text(field) => check(&field.v, field.n, None),
        RecordValue::List(items) => {
          for item in items {
            check(&item.v, item.n, Some(item.i));
          }
        },
      }
    }

    (!matches.is_empty()).then_some(SearchHit {
      entry,
      ref_index: record.i,
      score,
      matches,
    })
  }

  /// Serialize to the `{ entries, fuseIndex }` JSON document.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_json(&self) -> SearchResult<String> {
    Ok(serde_json::to_string(self)?)
  }

  /// Load an index serialized with [`SearchIndex::to_json`].
  ///
  /// # Errors
  ///
  /// Returns an error if the JSON is malformed or a record points at an entry
  /// or key that does not exist.
  pub fn from_json(json: &str) -> SearchResult<Self> {
    let index: Self = serde_json::from_str(json)?;
    index.check()?;
    Ok(index)
  }

  /// Write the index as JSON to `path`.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization or the write fails.
  pub fn write_to(&self, path: &Path) -> SearchResult<()> {
    let json = self.to_json()?;
    fs::write(path, json).map_err(|source| {
      SearchError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    debug!("Wrote search index to {}", path.display());
    Ok(())
  }

  /// Read an index written by [`SearchIndex::write_to`].
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not a valid index.
  pub fn read_from(path: &Path) -> SearchResult<Self> {
    let json = fs::read_to_string(path).map_err(|source| {
      SearchError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    Self::from_json(&json)
  }

  fn check(&self) -> SearchResult<()> {
    let key_count = self.fuse_index.keys.len();
    for record in &self.fuse_index.records {
      if record.i >= self.entries.len() {
        return Err(SearchError::InvalidIndex(format!(
          "record points at entry {} but there are {} entries",
          record.i,
          self.entries.len()
        )));
      }
      if let Some(key) = record.fields.keys().find(|key| **key >= key_count) {
        return Err(SearchError::InvalidIndex(format!(
          "record {} uses key {key} but there are {key_count} keys",
          record.i
        )));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::expect_used,
    clippy::float_cmp,
    reason = "Fine in tests"
  )]
  use super::*;

  fn entry(title: &str, content: &str) -> SearchEntry {
    SearchEntry {
      id:          format!("latest:{}", title.to_lowercase()),
      title:       title.to_string(),
      description: None,
      content:     content.to_string(),
      section:     None,
      subsection:  None,
      version:     "latest".to_string(),
      href:        format!("/docs/latest/{}", title.to_lowercase()),
      keywords:    Vec::new(),
    }
  }

  #[test]
  fn test_field_norm() {
    assert_eq!(field_norm("one"), 1.0);
    assert_eq!(field_norm("one two"), 0.707);
    assert_eq!(field_norm("a  b   c d"), 0.5);
  }

  #[test]
  fn test_records_skip_blank_and_missing_fields() {
    let index = SearchIndex::new(vec![entry("Setup", " ")], &SearchConfig::default());
    let record = &index.fuse_index.records[0];
    // title and keywords only; description is missing and content blank
    assert_eq!(record.fields.keys().copied().collect::<Vec<_>>(), [0, 3]);
    assert_eq!(record.fields[&3], RecordValue::List(Vec::new()));
  }

  #[test]
  fn test_keys_keep_configured_weights() {
    let index = SearchIndex::new(Vec::new(), &SearchConfig::default());
    let weights: Vec<f64> =
      index.fuse_index.keys.iter().map(|key| key.weight).collect();
    assert_eq!(weights, [3.0, 2.0, 1.0, 2.0]);
    assert_eq!(index.fuse_index.keys[0].id, "title");
  }

  #[test]
  fn test_record_json_shape() {
    let index = SearchIndex::new(vec![entry("Setup", "")], &SearchConfig::default());
    let json: serde_json::Value =
      serde_json::from_str(&index.to_json().expect("serializes")).expect("json");
    assert_eq!(json["fuseIndex"]["records"][0]["i"], 0);
    assert_eq!(json["fuseIndex"]["records"][0]["$"]["0"]["v"], "Setup");
    assert_eq!(json["fuseIndex"]["records"][0]["$"]["0"]["n"], 1.0);
  }

  #[test]
  fn test_from_json_rejects_dangling_record() {
    let mut index =
      SearchIndex::new(vec![entry("Setup", "")], &SearchConfig::default());
    index.fuse_index.records[0].i = 4;
    let json = index.to_json().expect("serializes");
    assert!(matches!(
      SearchIndex::from_json(&json),
      Err(SearchError::InvalidIndex(_))
    ));
  }

  #[test]
  fn test_blank_query_returns_nothing() {
    let index = SearchIndex::new(vec![entry("Setup", "")], &SearchConfig::default());
    assert!(index.search("  ", &SearchConfig::default()).is_empty());
  }
}
