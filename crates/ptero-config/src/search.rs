use serde::{Deserialize, Serialize};

/// Document fields the search index can weight.
pub const SEARCH_FIELDS: &[&str] = &["title", "description", "content", "keywords"];

/// A weighted search field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchKey {
  pub name:   String,
  pub weight: f64,
}

impl SearchKey {
  fn new(name: &str, weight: f64) -> Self {
    Self {
      name: name.to_string(),
      weight,
    }
  }
}

/// Configuration for search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
  /// Whether search functionality is enabled
  pub enabled: bool,

  /// Placeholder shown in the search box.
  pub placeholder: String,

  /// Key combinations that open search.
  pub hotkeys: Vec<String>,

  /// Indexed fields and their weights.
  pub keys: Vec<SearchKey>,

  /// Highest score (0 = exact, 1 = anything) still counted as a match.
  pub threshold: f64,

  /// How far from `location` a match may sit before its score reaches 1.
  pub distance: usize,

  /// Expected character offset of a match.
  pub location: usize,

  /// Score on edit errors alone, wherever the match is.
  #[serde(alias = "ignoreLocation")]
  pub ignore_location: bool,

  /// Shortest matched run that counts.
  #[serde(alias = "minMatchCharLength")]
  pub min_match_char_length: usize,

  /// Characters of stripped body text kept per entry.
  #[serde(alias = "maxContentLength")]
  pub max_content_length: usize,

  /// Result cap for queries. Unset returns every match.
  pub limit: Option<usize>,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      enabled:               true,
      placeholder:           "Search docs...".to_string(),
      hotkeys:               vec!["ctrl+k".to_string(), "cmd+k".to_string()],
      keys:                  vec![
        SearchKey::new("title", 3.0),
        SearchKey::new("description", 2.0),
        SearchKey::new("content", 1.0),
        SearchKey::new("keywords", 2.0),
      ],
      threshold:             0.3,
      distance:              100,
      location:              0,
      ignore_location:       false,
      min_match_char_length: 2,
      max_content_length:    500,
      limit:                 None,
    }
  }
}

impl SearchConfig {
  pub(crate) fn validate(&self, errors: &mut Vec<String>) {
    if self.keys.is_empty() {
      errors.push("search.keys must name at least one field".to_string());
    }
    for key in &self.keys {
      if !SEARCH_FIELDS.contains(&key.name.as_str()) {
        errors.push(format!(
          "Unknown search key '{}', expected one of: {}",
          key.name,
          SEARCH_FIELDS.join(", ")
        ));
      }
      if !key.weight.is_finite() || key.weight <= 0.0 {
        errors.push(format!(
          "Search key '{}' needs a positive weight, got {}",
          key.name, key.weight
        ));
      }
    }
    if !(0.0..=1.0).contains(&self.threshold) {
      errors.push(format!(
        "search.threshold must be between 0 and 1, got {}",
        self.threshold
      ));
    }
    if self.min_match_char_length == 0 {
      errors.push("search.min_match_char_length must be at least 1".to_string());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_valid() {
    let mut errors = Vec::new();
    SearchConfig::default().validate(&mut errors);
    assert!(errors.is_empty(), "{errors:?}");
  }

  #[test]
  fn test_validate_collects_every_problem() {
    let config = SearchConfig {
      keys: vec![SearchKey::new("body", 1.0), SearchKey::new("title", 0.0)],
      threshold: 1.5,
      ..SearchConfig::default()
    };
    let mut errors = Vec::new();
    config.validate(&mut errors);
    assert_eq!(errors.len(), 3, "{errors:?}");
  }
}
