//! Frontmatter splitting and validation.
//!
//! A document may open with a YAML block fenced by `---` lines. The block is
//! validated against [`Frontmatter`]; everything after the closing fence is
//! the body and is returned untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::FrontmatterError;

const DELIMITER: &str = "---";

/// Validated document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
  pub title: String,

  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,

  /// Sidebar section key, e.g. `getting-started`.
  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub section: Option<String>,

  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub subsection: Option<String>,

  /// Position within the section; lower sorts first.
  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub order: Option<f64>,

  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub scope: Option<String>,

  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub sdks: Option<Vec<String>>,

  #[serde(default)]
  pub hidden: bool,

  #[serde(default)]
  pub draft: bool,

  #[serde(
    default,
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub edit_url: Option<String>,
}

/// An optional field that, when written, must hold a value. `null` is a type
/// error rather than an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  T::deserialize(deserializer).map(Some)
}

impl Frontmatter {
  /// Hidden and draft documents are kept in the store but never listed,
  /// indexed or prerendered.
  #[must_use]
  pub const fn is_listed(&self) -> bool {
    !self.hidden && !self.draft
  }
}

/// Split `raw` into its validated frontmatter and body.
///
/// A document without a frontmatter block is validated against an empty
/// mapping, so it fails on the missing `title`. Unknown keys are ignored.
///
/// # Errors
///
/// Returns [`FrontmatterError::Unclosed`] for a block with no closing fence,
/// [`FrontmatterError::Yaml`] when the block is not YAML, and
/// [`FrontmatterError::Schema`] when a field is missing or mistyped.
pub fn parse_frontmatter(raw: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
  let (yaml, body) = split_frontmatter(raw)?;

  let value = match yaml {
    Some(yaml) => serde_yaml::from_str::<Value>(yaml)?,
    None => Value::Null,
  };
  let value = match value {
    Value::Null => Value::Mapping(serde_yaml::Mapping::new()),
    mapping @ Value::Mapping(_) => mapping,
    other => {
      return Err(FrontmatterError::Schema(format!(
        "expected a mapping, found {}",
        kind_of(&other)
      )));
    },
  };

  let frontmatter = serde_yaml::from_value::<Frontmatter>(value)
    .map_err(|e| FrontmatterError::Schema(e.to_string()))?;

  Ok((frontmatter, body))
}

/// Separate the YAML block (if any) from the body.
fn split_frontmatter(raw: &str) -> Result<(Option<&str>, &str), FrontmatterError> {
  let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

  let Some((first, rest)) = split_line(raw) else {
    return Ok((None, raw));
  };
  if first.trim_end() != DELIMITER {
    return Ok((None, raw));
  }

  let mut offset = 0;
  let mut remaining = rest;
  while let Some((line, after)) = split_line(remaining) {
    if line.trim_end() == DELIMITER {
      return Ok((Some(&rest[..offset]), after));
    }
    offset += remaining.len() - after.len();
    remaining = after;
  }

  Err(FrontmatterError::Unclosed)
}

/// Split off the first line (without its terminator). `None` on empty input.
fn split_line(text: &str) -> Option<(&str, &str)> {
  if text.is_empty() {
    return None;
  }
  Some(match text.find('\n') {
    Some(index) => {
      let line = &text[..index];
      (line.strip_suffix('\r').unwrap_or(line), &text[index + 1..])
    },
    None => (text, ""),
  })
}

const fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Sequence(_) => "a sequence",
    Value::Mapping(_) => "a mapping",
    Value::Tagged(_) => "a tagged value",
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_parse_full_frontmatter() {
    let raw = "---\ntitle: Installation\ndescription: Set up\nsection: \
               getting-started\norder: 2\nsdks: [js, py]\nhidden: false\n---\n# Body\n";
    let (fm, body) = parse_frontmatter(raw).expect("valid frontmatter");

    assert_eq!(fm.title, "Installation");
    assert_eq!(fm.description.as_deref(), Some("Set up"));
    assert_eq!(fm.section.as_deref(), Some("getting-started"));
    assert_eq!(fm.order, Some(2.0));
    assert_eq!(fm.sdks, Some(vec!["js".to_string(), "py".to_string()]));
    assert!(fm.is_listed());
    assert_eq!(body, "# Body\n");
  }

  #[test]
  fn test_unknown_keys_are_ignored() {
    let raw = "---\ntitle: A\nlayout: wide\n---\nbody";
    let (fm, body) = parse_frontmatter(raw).expect("unknown keys are fine");
    assert_eq!(fm.title, "A");
    assert_eq!(body, "body");
  }

  #[test]
  fn test_missing_title_is_schema_error() {
    let err = parse_frontmatter("---\ndescription: x\n---\n").expect_err("no title");
    assert!(matches!(err, FrontmatterError::Schema(_)), "{err:?}");
    assert!(err.to_string().contains("title"));
  }

  #[test]
  fn test_no_frontmatter_fails_on_title() {
    let err = parse_frontmatter("# Just markdown\n").expect_err("no title");
    assert!(matches!(err, FrontmatterError::Schema(_)));
  }

  #[test]
  fn test_wrong_type_is_schema_error() {
    let err =
      parse_frontmatter("---\ntitle: A\norder: first\n---\n").expect_err("bad order");
    assert!(matches!(err, FrontmatterError::Schema(_)));

    let err =
      parse_frontmatter("---\ntitle: A\nhidden: 3\n---\n").expect_err("bad hidden");
    assert!(matches!(err, FrontmatterError::Schema(_)));
  }

  #[test]
  fn test_null_optional_field_is_schema_error() {
    for field in ["order: ~", "description: null", "sdks: ~", "editUrl: null"] {
      let raw = format!("---\ntitle: A\n{field}\n---\n");
      let err = parse_frontmatter(&raw).expect_err("null is not a value");
      assert!(matches!(err, FrontmatterError::Schema(_)), "{field}: {err:?}");
    }
  }

  #[test]
  fn test_non_mapping_is_schema_error() {
    let err = parse_frontmatter("---\n- a\n- b\n---\n").expect_err("sequence");
    assert!(err.to_string().contains("sequence"));
  }

  #[test]
  fn test_unclosed_block() {
    let err = parse_frontmatter("---\ntitle: A\n").expect_err("unclosed");
    assert!(matches!(err, FrontmatterError::Unclosed));
  }

  #[test]
  fn test_malformed_yaml() {
    let err = parse_frontmatter("---\ntitle: [unterminated\n---\n").expect_err("bad yaml");
    assert!(matches!(err, FrontmatterError::Yaml(_)));
  }

  #[test]
  fn test_crlf_and_bom() {
    let raw = "\u{feff}---\r\ntitle: Windows\r\n---\r\nbody\r\n";
    let (fm, body) = parse_frontmatter(raw).expect("crlf frontmatter");
    assert_eq!(fm.title, "Windows");
    assert_eq!(body, "body\r\n");
  }

  #[test]
  fn test_fractional_order() {
    let (fm, _) = parse_frontmatter("---\ntitle: A\norder: 1.5\n---\n").expect("valid");
    assert_eq!(fm.order, Some(1.5));
  }

  #[test]
  fn test_draft_is_not_listed() {
    let (fm, _) = parse_frontmatter("---\ntitle: A\ndraft: true\n---\n").expect("valid");
    assert!(!fm.is_listed());
  }
}
