//! Fence info string parsing.
//!
//! A fence opens with an info string such as
//! `` ```ts title=client.ts group=install ``. The first token is the
//! language; the remaining whitespace-separated tokens are `key=value` pairs.

use crate::syntax::PLAIN_TEXT;

/// Metadata recognized on a code fence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceMeta {
  /// Display title (`title=`).
  pub title: Option<String>,

  /// Tab group key (`group=`).
  pub group: Option<String>,
}

/// Split a fence info string into its language and metadata.
///
/// Unknown keys and tokens without `=` are ignored. A value may be wrapped in
/// matching single or double quotes, which are removed; values cannot contain
/// whitespace. Empty values are treated as absent.
#[must_use]
pub fn parse_fence_info(info: &str) -> (String, FenceMeta) {
  let info = info.trim();
  let (first, rest) = info.split_once(char::is_whitespace).unwrap_or((info, ""));

  // `title=x` on its own declares no language.
  if first.is_empty() || first.contains('=') {
    return (PLAIN_TEXT.to_string(), parse_meta(info));
  }

  (first.to_string(), parse_meta(rest))
}

/// Parse the `key=value` part of a fence info string.
#[must_use]
pub fn parse_meta(meta: &str) -> FenceMeta {
  let mut result = FenceMeta::default();

  for part in meta.split_whitespace() {
    let mut pieces = part.split('=');
    let (Some(key), Some(value)) = (pieces.next(), pieces.next()) else {
      continue;
    };
    let value = unquote(value);
    if value.is_empty() {
      continue;
    }

    match key {
      "title" => result.title = Some(value.to_string()),
      "group" => result.group = Some(value.to_string()),
      _ => {},
    }
  }

  result
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if let Some(inner) = value
      .strip_prefix(quote)
      .and_then(|v| v.strip_suffix(quote))
    {
      return inner;
    }
  }
  value
}
