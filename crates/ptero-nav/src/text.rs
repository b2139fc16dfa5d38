//! Label helpers for keys and path segments.

/// Upper-case the first character and turn hyphens into spaces:
/// `advanced-topics` → `Advanced topics`.
#[must_use]
pub fn capitalize_key(key: &str) -> String {
  let mut chars = key.chars();
  chars.next().map_or_else(String::new, |first| {
    first
      .to_uppercase()
      .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
      .collect()
  })
}

/// Capitalize every hyphen-separated word: `getting-started` →
/// `Getting Started`.
#[must_use]
pub fn title_case_segment(segment: &str) -> String {
  segment
    .split('-')
    .map(|word| {
      let mut chars = word.chars();
      chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
      })
    })
    .collect::<Vec<_>>()
    .join(" ")
}
