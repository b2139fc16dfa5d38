//! Approximate substring matching.
//!
//! A Bitap (shift-or with errors) matcher scoring each candidate alignment as
//! `errors / pattern_len + |location - expected| / distance`. Lower is better;
//! 0 is an exact match of the whole text. Patterns longer than [`MAX_BITS`]
//! are matched in overlapping chunks whose scores are averaged.

use std::collections::HashMap;

use ptero_config::SearchConfig;

/// Longest pattern one bit vector can track.
pub const MAX_BITS: usize = 32;

/// Scores below this are reported as this.
const MIN_SCORE: f64 = 0.001;

/// Matching parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
  pub location:              usize,
  pub distance:              usize,
  pub threshold:             f64,
  pub ignore_location:       bool,
  pub min_match_char_length: usize,
  pub find_all_matches:      bool,
}

impl Default for MatchOptions {
  fn default() -> Self {
    Self::from(&SearchConfig::default())
  }
}

impl From<&SearchConfig> for MatchOptions {
  fn from(config: &SearchConfig) -> Self {
    Self {
      location:              config.location,
      distance:              config.distance,
      threshold:             config.threshold,
      ignore_location:       config.ignore_location,
      min_match_char_length: config.min_match_char_length,
      find_all_matches:      false,
    }
  }
}

/// Outcome of matching one text.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
  pub is_match: bool,
  pub score:    f64,

  /// Inclusive character ranges that matched.
  pub indices: Vec<(usize, usize)>,
}

impl MatchResult {
  const fn miss() -> Self {
    Self {
      is_match: false,
      score:    1.0,
      indices:  Vec::new(),
    }
  }
}

#[derive(Debug, Clone)]
struct Chunk {
  pattern:     Vec<char>,
  alphabet:    HashMap<char, u64>,
  start_index: usize,
}

impl Chunk {
  fn new(pattern: &[char], start_index: usize) -> Self {
    let mut alphabet: HashMap<char, u64> = HashMap::new();
    let len = pattern.len();
    for (i, c) in pattern.iter().enumerate() {
      *alphabet.entry(*c).or_insert(0) |= 1 << (len - i - 1);
    }
    Self {
      pattern: pattern.to_vec(),
      alphabet,
      start_index,
    }
  }
}

/// Case-insensitive fuzzy matcher for one query.
#[derive(Debug, Clone)]
pub struct BitapSearcher {
  pattern: String,
  chunks:  Vec<Chunk>,
  options: MatchOptions,
}

impl BitapSearcher {
  #[must_use]
  pub fn new(pattern: &str, options: MatchOptions) -> Self {
    let pattern = pattern.to_lowercase();
    let chars: Vec<char> = pattern.chars().collect();

    let mut chunks = Vec::new();
    if chars.len() <= MAX_BITS {
      if !chars.is_empty() {
        chunks.push(Chunk::new(&chars, 0));
      }
    } else {
      let remainder = chars.len() % MAX_BITS;
      let end = chars.len() - remainder;
      let mut i = 0;
      while i < end {
        chunks.push(Chunk::new(&chars[i..i + MAX_BITS], i));
        i += MAX_BITS;
      }
      if remainder > 0 {
        let start = chars.len() - MAX_BITS;
        chunks.push(Chunk::new(&chars[start..], start));
      }
    }

    Self {
      pattern,
      chunks,
      options,
    }
  }

  /// Match the query against `text`.
  #[must_use]
  pub fn search_in(&self, text: &str) -> MatchResult {
    if self.chunks.is_empty() {
      return MatchResult::miss();
    }

    let text = text.to_lowercase();
    if self.pattern == text {
      return MatchResult {
        is_match: true,
        score:    0.0,
        indices:  vec![(0, text.chars().count().saturating_sub(1))],
      };
    }

    let text: Vec<char> = text.chars().collect();
    let mut indices = Vec::new();
    let mut total_score = 0.0;
    let mut has_matches = false;

    for chunk in &self.chunks {
      let options = MatchOptions {
        location: self.options.location + chunk.start_index,
        ..self.options
      };
      let result = bitap(&text, chunk, &options);
      if result.is_match {
        has_matches = true;
        indices.extend(result.indices);
      }
      total_score += result.score;
    }

    if !has_matches {
      return MatchResult::miss();
    }

    #[allow(
      clippy::cast_precision_loss,
      reason = "Chunk counts are tiny"
    )]
    let chunk_count = self.chunks.len() as f64;
    MatchResult {
      is_match: true,
      score: total_score / chunk_count,
      indices,
    }
  }
}

#[allow(
  clippy::cast_precision_loss,
  reason = "Pattern lengths, offsets and distances are far below 2^52"
)]
fn compute_score(
  pattern_len: usize,
  errors: usize,
  current_location: usize,
  expected_location: usize,
  options: &MatchOptions,
) -> f64 {
  let accuracy = errors as f64 / pattern_len as f64;
  if options.ignore_location {
    return accuracy;
  }

  let proximity = current_location.abs_diff(expected_location);
  if options.distance == 0 {
    return if proximity == 0 { accuracy } else { 1.0 };
  }

  accuracy + proximity as f64 / options.distance as f64
}

fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
  text
    .get(from..)?
    .windows(pattern.len())
    .position(|window| window == pattern)
    .map(|offset| offset + from)
}

fn bitap(text: &[char], chunk: &Chunk, options: &MatchOptions) -> MatchResult {
  let pattern = chunk.pattern.as_slice();
  let pattern_len = pattern.len();
  let text_len = text.len();
  let expected = options.location.min(text_len);
  let score_at = |errors: usize, location: usize| {
    compute_score(pattern_len, errors, location, expected, options)
  };

  let mut threshold = options.threshold;
  let mut match_mask = vec![false; text_len + pattern_len + 1];

  // Exact occurrences tighten the threshold before the fuzzy pass.
  let mut from = expected;
  while let Some(index) = find_from(text, pattern, from) {
    threshold = threshold.min(score_at(0, index));
    from = index + pattern_len;
    for flag in &mut match_mask[index..index + pattern_len] {
      *flag = true;
    }
  }

  let mut best_location = None;
  let mut last_bits: Vec<u64> = Vec::new();
  let mut final_score = 1.0;
  let mut bin_max = pattern_len + text_len;
  let mask: u64 = 1 << (pattern_len - 1);

  for errors in 0..pattern_len {
    // Widest window where a match with this many errors could still beat
    // the threshold.
    let mut bin_min = 0;
    let mut bin_mid = bin_max;
    while bin_min < bin_mid {
      if score_at(errors, expected + bin_mid) <= threshold {
        bin_min = bin_mid;
      } else {
        bin_max = bin_mid;
      }
      bin_mid = (bin_max - bin_min) / 2 + bin_min;
    }
    bin_max = bin_mid;

    let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
    let finish = if options.find_all_matches {
      text_len
    } else {
      (expected + bin_mid).min(text_len) + pattern_len
    };

    let mut bits = vec![0u64; finish + 2];
    bits[finish + 1] = (1u64 << errors) - 1;

    let last = |k: usize| last_bits.get(k).copied().unwrap_or(0);

    let mut j = finish;
    while j >= start {
      let current = j - 1;
      let char_match = text
        .get(current)
        .and_then(|c| chunk.alphabet.get(c))
        .copied()
        .unwrap_or(0);
      if let Some(flag) = match_mask.get_mut(current) {
        *flag = char_match != 0;
      }

      bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
      if errors > 0 {
        bits[j] |= ((last(j + 1) | last(j)) << 1) | 1 | last(j + 1);
      }

      if bits[j] & mask != 0 {
        final_score = score_at(errors, current);
        if final_score <= threshold {
          threshold = final_score;
          best_location = Some(current);
          if current <= expected {
            break;
          }
          start = (2 * expected).saturating_sub(current).max(1);
        }
      }

      j -= 1;
    }

    if score_at(errors + 1, expected) > threshold {
      break;
    }
    last_bits = bits;
  }

  let indices = mask_to_indices(&match_mask, options.min_match_char_length);
  MatchResult {
    is_match: best_location.is_some() && !indices.is_empty(),
    score: f64::max(MIN_SCORE, final_score),
    indices,
  }
}

/// Runs of matched characters at least `min_len` long, as inclusive ranges.
fn mask_to_indices(mask: &[bool], min_len: usize) -> Vec<(usize, usize)> {
  let mut indices = Vec::new();
  let mut run_start = None;

  for (i, &matched) in mask.iter().enumerate() {
    match (matched, run_start) {
      (true, None) => run_start = Some(i),
      (false, Some(start)) => {
        if i - start >= min_len {
          indices.push((start, i - 1));
        }
        run_start = None;
      },
      _ => {},
    }
  }
  if let Some(start) = run_start
    && mask.len() - start >= min_len
  {
    indices.push((start, mask.len() - 1));
  }

  indices
}
