// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap: approximate substring matching with bit-parallel state.
//!
//! Each pattern character gets a bitmask of the positions it occupies. Scanning
//! the text right to left, one machine word tracks which pattern prefixes are
//! still alive; for `i` allowed errors we keep one word per text position and
//! fold in the previous error level's words for substitution, insertion and
//! deletion. A live top bit means the pattern matched ending here with at most
//! `i` errors.
//!
//! Words are 32 bits, so longer patterns are split into 32-character chunks
//! and the chunk scores averaged.
//!
//! Scores follow `errors / pattern_len`, plus a proximity penalty when the
//! location matters. Lower is better, 0 is exact.
//!
//! Match spans come from a per-character mask, not from the alignment. With
//! `find_all_matches` the final scan marks every text character that appears
//! anywhere in the pattern, so for loose matches the spans over-highlight. The
//! query engine prefers literal spans for strong matches for exactly that
//! reason.

use std::collections::HashMap;

use crate::types::Span;

/// Machine word width. Patterns longer than this are chunked.
pub const MAX_BITS: usize = 32;

/// Lowest score a non-exact chunk can report.
const MIN_CHUNK_SCORE: f64 = 0.001;

/// Parameters for one chunk search.
#[derive(Debug, Clone, Copy)]
pub struct MatchParams {
    pub location: usize,
    pub distance: usize,
    pub threshold: f64,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub include_matches: bool,
    pub ignore_location: bool,
}

/// Outcome of matching one pattern (or chunk) against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: f64,
    pub indices: Vec<Span>,
}

/// Score a match with `errors` edits found at `current_location`.
///
/// ```text
/// accuracy  = errors / pattern_len
/// proximity = |expected_location - current_location|
/// score     = accuracy                      if ignore_location
///           = 1.0 or accuracy               if distance == 0 (1.0 when off-target)
///           = accuracy + proximity/distance otherwise
/// ```
#[inline]
pub fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    distance: usize,
    ignore_location: bool,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if ignore_location {
        return accuracy;
    }
    let proximity = expected_location.abs_diff(current_location);
    if distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / distance as f64
}

/// Bitmask per pattern character: bit `len - i - 1` is set for position `i`.
pub fn pattern_alphabet(pattern: &[char]) -> HashMap<char, u32> {
    let len = pattern.len();
    let mut alphabet = HashMap::with_capacity(len);
    for (i, c) in pattern.iter().enumerate() {
        *alphabet.entry(*c).or_insert(0u32) |= 1u32 << (len - i - 1);
    }
    alphabet
}

/// Runs of `true` at least `min_len` long, as inclusive spans.
pub fn mask_to_indices(mask: &[bool], min_len: usize) -> Vec<Span> {
    let mut indices = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &hit) in mask.iter().enumerate() {
        match (hit, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_len {
                    indices.push([start, i - 1]);
                }
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        if mask.len() - start >= min_len {
            indices.push([start, mask.len() - 1]);
        }
    }
    indices
}

/// First occurrence of `pattern` in `text` at or after `from`.
fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    (from..=text.len() - pattern.len()).find(|&i| text[i..i + pattern.len()] == *pattern)
}

/// Search `text` for `pattern` (at most [`MAX_BITS`] characters).
///
/// Both sides must already be folded the same way.
pub fn bitap_search(
    text: &[char],
    pattern: &[char],
    alphabet: &HashMap<char, u32>,
    params: &MatchParams,
) -> BitapMatch {
    let pattern_len = pattern.len();
    let text_len = text.len();
    debug_assert!(pattern_len > 0 && pattern_len <= MAX_BITS);

    let expected_location = params.location.min(text_len);
    let score_at = |errors: usize, current_location: usize| {
        compute_score(
            pattern_len,
            errors,
            current_location,
            expected_location,
            params.distance,
            params.ignore_location,
        )
    };

    let mut current_threshold = params.threshold;
    let compute_matches = params.min_match_char_length > 1 || params.include_matches;
    let mut match_mask = if compute_matches {
        vec![false; text_len]
    } else {
        Vec::new()
    };

    // Exact occurrences tighten the threshold before the bit-parallel pass.
    let mut from = expected_location;
    while let Some(index) = find_from(text, pattern, from) {
        current_threshold = current_threshold.min(score_at(0, index));
        from = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best_location: Option<usize> = None;
    let mut last_bits: Vec<u32> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let top_bit = 1u32 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Binary search for how far from the expected location a match with
        // this many errors can still sit under the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if score_at(errors, expected_location + bin_mid) <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected_location + 1).saturating_sub(bin_mid).max(1);
        let finish = if params.find_all_matches {
            text_len
        } else {
            (expected_location + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u32; finish + 2];
        bits[finish + 1] = (1u32 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current_location = j - 1;
            let char_mask = text
                .get(current_location)
                .and_then(|c| alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if compute_matches {
                if let Some(slot) = match_mask.get_mut(current_location) {
                    *slot = char_mask != 0;
                }
            }

            bits[j] = ((bits[j + 1] << 1) | 1) & char_mask;
            if errors > 0 {
                let prev_next = last_bits.get(j + 1).copied().unwrap_or(0);
                let prev_here = last_bits.get(j).copied().unwrap_or(0);
                bits[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if bits[j] & top_bit != 0 {
                final_score = score_at(errors, current_location);
                if final_score <= current_threshold {
                    current_threshold = final_score;
                    best_location = Some(current_location);
                    if current_location <= expected_location {
                        break;
                    }
                    start = (2 * expected_location)
                        .saturating_sub(current_location)
                        .max(1);
                }
            }
            j -= 1;
        }

        // No point trying more errors if even a perfectly placed match would fail.
        if score_at(errors + 1, expected_location) > current_threshold {
            break;
        }
        last_bits = bits;
    }

    let mut result = BitapMatch {
        is_match: best_location.is_some(),
        score: f64::max(MIN_CHUNK_SCORE, final_score),
        indices: Vec::new(),
    };

    if compute_matches {
        let indices = mask_to_indices(&match_mask, params.min_match_char_length);
        if indices.is_empty() {
            result.is_match = false;
        } else if params.include_matches {
            result.indices = indices;
        }
    }

    result
}

/// One 32-character slice of a pattern with its alphabet.
#[derive(Debug, Clone)]
struct PatternChunk {
    chars: Vec<char>,
    alphabet: HashMap<char, u32>,
    start_index: usize,
}

/// A folded query, chunked and ready to match against many texts.
#[derive(Debug, Clone)]
pub struct BitapPattern {
    pattern: Vec<char>,
    chunks: Vec<PatternChunk>,
}

impl BitapPattern {
    /// Build from an already-folded pattern.
    pub fn new(pattern: Vec<char>) -> Self {
        let mut chunks = Vec::new();
        let len = pattern.len();

        let mut add_chunk = |slice: &[char], start_index: usize| {
            chunks.push(PatternChunk {
                chars: slice.to_vec(),
                alphabet: pattern_alphabet(slice),
                start_index,
            });
        };

        if len <= MAX_BITS {
            if len > 0 {
                add_chunk(&pattern, 0);
            }
        } else {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                add_chunk(&pattern[i..i + MAX_BITS], i);
                i += MAX_BITS;
            }
            if remainder > 0 {
                // Last chunk is a full word anchored at the end of the pattern.
                let start_index = len - MAX_BITS;
                add_chunk(&pattern[start_index..], start_index);
            }
        }

        Self { pattern, chunks }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Match against a folded text.
    ///
    /// A text equal to the whole pattern is a perfect match covering itself.
    /// Otherwise every chunk runs; the record matches if any chunk does, and
    /// scores the mean chunk score.
    pub fn search_in(&self, text: &[char], params: &MatchParams) -> BitapMatch {
        if self.chunks.is_empty() {
            return BitapMatch {
                is_match: false,
                score: 1.0,
                indices: Vec::new(),
            };
        }

        if self.pattern.as_slice() == text {
            return BitapMatch {
                is_match: true,
                score: 0.0,
                indices: if params.include_matches {
                    vec![[0, text.len() - 1]]
                } else {
                    Vec::new()
                },
            };
        }

        let mut all_indices = Vec::new();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let chunk_params = MatchParams {
                location: params.location + chunk.start_index,
                ..*params
            };
            let m = bitap_search(text, &chunk.chars, &chunk.alphabet, &chunk_params);
            total_score += m.score;
            if m.is_match {
                has_matches = true;
                all_indices.extend(m.indices);
            }
        }

        BitapMatch {
            is_match: has_matches,
            score: if has_matches {
                total_score / self.chunks.len() as f64
            } else {
                1.0
            },
            indices: if has_matches && params.include_matches {
                all_indices
            } else {
                Vec::new()
            },
        }
    }
}
