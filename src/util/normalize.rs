// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text cleanup before matching: entity decoding and character folding.
//!
//! Folding is strictly one character in, one character out. That is what lets
//! the matcher report offsets on folded text and have them land on the right
//! characters of the original: "Café" folds to "cafe", both four characters.
//! Where a lowercase or diacritic-stripped form would need more than one
//! character (ß, İ), we keep a single representative instead.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Entities the transcript scraper leaves behind, in replacement order.
///
/// `&amp;` is replaced second, so `&amp;quot;` decodes to `&quot;` and not to `"`.
const HTML_ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#39;", "'"),
];

/// Decode the handful of HTML entities that show up in scraped captions.
pub fn decode_html_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    HTML_ENTITIES
        .iter()
        .fold(s.to_string(), |acc, (entity, literal)| {
            acc.replace(entity, literal)
        })
}

/// Fold one character for comparison.
///
/// Lowercases unless `case_sensitive`, then strips diacritics when
/// `ignore_diacritics` is set. Always returns exactly one character.
#[inline]
pub fn fold_char(c: char, case_sensitive: bool, ignore_diacritics: bool) -> char {
    let c = if case_sensitive { c } else { lower_char(c) };
    if ignore_diacritics {
        strip_diacritic(c)
    } else {
        c
    }
}

/// Fold a whole string into a character vector. See [`fold_char`].
pub fn fold(s: &str, case_sensitive: bool, ignore_diacritics: bool) -> Vec<char> {
    s.chars()
        .map(|c| fold_char(c, case_sensitive, ignore_diacritics))
        .collect()
}

/// Lowercase only, one character per character. Used by the literal highlighter.
pub fn lowercase_chars(s: &str) -> Vec<char> {
    s.chars().map(lower_char).collect()
}

#[inline]
fn lower_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Strip combining marks from a character's canonical decomposition.
///
/// Only applies when the decomposition is one base character followed by
/// combining marks. Hangul syllables and the like decompose into several base
/// characters and are left alone.
#[cfg(feature = "unicode-normalization")]
#[inline]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let mut bases = std::iter::once(c)
        .nfd()
        .filter(|ch| !unicode_normalization::char::is_combining_mark(*ch));
    match (bases.next(), bases.next()) {
        (Some(base), None) => base,
        _ => c,
    }
}

/// Without unicode-normalization, diacritics pass through unchanged.
#[cfg(not(feature = "unicode-normalization"))]
#[inline]
fn strip_diacritic(c: char) -> char {
    c
}
