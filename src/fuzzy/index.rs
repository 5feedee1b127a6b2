// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A fuzzy index over a fixed sequence of records.
//!
//! Records are folded once at build time, so a query only folds itself. The
//! record order is the caller's order and it is never changed, which is what
//! lets the query engine rely on chronological candidate order.

use crate::types::Span;
use crate::util::normalize::fold;

use super::bitap::{BitapPattern, MatchParams};
use super::options::IndexOptions;

/// Anything with a text field the matcher can search.
pub trait Searchable {
    fn text(&self) -> &str;
}

/// A record that matched, borrowed from the index.
#[derive(Debug, Clone)]
pub struct Candidate<'a, T> {
    pub item: &'a T,
    /// Position of `item` in the indexed sequence.
    pub ref_index: usize,
    /// Lower is better. Never exactly zero.
    pub score: f64,
    /// Raw matched runs as the matcher reported them (unsorted across chunks,
    /// possibly adjacent).
    pub indices: Vec<Span>,
}

/// The record list plus pre-folded text and per-record field norms.
///
/// Records whose text is blank stay in the list (positions and `len` are
/// unchanged) but are never searched.
#[derive(Debug, Clone)]
pub struct FuzzyIndex<T> {
    records: Vec<T>,
    /// `None` for blank records.
    folded: Vec<Option<Vec<char>>>,
    norms: Vec<f64>,
    options: IndexOptions,
}

impl<T: Searchable> FuzzyIndex<T> {
    pub fn new(records: Vec<T>, options: IndexOptions) -> Self {
        let folded = records
            .iter()
            .map(|r| {
                let text = r.text();
                (!text.trim().is_empty())
                    .then(|| fold(text, options.case_sensitive, options.ignore_diacritics))
            })
            .collect();
        let norms = records.iter().map(|r| field_norm(r.text())).collect();
        Self {
            records,
            folded,
            norms,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Every record matching `query`, in index order unless `should_sort`.
    ///
    /// `limit` truncates after ordering, so with sorting off it keeps the
    /// earliest matches.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<Candidate<'_, T>> {
        let opts = &self.options;
        let pattern = BitapPattern::new(fold(query, opts.case_sensitive, opts.ignore_diacritics));
        if pattern.is_empty() {
            return Vec::new();
        }

        let params = MatchParams {
            location: opts.location,
            distance: opts.distance,
            threshold: opts.threshold,
            find_all_matches: opts.find_all_matches,
            min_match_char_length: opts.min_match_char_length,
            include_matches: opts.include_matches,
            ignore_location: opts.ignore_location,
        };

        let mut candidates: Vec<Candidate<'_, T>> = self
            .folded
            .iter()
            .enumerate()
            .filter_map(|(ref_index, text)| {
                let m = pattern.search_in(text.as_deref()?, &params);
                if !m.is_match {
                    return None;
                }
                Some(Candidate {
                    item: &self.records[ref_index],
                    ref_index,
                    score: self.record_score(m.score, ref_index),
                    indices: m.indices,
                })
            })
            .collect();

        if opts.should_sort {
            candidates.sort_by(|a, b| {
                a.score
                    .total_cmp(&b.score)
                    .then(a.ref_index.cmp(&b.ref_index))
            });
        }

        if let Some(limit) = limit {
            candidates.truncate(limit);
        }
        candidates
    }

    /// Single key, weight 1: the match score, raised to the field norm unless
    /// norms are ignored. A perfect match is lifted off zero.
    fn record_score(&self, score: f64, ref_index: usize) -> f64 {
        let base = if score == 0.0 { f64::EPSILON } else { score };
        if self.options.ignore_field_norm {
            base
        } else {
            base.powf(self.norms[ref_index])
        }
    }
}

/// `1 / sqrt(token_count)`, rounded to three places. Longer fields get
/// exponents below one, which pushes their scores toward 1 (worse).
fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let n = 1.0 / (tokens as f64).sqrt();
    (n * 1000.0).round() / 1000.0
}
