//! Whole-engine properties over random transcripts.

use std::cmp::Ordering;

use super::common::{assert_spans_well_formed, make_segments};
use super::{transcript_strategy, word_strategy};
use clipfind::{compare_hits, decode_html_entities, tier_for, SearchEngine, SearchMode};
use proptest::prelude::*;

fn build(lines: &[String]) -> SearchEngine {
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let engine = SearchEngine::default();
    engine.build_single_index(Some(&make_segments(&refs)));
    engine
}

/// A query plus the transcript it runs against; half the time the query is a
/// word taken from the transcript itself.
fn corpus_and_query() -> impl Strategy<Value = (Vec<String>, String)> {
    transcript_strategy().prop_flat_map(|lines| {
        let words: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split(' ').map(str::to_string))
            .collect();
        let query = prop_oneof![prop::sample::select(words), word_strategy()];
        (Just(lines), query)
    })
}

proptest! {
    /// Every hit's spans are inside its text, ascending and disjoint.
    #[test]
    fn prop_hit_spans_well_formed((lines, query) in corpus_and_query()) {
        for hit in build(&lines).query(&query, SearchMode::Single) {
            assert_spans_well_formed(&hit);
        }
    }

    /// Results come back in display order.
    #[test]
    fn prop_results_sorted((lines, query) in corpus_and_query()) {
        let hits = build(&lines).query(&query, SearchMode::Single);
        for pair in hits.windows(2) {
            prop_assert_ne!(compare_hits(&pair[0], &pair[1], true), Ordering::Greater);
        }
    }

    /// Hits are segments of the transcript, each at most once.
    #[test]
    fn prop_hits_come_from_the_transcript((lines, query) in corpus_and_query()) {
        let hits = build(&lines).query(&query, SearchMode::Single);
        prop_assert!(hits.len() <= lines.len());
        let decoded: Vec<String> = lines.iter().map(|l| decode_html_entities(l)).collect();
        for hit in &hits {
            let index = (hit.start / 5.0) as usize;
            prop_assert_eq!(&hit.text, &decoded[index]);
        }
    }

    /// Scores stay in range and never hit exactly zero.
    #[test]
    fn prop_scores_in_range((lines, query) in corpus_and_query()) {
        for hit in build(&lines).query(&query, SearchMode::Single) {
            prop_assert!(hit.score > 0.0 && hit.score <= 1.0, "score {}", hit.score);
        }
    }

    /// Building twice from the same input answers the same.
    #[test]
    fn prop_rebuild_idempotent((lines, query) in corpus_and_query()) {
        let engine = build(&lines);
        let first = engine.query(&query, SearchMode::Single);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        engine.build_single_index(Some(&make_segments(&refs)));
        prop_assert_eq!(first, engine.query(&query, SearchMode::Single));
    }

    /// After a clear, nothing matches.
    #[test]
    fn prop_cleared_index_is_empty((lines, query) in corpus_and_query()) {
        let engine = build(&lines);
        engine.build_single_index(None);
        prop_assert!(engine.query(&query, SearchMode::Single).is_empty());
    }

    /// A plain word lifted from the transcript is found in the best tier.
    #[test]
    fn prop_present_word_found_in_best_tier(
        lines in transcript_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let words: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.split(' '))
            .filter(|w| w.len() >= 2 && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        prop_assume!(!words.is_empty());
        let query = words[pick.index(words.len())];

        let hits = build(&lines).query(query, SearchMode::Single);
        prop_assert!(!hits.is_empty());
        prop_assert_eq!(tier_for(hits[0].score, true), 0);
    }
}
