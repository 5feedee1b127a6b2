//! Span merging and literal span search.

use std::collections::BTreeSet;

use super::{line_strategy, spans_strategy, word_strategy};
use clipfind::{find_literal_spans, merge_spans, resolve_spans, Span};
use proptest::prelude::*;

fn covered(spans: &[Span]) -> BTreeSet<usize> {
    spans.iter().flat_map(|[s, e]| *s..=*e).collect()
}

fn assert_disjoint_ascending(spans: &[Span]) -> Result<(), TestCaseError> {
    for pair in spans.windows(2) {
        prop_assert!(
            pair[0][1] < pair[1][0],
            "not disjoint/ascending: {:?}",
            spans
        );
    }
    Ok(())
}

proptest! {
    /// Merging never changes which positions are covered.
    #[test]
    fn prop_merge_preserves_coverage(spans in spans_strategy()) {
        let merged = merge_spans(&spans);
        prop_assert_eq!(covered(&merged), covered(&spans));
    }

    /// Merged spans are ascending with a gap of at least one between them.
    #[test]
    fn prop_merge_leaves_gaps(spans in spans_strategy()) {
        let merged = merge_spans(&spans);
        for pair in merged.windows(2) {
            prop_assert!(pair[0][1] + 1 < pair[1][0], "touching spans survived: {:?}", merged);
        }
    }

    /// Merging is idempotent.
    #[test]
    fn prop_merge_idempotent(spans in spans_strategy()) {
        let once = merge_spans(&spans);
        prop_assert_eq!(merge_spans(&once), once);
    }

    /// Every literal span covers a case-insensitive copy of the query.
    #[test]
    fn prop_literal_spans_cover_query(text in line_strategy(), query in word_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let spans = find_literal_spans(&text, &query);
        assert_disjoint_ascending(&spans)?;
        for [s, e] in &spans {
            let found: String = chars[*s..=*e].iter().collect();
            prop_assert_eq!(found.to_lowercase(), query.to_lowercase());
        }
    }

    /// A query planted in the text is always found.
    #[test]
    fn prop_planted_query_is_found(
        prefix in line_strategy(),
        query in word_strategy(),
        suffix in line_strategy(),
    ) {
        let text = format!("{} {} {}", prefix, query.to_uppercase(), suffix);
        prop_assert!(!find_literal_spans(&text, &query).is_empty());
    }

    /// Whatever the score, resolved spans are disjoint and ascending.
    #[test]
    fn prop_resolved_spans_well_formed(
        text in line_strategy(),
        query in word_strategy(),
        score in 0.0f64..1.0,
        fuzzy in spans_strategy(),
    ) {
        assert_disjoint_ascending(&resolve_spans(&text, &query, score, &fuzzy))?;
    }
}
