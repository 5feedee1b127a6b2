//! Tier mapping and hit ordering.

use std::cmp::Ordering;

use super::tagged_hits_strategy;
use clipfind::{compare_hits, sort_hits, tier_for};
use proptest::prelude::*;

proptest! {
    /// Tiers are 0, 1 or 2, and never get worse as the score improves.
    #[test]
    fn prop_tier_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_for(lo, true) <= 2);
        prop_assert!(tier_for(lo, true) <= tier_for(hi, true));
        prop_assert!(tier_for(lo, false) >= tier_for(hi, false));
    }

    /// Sorted output is ordered under `compare_hits`.
    #[test]
    fn prop_sorted_is_ordered(mut hits in tagged_hits_strategy(), render_down in any::<bool>()) {
        sort_hits(&mut hits, render_down);
        for pair in hits.windows(2) {
            prop_assert_ne!(compare_hits(&pair[0], &pair[1], render_down), Ordering::Greater);
        }
    }

    /// Ties keep their input order.
    #[test]
    fn prop_sort_is_stable(mut hits in tagged_hits_strategy(), render_down in any::<bool>()) {
        sort_hits(&mut hits, render_down);
        for pair in hits.windows(2) {
            if compare_hits(&pair[0], &pair[1], render_down) == Ordering::Equal {
                let first: usize = pair[0].text.parse().unwrap();
                let second: usize = pair[1].text.parse().unwrap();
                prop_assert!(first < second, "tie reordered: {} before {}", first, second);
            }
        }
    }

    /// Swapping the arguments reverses the comparison.
    #[test]
    fn prop_compare_antisymmetric(hits in tagged_hits_strategy(), render_down in any::<bool>()) {
        for a in &hits {
            for b in &hits {
                prop_assert_eq!(
                    compare_hits(a, b, render_down),
                    compare_hits(b, a, render_down).reverse()
                );
            }
        }
    }

    /// Sorting is a permutation.
    #[test]
    fn prop_sort_keeps_every_hit(hits in tagged_hits_strategy(), render_down in any::<bool>()) {
        let mut sorted = hits.clone();
        sort_hits(&mut sorted, render_down);
        let mut before: Vec<String> = hits.into_iter().map(|h| h.text).collect();
        let mut after: Vec<String> = sorted.into_iter().map(|h| h.text).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
