//! Property tests for the reconciliation primitives.

use std::collections::BTreeMap;

use proptest::prelude::*;
use work_classifier::matching::consolidation::consolidate;
use work_classifier::matching::scoring::{decide_audience, decide_fiction, low_pass_filter, Tally};
use work_classifier::{range_tuple, Audience, GenreTaxonomy};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(128),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

const AUDIENCES: [Audience; 6] = [
    Audience::Children,
    Audience::YoungAdult,
    Audience::Adult,
    Audience::AdultsOnly,
    Audience::AllAges,
    Audience::Research,
];

fn arb_weights() -> impl Strategy<Value = BTreeMap<u32, f64>> {
    prop::collection::btree_map(0u32..40, 0.5f64..500.0, 0..12)
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn range_bounds_are_ordered(a in -5i32..100, b in -5i32..100) {
        let range = range_tuple(Some(a), Some(b));
        prop_assert_eq!(range.lower, Some(a.min(b)));
        prop_assert_eq!(range.upper, Some(a.max(b)));
        prop_assert_eq!(range_tuple(None, Some(b)).lower, None);
        prop_assert_eq!(range_tuple(Some(a), None).upper, None);
    }

    #[test]
    fn consolidation_preserves_total_weight(
        picks in prop::collection::vec((any::<prop::sample::Index>(), 1.0f64..200.0), 0..10),
        threshold in 0.0f64..0.5,
    ) {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let ids = taxonomy.ids().collect::<Vec<_>>();
        let mut weights = BTreeMap::new();
        for (index, weight) in picks {
            weights.insert(*index.get(&ids), weight);
        }

        let before: f64 = weights.values().sum();
        let after: f64 = consolidate(&taxonomy, &weights, threshold).values().sum();
        prop_assert!((before - after).abs() < 1e-6);
    }

    #[test]
    fn consolidation_leaves_no_parent_with_its_heaviest_child(
        picks in prop::collection::vec((any::<prop::sample::Index>(), 1.0f64..200.0), 0..10),
    ) {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let ids = taxonomy.ids().collect::<Vec<_>>();
        let weights: BTreeMap<_, _> = picks
            .into_iter()
            .map(|(index, weight)| (*index.get(&ids), weight))
            .collect();

        // A zero threshold lets any present descendant swallow its ancestors.
        let result = consolidate(&taxonomy, &weights, 0.0);
        for &genre in result.keys() {
            for ancestor in taxonomy.ancestors(genre) {
                prop_assert!(!result.contains_key(&ancestor));
            }
        }
    }

    #[test]
    fn low_pass_filter_is_monotone_in_cutoff(
        weights in arb_weights(),
        low in 0.0f64..0.5,
        delta in 0.0f64..0.5,
    ) {
        let loose = low_pass_filter(&weights, low);
        let strict = low_pass_filter(&weights, low + delta);
        for key in strict.keys() {
            prop_assert!(loose.contains_key(key));
        }
        for (key, weight) in &loose {
            prop_assert_eq!(Some(weight), weights.get(key));
        }
    }

    #[test]
    fn audience_decision_is_pure(
        entries in prop::collection::vec((0usize..6, -100.0f64..500.0), 0..8),
        erotica in any::<bool>(),
    ) {
        let weights: Tally<Audience> = entries
            .into_iter()
            .map(|(index, weight)| (AUDIENCES[index], weight))
            .collect();
        let first = decide_audience(&weights, erotica, Some(Audience::Adult));
        let second = decide_audience(&weights, erotica, Some(Audience::Adult));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn erotica_always_means_adults_only(
        entries in prop::collection::vec((0usize..6, -100.0f64..500.0), 0..8),
    ) {
        let weights: Tally<Audience> = entries
            .into_iter()
            .map(|(index, weight)| (AUDIENCES[index], weight))
            .collect();
        prop_assert_eq!(
            decide_audience(&weights, true, Some(Audience::Adult)),
            Some(Audience::AdultsOnly)
        );
    }

    #[test]
    fn purely_juvenile_evidence_stays_juvenile(
        children in 1.0f64..500.0,
        young_adult in 1.0f64..500.0,
    ) {
        let weights: Tally<Audience> = [
            (Audience::Children, children),
            (Audience::YoungAdult, young_adult),
        ]
        .into_iter()
        .collect();
        let audience = decide_audience(&weights, false, Some(Audience::Adult));
        prop_assert!(audience.is_some_and(Audience::is_juvenile));
    }

    #[test]
    fn fiction_follows_the_heavier_side(fiction in 0.0f64..100.0, nonfiction in 0.0f64..100.0) {
        let weights: Tally<bool> = [(true, fiction), (false, nonfiction)].into_iter().collect();
        let decided = decide_fiction(&weights, None);
        if fiction > nonfiction {
            prop_assert_eq!(decided, Some(true));
        } else if nonfiction > 0.0 {
            prop_assert_eq!(decided, Some(false));
        } else {
            prop_assert_eq!(decided, None);
        }
    }
}
