//! Genre hierarchy consolidation.
//!
//! When a genre and some of its subgenres all carry weight, the heaviest
//! subgenre absorbs the parent's weight as long as it holds more than
//! `swallow_threshold` of it. A strong "Epic Fantasy" signal thus soaks up
//! a larger but vaguer "Fantasy" signal instead of competing with it.

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};

/// Fold each parent genre's weight into its heaviest present descendant
///
/// The total weight is preserved: every transfer moves a parent's whole
/// weight onto one child and removes the parent.
#[must_use]
pub fn consolidate(
    taxonomy: &GenreTaxonomy,
    weights: &BTreeMap<GenreId, f64>,
    swallow_threshold: f64,
) -> BTreeMap<GenreId, f64> {
    let mut consolidated = weights.clone();

    // parent -> (heaviest present descendant, its weight)
    let mut heaviest_child: BTreeMap<GenreId, (GenreId, f64)> = BTreeMap::new();
    for (&genre, &weight) in &consolidated {
        for ancestor in taxonomy.ancestors(genre) {
            if !consolidated.contains_key(&ancestor) {
                continue;
            }
            let heavier = heaviest_child
                .get(&ancestor)
                .map_or(true, |&(_, current)| weight > current);
            if heavier {
                heaviest_child.insert(ancestor, (genre, weight));
            }
        }
    }

    loop {
        let mut candidates: Vec<(GenreId, GenreId, f64)> = heaviest_child
            .iter()
            .map(|(&parent, &(child, weight))| (parent, child, weight))
            .collect();
        candidates.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

        let mut restart = false;
        for (parent, child, child_weight) in candidates {
            let Some(&parent_weight) = consolidated.get(&parent) else {
                heaviest_child.remove(&parent);
                continue;
            };
            if !consolidated.contains_key(&child) || child_weight <= swallow_threshold * parent_weight {
                continue;
            }

            debug!(
                "{} swallows {} ({parent_weight:.1})",
                taxonomy.name(child),
                taxonomy.name(parent)
            );
            let absorbed = consolidated.get(&child).copied().unwrap_or(0.0) + parent_weight;
            consolidated.insert(child, absorbed);
            consolidated.remove(&parent);
            heaviest_child.remove(&parent);

            let mut propagated = false;
            for ancestor in taxonomy.ancestors(parent) {
                if let Some(entry) = heaviest_child.get_mut(&ancestor) {
                    *entry = (child, absorbed);
                    propagated = true;
                }
            }
            if propagated {
                restart = true;
                break;
            }
        }
        if !restart {
            break;
        }
    }
    consolidated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(taxonomy: &GenreTaxonomy, entries: &[(&str, f64)]) -> BTreeMap<GenreId, f64> {
        entries
            .iter()
            .map(|(name, weight)| (taxonomy.get(name).unwrap(), *weight))
            .collect()
    }

    fn named(taxonomy: &GenreTaxonomy, weights: &BTreeMap<GenreId, f64>) -> BTreeMap<String, f64> {
        weights
            .iter()
            .map(|(id, weight)| (taxonomy.name(*id).to_string(), *weight))
            .collect()
    }

    #[test]
    fn test_subgenre_swallows_parent() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let input = weights(&taxonomy, &[("Romance", 100.0), ("Historical Romance", 5.0)]);
        let result = named(&taxonomy, &consolidate(&taxonomy, &input, 0.03));
        assert_eq!(result.len(), 1);
        assert!((result["Historical Romance"] - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_weak_subgenre_does_not_swallow() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let input = weights(&taxonomy, &[("Romance", 100.0), ("Historical Romance", 2.0)]);
        let result = named(&taxonomy, &consolidate(&taxonomy, &input, 0.03));
        assert_eq!(result.len(), 2);
        assert!((result["Romance"] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_heaviest_child_wins() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let input = weights(
            &taxonomy,
            &[("Fantasy", 100.0), ("Epic Fantasy", 10.0), ("Urban Fantasy", 20.0)],
        );
        let result = named(&taxonomy, &consolidate(&taxonomy, &input, 0.03));
        assert!(!result.contains_key("Fantasy"));
        assert!((result["Urban Fantasy"] - 120.0).abs() < 1e-9);
        assert!((result["Epic Fantasy"] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrelated_genres_untouched() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let input = weights(&taxonomy, &[("Romance", 100.0), ("Cooking", 5.0)]);
        assert_eq!(consolidate(&taxonomy, &input, 0.03), input);
    }

    #[test]
    fn test_chain_consolidates_to_deepest() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let input = weights(
            &taxonomy,
            &[
                ("Religion & Spirituality", 100.0),
                ("Christianity", 50.0),
                ("Bible Studies", 20.0),
            ],
        );
        let result = named(&taxonomy, &consolidate(&taxonomy, &input, 0.03));
        assert_eq!(result.len(), 1);
        assert!((result["Bible Studies"] - 170.0).abs() < 1e-9);
    }
}
