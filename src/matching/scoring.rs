use std::collections::BTreeMap;

use super::config::sources;
use crate::core::types::{default_target_age_for_audience, range_tuple, AgeRange, Audience, Scheme};

/// Accumulated weight per value of one classification dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<K: Ord> {
    weights: BTreeMap<K, f64>,
}

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> Tally<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or, with a negative weight, subtract) evidence for a value
    pub fn add(&mut self, key: K, weight: f64) {
        *self.weights.entry(key).or_insert(0.0) += weight;
    }

    /// Overwrite the weight of a value
    pub fn set(&mut self, key: K, weight: f64) {
        self.weights.insert(key, weight);
    }

    #[must_use]
    pub fn get(&self, key: K) -> f64 {
        self.weights.get(&key).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn clear(&mut self) {
        self.weights.clear();
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.weights.iter().map(|(k, w)| (*k, *w))
    }

    /// All values tied for the highest positive weight
    #[must_use]
    pub fn top_tier(&self) -> Vec<K> {
        let top = self
            .weights
            .values()
            .copied()
            .filter(|w| *w > 0.0)
            .fold(None, |best: Option<f64>, w| Some(best.map_or(w, |b| b.max(w))));
        let Some(top) = top else {
            return Vec::new();
        };
        self.weights
            .iter()
            .filter(|(_, w)| **w == top)
            .map(|(k, _)| *k)
            .collect()
    }

    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<K, f64> {
        &self.weights
    }
}

impl<K: Ord + Copy> FromIterator<(K, f64)> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (key, weight) in iter {
            tally.add(key, weight);
        }
        tally
    }
}

/// Lookup key into the target-age reliability table, most specific first
enum QualityKey {
    SourceSchemeIdentifier(&'static str, Scheme, &'static str),
    SourceScheme(&'static str, Scheme),
    Source(&'static str),
    Scheme(Scheme),
}

/// How much a classification's target age can be trusted, by where it came from
const TARGET_AGE_QUALITY: &[(QualityKey, f64)] = &[
    (QualityKey::SourceSchemeIdentifier(sources::OVERDRIVE, Scheme::Overdrive, "Fiction"), 0.7),
    (QualityKey::SourceSchemeIdentifier(sources::OVERDRIVE, Scheme::Overdrive, "Nonfiction"), 0.7),
    (QualityKey::SourceScheme(sources::OVERDRIVE, Scheme::InterestLevel), 0.9),
    (QualityKey::SourceScheme(sources::OVERDRIVE, Scheme::Overdrive), 0.9),
    // Overdrive grade levels measure reading level, not age appropriateness.
    (QualityKey::SourceScheme(sources::OVERDRIVE, Scheme::GradeLevel), 0.35),
    (QualityKey::SourceScheme(sources::AMAZON, Scheme::AgeRange), 1.0),
    (QualityKey::SourceScheme(sources::AMAZON, Scheme::GradeLevel), 0.9),
    (QualityKey::SourceScheme(sources::OCLC_LINKED_DATA, Scheme::Tag), 0.3),
    (QualityKey::Source(sources::AMAZON), 0.1),
    (QualityKey::Scheme(Scheme::Axis360Audience), 0.9),
    (QualityKey::Scheme(Scheme::AgeRange), 0.6),
    (QualityKey::Scheme(Scheme::GradeLevel), 0.6),
    (QualityKey::Scheme(Scheme::Tag), 0.45),
];

const DEFAULT_TARGET_AGE_QUALITY: f64 = 0.1;

fn lookup_quality(matches_key: impl Fn(&QualityKey) -> bool) -> Option<f64> {
    TARGET_AGE_QUALITY
        .iter()
        .find(|(key, _)| matches_key(key))
        .map(|(_, quality)| *quality)
}

/// Reliability coefficient of a classification as evidence of target age
#[must_use]
pub fn target_age_quality(data_source: &str, scheme: Scheme, identifier: Option<&str>) -> f64 {
    lookup_quality(|key| {
        matches!(key, QualityKey::SourceSchemeIdentifier(s, sc, id)
            if *s == data_source && *sc == scheme && Some(*id) == identifier)
    })
    .or_else(|| {
        lookup_quality(|key| matches!(key, QualityKey::SourceScheme(s, sc) if *s == data_source && *sc == scheme))
    })
    .or_else(|| lookup_quality(|key| matches!(key, QualityKey::Source(s) if *s == data_source)))
    .or_else(|| lookup_quality(|key| matches!(key, QualityKey::Scheme(sc) if *sc == scheme)))
    .unwrap_or(DEFAULT_TARGET_AGE_QUALITY)
}

/// Decide fiction status; a tie goes to nonfiction if there is any nonfiction evidence
#[must_use]
pub fn decide_fiction(weights: &Tally<bool>, default: Option<bool>) -> Option<bool> {
    if weights.is_empty() {
        return default;
    }
    let fiction = weights.get(true);
    let nonfiction = weights.get(false);
    if fiction > nonfiction {
        Some(true)
    } else if nonfiction > 0.0 {
        Some(false)
    } else {
        default
    }
}

/// Decide the audience from accumulated weights
///
/// A juvenile audience needs more than twice the adult-class weight, so
/// weak juvenile signals leave a book classified for adults. `erotica`
/// forces Adults Only whatever the weights say.
#[must_use]
pub fn decide_audience(
    weights: &Tally<Audience>,
    erotica: bool,
    default: Option<Audience>,
) -> Option<Audience> {
    if erotica {
        return Some(Audience::AdultsOnly);
    }
    if weights.is_empty() {
        return default;
    }

    let children = weights.get(Audience::Children);
    let young_adult = weights.get(Audience::YoungAdult);
    let adult = weights.get(Audience::Adult);
    let adults_only = weights.get(Audience::AdultsOnly);
    let all_ages = weights.get(Audience::AllAges);
    let research = weights.get(Audience::Research);

    let total_adult = adult + adults_only;
    let total_juvenile = children + young_adult;
    let threshold = total_adult * 2.0;

    let audience = if research > total_adult + all_ages
        && research > total_juvenile + all_ages
        && research > threshold
    {
        Some(Audience::Research)
    } else if all_ages > total_adult && all_ages > total_juvenile {
        Some(Audience::AllAges)
    } else if children > threshold && children > young_adult {
        Some(Audience::Children)
    } else if young_adult > threshold || total_juvenile > threshold {
        // Children and YA only clear the bar together; YA is the safer call.
        Some(Audience::YoungAdult)
    } else if total_adult > 0.0 {
        Some(Audience::Adult)
    } else {
        default
    };

    if audience == Some(Audience::Adult) && adults_only > total_adult / 4.0 {
        return Some(Audience::AdultsOnly);
    }
    audience
}

/// Decide the target age for an audience from lower and upper bound tallies
///
/// Only children's and YA books get an age from the evidence. The widest
/// top-tier span wins, and an inverted span is widened rather than swapped.
#[must_use]
pub fn decide_target_age(
    audience: Option<Audience>,
    lower_weights: &Tally<i32>,
    upper_weights: &Tally<i32>,
) -> AgeRange {
    if !audience.is_some_and(Audience::is_juvenile) {
        return default_target_age_for_audience(audience);
    }

    let lower = lower_weights.top_tier().into_iter().min();
    let upper = upper_weights.top_tier().into_iter().max();
    match (lower, upper) {
        (None, None) => default_target_age_for_audience(audience),
        (Some(l), Some(u)) => range_tuple(Some(l), Some(u.max(l))),
        // A bound with no evidence stays open.
        (lower, upper) => range_tuple(lower, upper),
    }
}

/// Drop genres whose share of the remaining weight is below `cutoff`
///
/// Candidates are visited lightest first and the denominator shrinks as
/// each one is dropped.
#[must_use]
pub fn low_pass_filter<K: Ord + Copy>(weights: &BTreeMap<K, f64>, cutoff: f64) -> BTreeMap<K, f64> {
    let mut ascending: Vec<(K, f64)> = weights.iter().map(|(k, w)| (*k, *w)).collect();
    ascending.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut total: f64 = ascending.iter().map(|(_, w)| w).sum();
    let mut kept = weights.clone();
    for (key, weight) in ascending {
        let affinity = if total > 0.0 { weight / total } else { 0.0 };
        if affinity < cutoff {
            total -= weight;
            kept.remove(&key);
        }
    }
    kept
}
