use super::age::{parse_age_or_grade, parse_age_range};
use super::SchemeClassifier;
use crate::core::types::{
    default_audience_for_target_age, range_tuple, AgeRange, Audience, Scheme, ALL_AGES_AGE_CUTOFF,
};

/// Free-text audience labels such as "young adult", "all ages" or "grades 3-5"
///
/// Slogans like "books for all ages" are not trusted; only the literal
/// label "all ages" means an all-ages audience.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeformAudienceClassifier;

impl SchemeClassifier for FreeformAudienceClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::FreeformAudience
    }

    fn audience(&self, identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        match identifier? {
            "children" | "pre-adolescent" | "beginning reader" => Some(Audience::Children),
            "young adult" | "ya" | "teenagers" | "adolescent" | "early adolescents" => {
                Some(Audience::YoungAdult)
            }
            "adult" => Some(Audience::Adult),
            "adults only" => Some(Audience::AdultsOnly),
            "all ages" => Some(Audience::AllAges),
            "research" => Some(Audience::Research),
            _ => default_audience_for_target_age(self.target_age(identifier, name)),
        }
    }

    fn target_age(&self, identifier: Option<&str>, name: Option<&str>) -> AgeRange {
        let Some(identifier) = identifier else {
            return AgeRange::UNKNOWN;
        };
        match identifier {
            "beginning reader" => range_tuple(Some(5), Some(8)),
            "pre-adolescent" => range_tuple(Some(9), Some(12)),
            "early adolescents" => range_tuple(Some(13), Some(15)),
            "all ages" => range_tuple(Some(ALL_AGES_AGE_CUTOFF), None),
            _ => [Some(identifier), name]
                .into_iter()
                .flatten()
                .find_map(|text| {
                    // Marked ages and grades first, then assume a bare age.
                    parse_age_or_grade(text)
                        .filter(|range| !range.is_unknown())
                        .or_else(|| parse_age_range(text, false))
                })
                .unwrap_or(AgeRange::UNKNOWN),
        }
    }
}
