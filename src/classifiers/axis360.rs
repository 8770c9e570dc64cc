use regex::Regex;
use std::sync::LazyLock;

use super::{compile_patterns, ScrubbedIdentifier, SchemeClassifier};
use crate::core::types::{range_tuple, AgeRange, Audience, Scheme};

const TEEN_PREFIX: &str = "Teen -";
const CHILDRENS_PREFIX: &str = "Children's -";

static AGE_SUFFIX: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_patterns(&[r"Age ([0-9]+)-([0-9]+)$"]));

/// Axis 360 audience labels such as `Children's - Age 8-11`
#[derive(Debug, Clone, Copy, Default)]
pub struct Axis360AudienceClassifier;

impl Axis360AudienceClassifier {
    fn is_juvenile(identifier: &str) -> bool {
        identifier.starts_with(TEEN_PREFIX) || identifier.starts_with(CHILDRENS_PREFIX)
    }
}

impl SchemeClassifier for Axis360AudienceClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Axis360Audience
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        ScrubbedIdentifier::new(identifier.trim())
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        if identifier == "General Adult" {
            Some(Audience::Adult)
        } else if identifier.starts_with(TEEN_PREFIX) {
            Some(Audience::YoungAdult)
        } else if identifier.starts_with(CHILDRENS_PREFIX) {
            Some(Audience::Children)
        } else {
            None
        }
    }

    fn target_age(&self, identifier: Option<&str>, _name: Option<&str>) -> AgeRange {
        let Some(identifier) = identifier.filter(|id| Self::is_juvenile(id)) else {
            return AgeRange::UNKNOWN;
        };
        let Some(caps) = AGE_SUFFIX.iter().find_map(|re| re.captures(identifier)) else {
            return AgeRange::UNKNOWN;
        };
        let bound = |index: usize| caps.get(index).and_then(|m| m.as_str().parse::<i32>().ok());
        range_tuple(bound(1), bound(2))
    }
}
